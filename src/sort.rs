use log::trace;

/// A named in-place sort under comparison.
#[derive(Debug, Clone, Copy)]
pub struct Algorithm {
    pub name: &'static str,
    pub sort: fn(&mut [i64]),
}

pub const ALGORITHMS: [Algorithm; 2] = [
    Algorithm { name: "Bubble sort", sort: bubble_sort },
    Algorithm { name: "Insertion sort", sort: insertion_sort },
];

/// Sorts `arr` in place by repeatedly swapping adjacent out-of-order pairs.
///
/// Stops after the first pass that makes no swap, so already sorted input
/// costs a single pass.
pub fn bubble_sort(arr: &mut [i64]) {
    let n = arr.len();
    let mut passes = 0;
    for i in 0..n {
        passes += 1;
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    trace!("Bubble sort: {} elements, {} passes", n, passes);
}

/// Sorts `arr` in place by shifting each key left past every larger element
/// of the sorted prefix.
pub fn insertion_sort(arr: &mut [i64]) {
    for j in 1..arr.len() {
        let key = arr[j];
        let mut i = j;
        while i > 0 && arr[i - 1] > key {
            arr[i] = arr[i - 1];
            i -= 1;
        }
        arr[i] = key;
    }
    trace!("Insertion sort: {} elements", arr.len());
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use super::*;

    fn reference(arr: &[i64]) -> Vec<i64> {
        let mut sorted = arr.to_vec();
        sorted.sort();
        sorted
    }

    #[test]
    fn test_small() {
        for algorithm in ALGORITHMS {
            let mut arr = vec![5, 3, 1, 4, 2];
            (algorithm.sort)(&mut arr);
            assert_eq!(arr, [1, 2, 3, 4, 5], "{}", algorithm.name);
        }
    }

    #[test]
    fn test_empty_and_single() {
        for algorithm in ALGORITHMS {
            let mut empty: Vec<i64> = vec![];
            (algorithm.sort)(&mut empty);
            assert!(empty.is_empty());

            let mut single = vec![42];
            (algorithm.sort)(&mut single);
            assert_eq!(single, [42]);
        }
    }

    #[test]
    fn test_duplicates_and_negatives() {
        let input = vec![3, -1, 3, 0, -1, i64::MAX, i64::MIN, 3, 0];
        for algorithm in ALGORITHMS {
            let mut arr = input.clone();
            (algorithm.sort)(&mut arr);
            assert_eq!(arr, reference(&input), "{}", algorithm.name);
        }
    }

    #[test]
    fn test_already_sorted_is_unchanged() {
        let sorted: Vec<i64> = (-50..50).collect();
        for algorithm in ALGORITHMS {
            let mut arr = sorted.clone();
            (algorithm.sort)(&mut arr);
            assert_eq!(arr, sorted, "{}", algorithm.name);
        }
    }

    #[test]
    fn test_reversed() {
        let mut arr: Vec<i64> = (1..=64).rev().collect();
        insertion_sort(&mut arr);
        assert_eq!(arr, (1..=64).collect::<Vec<i64>>());

        let mut arr: Vec<i64> = (1..=64).rev().collect();
        bubble_sort(&mut arr);
        assert_eq!(arr, (1..=64).collect::<Vec<i64>>());
    }

    #[test]
    fn test_random_matches_reference() {
        let mut rng = StdRng::seed_from_u64(12345);
        for _ in 0..50 {
            let n = rng.gen_range(0..200);
            let input: Vec<i64> = (0..n).map(|_| rng.gen_range(-100..100)).collect();
            let expected = reference(&input);
            for algorithm in ALGORITHMS {
                let mut arr = input.clone();
                (algorithm.sort)(&mut arr);
                assert_eq!(arr, expected, "{} failed on {:?}", algorithm.name, input);
            }
        }
    }
}
