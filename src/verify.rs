/// Index of the first position where `candidate` and `reference` differ.
///
/// A length mismatch reports the length of the shorter slice.
pub fn first_mismatch(candidate: &[i64], reference: &[i64]) -> Option<usize> {
    candidate
        .iter()
        .zip(reference)
        .position(|(a, b)| a != b)
        .or_else(|| {
            (candidate.len() != reference.len()).then(|| candidate.len().min(reference.len()))
        })
}

/// Panics unless `candidate` equals `reference` element for element.
pub fn verify_sorted(candidate: &[i64], reference: &[i64]) {
    if let Some(i) = first_mismatch(candidate, reference) {
        panic!(
            "Sort implementation produced incorrect result: mismatch at index {} (len {} vs reference len {})",
            i,
            candidate.len(),
            reference.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal() {
        verify_sorted(&[1, 2, 2, 3], &[1, 2, 2, 3]);
        verify_sorted(&[], &[]);
        assert_eq!(first_mismatch(&[1, 2], &[1, 2]), None);
    }

    #[test]
    fn test_mismatch_index() {
        assert_eq!(first_mismatch(&[1, 3, 2], &[1, 2, 3]), Some(1));
        assert_eq!(first_mismatch(&[1, 2], &[1, 2, 3]), Some(2));
        assert_eq!(first_mismatch(&[], &[7]), Some(0));
    }

    #[test]
    #[should_panic(expected = "Sort implementation produced incorrect result")]
    fn test_unsorted_panics() {
        verify_sorted(&[2, 1], &[1, 2]);
    }

    #[test]
    #[should_panic(expected = "Sort implementation produced incorrect result")]
    fn test_dropped_duplicate_panics() {
        verify_sorted(&[1, 2], &[1, 1, 2]);
    }
}
