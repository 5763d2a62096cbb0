use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Mean in seconds.
    pub mean: f64,
    /// Sample standard deviation in seconds.
    pub std_dev: f64,
    pub sample_count: usize,
}

impl Summary {
    pub fn from_durations(samples: &[Duration]) -> Summary {
        let secs: Vec<f64> = samples.iter().map(Duration::as_secs_f64).collect();
        Summary {
            mean: mean(&secs),
            std_dev: std_dev(&secs),
            sample_count: secs.len(),
        }
    }
}

pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Unbiased sample standard deviation, 0.0 below two samples.
pub fn std_dev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let mean = mean(samples);
    let variance =
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    variance.sqrt()
}
