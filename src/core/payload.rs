//! Random payloads for demos, benches and tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Kind of value a generated payload contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Whole numbers between the truncated bounds.
    Integer,
    /// Values rounded to two decimal places.
    #[default]
    Double,
}

/// `count` random values in `min..=max`, drawn from the thread-local generator.
pub fn generate_test_payload(
    count: usize,
    max: f64,
    min: f64,
    value_type: ValueType,
) -> ChartResult<Vec<f64>> {
    generate_test_payload_with(&mut rand::thread_rng(), count, max, min, value_type)
}

/// Same as [`generate_test_payload`] with a caller-supplied generator.
pub fn generate_test_payload_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    max: f64,
    min: f64,
    value_type: ValueType,
) -> ChartResult<Vec<f64>> {
    if !max.is_finite() || !min.is_finite() {
        return Err(ChartError::InvalidData(
            "payload bounds must be finite".to_owned(),
        ));
    }
    if max < min {
        return Err(ChartError::InvalidData(format!(
            "payload max {max} is below min {min}"
        )));
    }

    let values = match value_type {
        ValueType::Double => (0..count)
            .map(|_| (rng.gen_range(min..=max) * 100.0).round() / 100.0)
            .collect(),
        ValueType::Integer => {
            let (low, high) = (min.trunc() as i64, max.trunc() as i64);
            (0..count)
                .map(|_| rng.gen_range(low..=high) as f64)
                .collect()
        }
    };
    Ok(values)
}
