use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::path::{AttributePath, resolve};
use crate::datadog::types::RumEvent;

/// Largest magnitude at which every whole f64 is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// count/avg/min/max over one metric path. All zero when no samples matched.
/// Whole values serialize as JSON integers (`200`, not `200.0`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricSummary {
    #[serde(serialize_with = "serialize_metric_value")]
    pub avg: f64,
    #[serde(serialize_with = "serialize_metric_value")]
    pub min: f64,
    #[serde(serialize_with = "serialize_metric_value")]
    pub max: f64,
    pub count: usize,
}

fn serialize_metric_value<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Incremental mean; stays finite where a plain sum would overflow.
fn running_mean(samples: &[f64]) -> f64 {
    samples
        .iter()
        .enumerate()
        .fold(0.0, |mean, (i, x)| mean + (x - mean) / (i + 1) as f64)
}

impl MetricSummary {
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }
        let sum: f64 = samples.iter().sum();
        let avg = if sum.is_finite() {
            sum / samples.len() as f64
        } else {
            running_mean(samples)
        };
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            avg,
            min,
            max,
            count: samples.len(),
        }
    }
}

/// Summarize every requested metric path across `events` in a single pass.
/// Only JSON numbers are sampled; strings and booleans are skipped.
pub fn summarize_metrics(events: &[RumEvent], metrics: &[String]) -> BTreeMap<String, MetricSummary> {
    let paths: Vec<AttributePath> = metrics.iter().map(|m| AttributePath::parse(m)).collect();
    let mut series: Vec<Vec<f64>> = vec![Vec::new(); metrics.len()];

    for event in events {
        let Some(root) = event.attribute_root() else {
            continue;
        };
        for (path, samples) in paths.iter().zip(series.iter_mut()) {
            if let Some(Value::Number(n)) = resolve(root, path.segments()).value()
                && let Some(sample) = n.as_f64()
            {
                samples.push(sample);
            }
        }
    }

    metrics
        .iter()
        .zip(series)
        .map(|(name, samples)| (name.clone(), MetricSummary::from_samples(&samples)))
        .collect()
}
