//! Resource usage samples and the gauges they drive.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// One point of the CPU/memory time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Axis label, passed through as sent by the backend.
    pub time: String,
    pub cpu: f64,
    pub memory: f64,
}

/// A resource usage update. Every field is optional and applied on its own.
///
/// Fields are decoded independently: one with an unexpected shape is dropped
/// without affecting the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSample {
    #[serde(default, deserialize_with = "lenient")]
    pub cpu_usage: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub memory_usage: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub disk_usage: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub time_series: Option<TimeSeriesPoint>,
}

/// Accept any JSON value, keeping it only when it has the expected type.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A resource with a gauge on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Cpu,
    Memory,
    Disk,
}

impl Resource {
    pub const ALL: [Self; 3] = [Self::Cpu, Self::Memory, Self::Disk];

    /// Class of the element showing the percentage as text.
    #[must_use]
    pub fn usage_class(self) -> &'static str {
        match self {
            Self::Cpu => "cpu-usage",
            Self::Memory => "memory-usage",
            Self::Disk => "disk-usage",
        }
    }

    /// Class of the progress bar whose width follows the percentage.
    #[must_use]
    pub fn progress_class(self) -> &'static str {
        match self {
            Self::Cpu => "cpu-progress",
            Self::Memory => "memory-progress",
            Self::Disk => "disk-progress",
        }
    }
}

/// Latest known value of every gauge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResourceGauges {
    pub cpu: Option<f64>,
    pub memory: Option<f64>,
    pub disk: Option<f64>,
}

impl ResourceGauges {
    /// Current value of one gauge.
    #[must_use]
    pub fn get(&self, resource: Resource) -> Option<f64> {
        match resource {
            Resource::Cpu => self.cpu,
            Resource::Memory => self.memory,
            Resource::Disk => self.disk,
        }
    }

    /// Merge the fields present in `sample`; absent fields keep their value.
    ///
    /// Returns the gauges that were written.
    pub fn apply(&mut self, sample: &ResourceSample) -> Vec<Resource> {
        let mut changed = Vec::new();
        for (resource, value) in [
            (Resource::Cpu, sample.cpu_usage),
            (Resource::Memory, sample.memory_usage),
            (Resource::Disk, sample.disk_usage),
        ] {
            let Some(value) = value else { continue };
            match resource {
                Resource::Cpu => self.cpu = Some(value),
                Resource::Memory => self.memory = Some(value),
                Resource::Disk => self.disk = Some(value),
            }
            changed.push(resource);
        }
        changed
    }
}

/// Render a percentage the way gauges show it (`42.5%`, `7%`).
///
/// Used both for the text and for the progress bar width.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}
