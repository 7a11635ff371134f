use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use serde::{Deserialize, Serialize};
/// Store-assigned identity. Issued in insertion order and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleId(pub u64);
impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
/// A signal reading at a grid coordinate, before the store gives it an identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub x: i32,
    pub y: i32,
    pub signal_strength: f32, // dBm
}
impl Reading {
    pub fn new(x: i32, y: i32, signal_strength: f32) -> Self {
        Self {
            x,
            y,
            signal_strength,
        }
    }
}
/// A stored measurement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub id: SampleId,
    pub x: i32,
    pub y: i32,
    pub signal_strength: f32, // dBm
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}
impl Sample {
    pub fn at(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }
    pub fn reading(&self) -> Reading {
        Reading::new(self.x, self.y, self.signal_strength)
    }
    /// Squared Euclidean distance to `(x, y)`.
    pub fn distance_sq(&self, x: i32, y: i32) -> f64 {
        let dx = f64::from(self.x) - f64::from(x);
        let dy = f64::from(self.y) - f64::from(y);
        dx * dx + dy * dy
    }
}
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn distance_is_squared_euclidean() {
        let sample = Sample {
            id: SampleId(0),
            x: 0,
            y: 0,
            signal_strength: -50.0,
            timestamp: 0,
        };
        assert_eq!(sample.distance_sq(3, 4), 25.0);
        assert_eq!(sample.distance_sq(-3, -4), 25.0);
        assert!(sample.at(0, 0));
        assert!(!sample.at(0, 1));
    }
    #[test]
    fn sample_serializes_camel_case() {
        let sample = Sample {
            id: SampleId(7),
            x: 2,
            y: 3,
            signal_strength: -61.5,
            timestamp: 1_700_000_000_000,
        };
        let json = serde_json::to_value(sample).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["signalStrength"], -61.5);
        assert_eq!(json["timestamp"], 1_700_000_000_000u64);
    }
}
