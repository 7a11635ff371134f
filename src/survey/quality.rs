//! WiFi signal quality bands, as shown in the mapper legend.
//!
//! - Excellent: -50 dBm or stronger
//! - Good: -60 dBm or stronger
//! - Fair: -70 dBm or stronger
//! - Poor: anything weaker
use std::fmt;
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}
impl SignalQuality {
    pub const ALL: [SignalQuality; 4] = [
        SignalQuality::Excellent,
        SignalQuality::Good,
        SignalQuality::Fair,
        SignalQuality::Poor,
    ];
    pub fn from_dbm(dbm: f32) -> Self {
        if dbm >= -50.0 {
            SignalQuality::Excellent
        } else if dbm >= -60.0 {
            SignalQuality::Good
        } else if dbm >= -70.0 {
            SignalQuality::Fair
        } else {
            // NaN lands here too.
            SignalQuality::Poor
        }
    }
    pub fn label(self) -> &'static str {
        match self {
            SignalQuality::Excellent => "Excellent",
            SignalQuality::Good => "Good",
            SignalQuality::Fair => "Fair",
            SignalQuality::Poor => "Poor",
        }
    }
}
impl fmt::Display for SignalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
