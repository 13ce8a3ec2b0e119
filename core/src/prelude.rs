//! Everything a caller needs for one analysis call.

pub use crate::processing::pipeline::analyze;
pub use crate::{
    DecayConfig, EchoClass, EchoRecord, FilterConfig, FingerprintError, FingerprintResult,
    TelemetrySample,
};
