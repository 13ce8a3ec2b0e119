pub mod trace;

pub use trace::{build_trace, TraceConfig};
