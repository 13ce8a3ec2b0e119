pub mod decay;
pub mod denoise;
pub mod echo;
pub mod pipeline;
pub mod residual;

pub use decay::ideal_decay;
pub use denoise::denoise;
pub use echo::detect_echoes;
pub use pipeline::analyze;
pub use residual::extract_residual;
