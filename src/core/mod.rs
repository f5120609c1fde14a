//! The core module of the table extraction pipeline.
//!
//! This module contains the fundamental components shared by every stage:
//! - Configuration types for the tunable stage parameters
//! - Constants used throughout the pipeline
//! - Error handling
//! - Input validation utilities
//!
//! It also provides re-exports of commonly used types for convenience.

pub mod config;
pub mod constants;
pub mod errors;
pub mod validation;

pub use config::{
    BinarizerConfig, GridScanConfig, LineExtractorConfig, LocatorConfig, TesseractConfig,
    ThresholdMethod,
};
pub use constants::*;
pub use errors::GridScanError;

/// Initializes the tracing subscriber for logging.
///
/// This function sets up the tracing subscriber with environment filter and formatting layer.
/// It's typically called at the start of an application to enable logging.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
