//! CLI command implementations for jobmap operations.
//!
//! Available commands:
//! - **analyze**: Classify job files and estimate migration effort
//! - **init**: Initialize a new jobmap configuration file
//! - **sample**: Print an example component inventory

pub mod analyze;
pub mod init;
pub mod sample;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
pub use sample::{write_sample, SAMPLE_CSV};
