//! CLI command implementations.
//!
//! Available commands:
//! - **classify**: Identify one specimen from raw measurement text
//! - **coefficients**: Print the model formulas
//! - **init**: Initialize a new configuration file

pub mod classify;
pub mod coefficients;
pub mod init;

pub use classify::{handle_classify, ClassifyConfig, RawInput};
pub use coefficients::show_coefficients;
pub use init::init_config;
