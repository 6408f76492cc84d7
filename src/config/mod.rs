// Core configuration types
mod core;
mod loader;
pub mod validation;

// Re-export core types
pub use self::core::{CertaintyConfig, OutputConfig, SmhmConfig};

// Re-export loader functions
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

pub use validation::{validate_config, validate_config_result, ConfigValidation};
