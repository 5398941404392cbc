mod loader;
mod schema;
mod types;

pub use loader::{
    LoadError, config_path, ensure_config_exists, load, load_from_path, load_from_str,
};
pub use schema::{ConfigError, ValidationError, ValidationResult, schema, validate};
pub use types::Config;
