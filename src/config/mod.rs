//! Configuration: the TOML file, CLI override merging, and environment checks.

mod env;
mod manager;
mod temperature;

pub use env::{load_env_files, validate_environment, validate_environment_with};
pub use manager::{
    AppConfig, CliOverrides, ConfigFile, ConfigManager, EXAMPLE_CONFIG, create_example_config,
    load_config_file, merge_config,
};
pub use temperature::{
    DEFAULT_TEMPERATURE, MAX_TEMPERATURE, MIN_TEMPERATURE, Temperature, TemperatureError,
};
