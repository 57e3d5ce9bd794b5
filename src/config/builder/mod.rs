//! Configuration builder for type-safe configuration construction

mod config_builder;
pub mod presets;

pub use config_builder::ConfigBuilder;
