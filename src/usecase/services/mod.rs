pub mod collation;
pub mod config_merger;
pub mod import_service;
pub mod sort_engine;
pub mod style_rules;
pub mod visibility;
