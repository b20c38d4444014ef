pub mod column;
pub mod config;
pub mod dataset;
pub mod row;
pub mod sorting;
