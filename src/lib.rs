pub mod cleaning;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod dedup;
pub mod error;
pub mod generator;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod validate;
