pub mod cmd;
pub mod config;
pub mod driver;
pub mod error;
pub mod exports;
pub mod project;
pub mod report;
pub mod sample;
pub mod scan;
pub mod util;
