pub mod error;
pub mod validation;
pub mod config;
pub mod model;
pub mod format;
pub mod sheet;
pub mod db;
pub mod source;
pub mod migrate;
pub mod ops;
pub mod share;
pub mod session;
pub mod cli;
