pub mod aggregator;
pub mod benchmark;
pub mod config;
pub mod error;
pub mod runner;
pub mod stats;
pub mod table;
pub mod utils;
pub mod writer;
