pub mod calculator;
pub mod config;
pub mod del;
pub mod filter;
pub mod import;
pub mod log;
pub mod pareto;
pub mod parser;
