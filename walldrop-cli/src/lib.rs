//! Command line front-end for walldrop: argument parsing, configuration loading and terminal
//! progress output.
pub use clap;

pub mod cli;
pub mod config;
pub mod error;
pub mod progress_bars;
