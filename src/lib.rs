pub mod benchmark;
pub mod benchmark_utils;
pub mod compressor;
pub mod config;
pub mod dataset;
pub mod encoding;
pub mod error;
