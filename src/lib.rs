//! Core library for the `dynoload` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, HTTP client construction, the worker-pool load driver,
//! and result aggregation. The primary user-facing interface is the
//! `dynoload` command-line application; library APIs may evolve as the CLI
//! grows.
pub mod args;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod report;
pub mod runner;
pub mod stats;
