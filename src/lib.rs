//! Core library for the `ocsp-loadgen` CLI.
//!
//! This crate provides the building blocks used by the binary: OCSP request
//! encoding, the warm-up request pool, rate-driven senders, the run
//! coordinator and latency sinks. The primary user-facing interface is the
//! `ocsp-loadgen` command-line application; library APIs may evolve as the
//! CLI grows.
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod ocsp;
pub mod pool;
pub mod recorder;
pub mod run;
pub mod shutdown;
pub mod shutdown_handlers;
