//! Core library for the `momo_exporter` binary.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, the upstream fetch client, the stats-translation engine
//! that turns Momo's WebRTC stats array into metric samples, the Prometheus
//! collector facade, and the telemetry web listener. The primary user-facing
//! interface is the `momo_exporter` command-line application.
pub mod args;
pub mod error;
pub mod exporter;
pub mod fetch;
pub mod logger;
pub mod stats;
pub mod web;
