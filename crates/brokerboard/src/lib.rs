//! Core library for the brokerage performance board.
//!
//! `scoring` holds the pure rule tables, `dashboard` derives every view the
//! board serves and exposes them over HTTP, and `roster` ingests the CSV
//! export used to seed a store. Config, telemetry, and the shared error type
//! live alongside so binaries only wire the pieces together.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod roster;
pub mod scoring;
pub mod telemetry;
