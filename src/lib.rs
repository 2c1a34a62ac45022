//! BioClave - Symptom decoding, journaling and self-help techniques.
//!
//! This crate implements the client-side core of the application: a symptom
//! lookup gated by a free-search quota, a local journal, a technique catalog
//! with generated explanations, and the subscription flow that lifts the gate.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
