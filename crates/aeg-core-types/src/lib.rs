//! Core types shared across AEG facilities
//!
//! This crate provides the foundational vocabulary used by the logging
//! facility and by every crate that emits structured events:
//!
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
