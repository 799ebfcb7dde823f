//! Structured logging for graph edits, proof steps and file IO
//!
//! Every logged operation emits a `start` event and then exactly one of `end`,
//! `end_error` or `rejected`, carrying the canonical fields from
//! `aeg_core_types::schema`. The `aeg` binary calls [`init`]; tests use
//! [`init_test_capture`].

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
