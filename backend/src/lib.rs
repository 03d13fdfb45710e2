//! Kids budget tool backend.
//!
//! Keeps a list of per-child budget records in a JSON file and serves them
//! over a small REST API, along with the derived savings/spending split.

pub mod domain;
pub mod io;
pub mod storage;
