//! Domain types and error taxonomy for the tasknote backend.
//!
//! This crate is free of I/O: the persistence adapter lives in
//! `tasknote-db` and the HTTP surface in `tasknote-api`.

pub mod error;
pub mod todo;
pub mod types;
