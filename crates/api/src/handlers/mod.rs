//! Request handlers for the todo API.
//!
//! Handlers parse the request, call [`crate::service::TodoService`], and
//! pattern-match results and error kinds into enveloped responses.

pub mod todos;
