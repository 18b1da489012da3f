//! Core domain types and storage contracts for taskpad.
//!
//! This crate holds everything the request dispatcher needs that is not tied
//! to a concrete transport or storage backend: the task record, the validated
//! partial-update payload, the update-expression builder, and the
//! [`storage::TaskStore`] trait that backends implement.

pub mod storage;
pub mod task;
