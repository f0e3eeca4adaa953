//! Bridge between the UI thread and the async delivery worker.

pub mod commands;
pub mod runtime;
