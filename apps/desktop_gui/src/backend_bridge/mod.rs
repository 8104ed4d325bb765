//! Bridge between the UI thread and the channel worker.

pub mod commands;
pub mod runtime;
