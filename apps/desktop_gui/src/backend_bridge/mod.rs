//! Worker side of the UI/backend split: a dedicated thread owning a tokio
//! runtime, fed by a bounded command queue.

pub mod commands;
pub mod runtime;
