//! Accept loop and per-connection dispatch.

pub mod dispatch;
pub mod listener;

pub use dispatch::DispatchMode;
pub use listener::{bind, run, serve};
