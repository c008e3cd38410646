//! Browser adapters for the widget core's ports.

pub mod timer;
pub mod storage;

pub use timer::GlooTimer;
