//! Process-wide log setup shared by the aipm binaries.

pub mod logging;

pub use logging::{LogFormat, init, init_with};
