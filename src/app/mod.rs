//! Application-level plumbing shared by the binary.

mod logging;

pub use logging::init_logger_with;
