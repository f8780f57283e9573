//! Process plumbing shared by the vote report binaries.

pub mod logging;
pub mod shutdown;

pub use logging::{init_logging, LogFormat, LoggingError};
pub use shutdown::ShutdownController;
