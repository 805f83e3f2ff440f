//! Command implementations

pub mod init;
pub mod snapshot;
pub mod validate;
pub mod watch;
