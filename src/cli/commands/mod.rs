//! CLI command implementations
//!
//! Every command returns the process exit code.

pub mod init;
pub mod run;
pub mod validate;
