pub mod check;
pub mod completion;
pub mod config;
pub mod diff;
pub mod init;
