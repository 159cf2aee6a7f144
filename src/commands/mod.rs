pub mod clear;
pub mod create;
pub mod export;
pub mod init;
pub mod list;
pub mod services;
pub mod session;
pub mod status;
