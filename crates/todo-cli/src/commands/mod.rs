//! Command handlers, one module per command family.

pub mod init;
pub mod items;
pub mod misc;
pub mod request;
