pub mod init;
pub mod list;
pub mod take;
pub mod validate;
