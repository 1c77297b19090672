/// Connect command functionality
pub mod connect;
/// Init command functionality
pub mod init;
