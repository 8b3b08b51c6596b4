pub mod generate;
pub mod init;
pub mod prompt;
pub mod validate;
