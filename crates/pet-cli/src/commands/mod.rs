pub mod add;
pub mod delete;
pub mod dispatch;
pub mod find;
pub mod init;
pub mod parse;
pub mod stub;
