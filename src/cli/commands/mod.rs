pub mod backup;
pub mod category;
pub mod config;
pub mod db;
pub mod event;
pub mod export;
pub mod guest;
pub mod init;
pub mod log;
pub mod overview;
pub mod profile;
pub mod project;
pub mod table;
