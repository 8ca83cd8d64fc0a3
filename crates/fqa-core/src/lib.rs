pub mod config;
pub mod logging;

pub mod catalog;
pub mod checksum;
pub mod fetcher;
pub mod placeholder;
pub mod storage;
pub mod transport;
