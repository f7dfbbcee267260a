pub mod client;
pub mod config;
pub mod consultant;
pub mod discovery_source;
pub mod dupe_finder;
