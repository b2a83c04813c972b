// src/host/mod.rs

pub mod sync_host;

pub use sync_host::{SyncHost, SyncReport};
