//! Marker snapshot caching

pub mod store;

pub use store::CacheStore;
