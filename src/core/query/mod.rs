//! Marker query layer: filtering and data-source selection

pub mod filter;
pub mod service;

pub use filter::{filter_markers, CityMatch};
pub use service::{MarkerQuery, QueryService};
