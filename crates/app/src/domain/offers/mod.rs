//! Offers

pub mod models;
pub mod registry;
pub mod service;

pub use registry::OfferRegistry;
pub use service::*;
