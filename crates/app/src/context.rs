//! App Context

use std::sync::Arc;

use crate::domain::{
    offers::{InMemoryOffersService, OffersService},
    segments::SegmentResolver,
};

/// Shared service handles injected into the HTTP layer.
#[derive(Clone)]
pub struct AppContext {
    /// Offer registration and cart evaluation.
    pub offers: Arc<dyn OffersService>,
}

impl AppContext {
    /// Build the application context around a segment resolver.
    #[must_use]
    pub fn new(segments: Arc<dyn SegmentResolver>) -> Self {
        Self {
            offers: Arc::new(InMemoryOffersService::new(segments)),
        }
    }
}
