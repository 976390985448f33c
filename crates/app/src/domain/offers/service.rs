//! Offers service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::domain::{
    offers::{
        models::{ApplyOffer, Offer},
        registry::OfferRegistry,
    },
    segments::SegmentResolver,
};

/// Offers service backed by the in-memory registry.
#[derive(Clone)]
pub struct InMemoryOffersService {
    registry: Arc<OfferRegistry>,
    segments: Arc<dyn SegmentResolver>,
}

impl InMemoryOffersService {
    #[must_use]
    pub fn new(segments: Arc<dyn SegmentResolver>) -> Self {
        Self {
            registry: Arc::new(OfferRegistry::new()),
            segments,
        }
    }
}

#[async_trait]
impl OffersService for InMemoryOffersService {
    async fn register_offer(&self, offer: Offer) {
        self.registry.register(offer).await;
    }

    async fn apply_offer(&self, request: ApplyOffer) -> i64 {
        let segment = match self.segments.resolve(request.user_id).await {
            Ok(segment) => segment,
            Err(error) => {
                debug!(
                    user_id = request.user_id,
                    "segment resolution failed, skipping discount: {error}"
                );

                return request.cart_value;
            }
        };

        let offers = self.registry.for_restaurant(request.restaurant_id).await;

        offers
            .iter()
            .find(|offer| offer.segments.contains(&segment))
            .map_or(request.cart_value, |offer| {
                offer.apply_to(request.cart_value)
            })
    }
}

#[automock]
#[async_trait]
pub trait OffersService: Send + Sync {
    /// Append an offer to the registry.
    async fn register_offer(&self, offer: Offer);

    /// Apply the first registered offer matching the user's segment to the
    /// cart total. Returns the total unchanged when the restaurant has no
    /// matching offer or the segment cannot be resolved.
    async fn apply_offer(&self, request: ApplyOffer) -> i64;
}
