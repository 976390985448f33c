//! Offer Registry

use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::domain::offers::models::Offer;

/// Append-only, in-memory store of registered offers, keyed by restaurant.
///
/// Offers for a restaurant keep their registration order, which the
/// evaluator relies on for first-match-wins selection.
#[derive(Debug, Default)]
pub struct OfferRegistry {
    offers: RwLock<FxHashMap<i64, Vec<Offer>>>,
}

impl OfferRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an offer to its restaurant's sequence. Always succeeds; no
    /// dedup, no validation.
    pub async fn register(&self, offer: Offer) {
        let mut offers = self.offers.write().await;

        offers.entry(offer.restaurant_id).or_default().push(offer);
    }

    /// All offers for a restaurant, in registration order. Empty when the
    /// restaurant has none.
    pub async fn for_restaurant(&self, restaurant_id: i64) -> Vec<Offer> {
        let offers = self.offers.read().await;

        offers.get(&restaurant_id).cloned().unwrap_or_default()
    }
}
