//! Offer Models

use smallvec::SmallVec;

use crate::domain::segments::Segment;

/// The discount shape of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferKind {
    /// Subtract a fixed amount from the cart total.
    FlatAmount,

    /// Discount the cart total by a percentage.
    FlatPercent,
}

impl OfferKind {
    /// Map an `offer_type` wire tag onto a discount shape.
    ///
    /// Only `"FLATX"` selects the flat-amount shape; every other tag,
    /// `"FLAT%"` included, runs the percentage arithmetic. Registration
    /// never rejects a tag.
    #[must_use]
    pub fn from_wire(offer_type: &str) -> Self {
        if offer_type == "FLATX" {
            Self::FlatAmount
        } else {
            Self::FlatPercent
        }
    }
}

/// A discount rule scoped to one restaurant and a set of customer segments.
///
/// Offers are immutable once registered and registration order is
/// significant: the first matching offer wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    /// Restaurant the offer belongs to.
    pub restaurant_id: i64,

    /// Discount shape.
    pub kind: OfferKind,

    /// Flat amount or percentage, depending on [`OfferKind`].
    pub value: i64,

    /// Segments eligible for this offer.
    pub segments: SmallVec<[Segment; 4]>,
}

impl Offer {
    /// Apply this offer's discount to a cart total.
    ///
    /// Results are not clamped; negative totals are valid outputs.
    #[must_use]
    pub fn apply_to(&self, cart_value: i64) -> i64 {
        match self.kind {
            OfferKind::FlatAmount => cart_value.saturating_sub(self.value),
            OfferKind::FlatPercent => {
                // The discounted total is the remaining share of the cart,
                // truncated toward zero.
                let remaining = 100_i64.saturating_sub(self.value);

                cart_value.saturating_mul(remaining) / 100
            }
        }
    }
}

/// A request to apply the best offer to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOffer {
    /// Cart total before discounts.
    pub cart_value: i64,

    /// Restaurant whose offers are considered.
    pub restaurant_id: i64,

    /// User whose segment decides eligibility.
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    fn offer(kind: OfferKind, value: i64) -> Offer {
        Offer {
            restaurant_id: 123_456_789,
            kind,
            value,
            segments: smallvec![Segment::new("p1")],
        }
    }

    #[test]
    fn flat_amount_tag_maps_to_flat_amount() {
        assert_eq!(OfferKind::from_wire("FLATX"), OfferKind::FlatAmount);
    }

    #[test]
    fn percent_tag_maps_to_flat_percent() {
        assert_eq!(OfferKind::from_wire("FLAT%"), OfferKind::FlatPercent);
    }

    #[test]
    fn unknown_tags_map_to_flat_percent() {
        assert_eq!(OfferKind::from_wire("null"), OfferKind::FlatPercent);
        assert_eq!(OfferKind::from_wire(""), OfferKind::FlatPercent);
        assert_eq!(OfferKind::from_wire("flatx"), OfferKind::FlatPercent);
    }

    #[test]
    fn flat_amount_subtracts_value() {
        assert_eq!(offer(OfferKind::FlatAmount, 10).apply_to(863), 853);
    }

    #[test]
    fn flat_amount_may_go_negative() {
        assert_eq!(offer(OfferKind::FlatAmount, 390).apply_to(100), -290);
    }

    #[test]
    fn percent_discount_truncates_the_remaining_total() {
        // 765 * 67% = 512.55
        assert_eq!(offer(OfferKind::FlatPercent, 33).apply_to(765), 512);

        // 7_954_837 * 22% = 1_750_064.14
        assert_eq!(offer(OfferKind::FlatPercent, 78).apply_to(7_954_837), 1_750_064);
    }

    #[test]
    fn percent_over_one_hundred_goes_negative() {
        assert_eq!(offer(OfferKind::FlatPercent, 120).apply_to(10_000), -2_000);
    }

    #[test]
    fn negative_percent_increases_the_total() {
        assert_eq!(offer(OfferKind::FlatPercent, -20).apply_to(1_000), 1_200);
    }

    #[test]
    fn negative_cart_value_flows_through_percent_arithmetic() {
        assert_eq!(offer(OfferKind::FlatPercent, 78).apply_to(-1_000), -220);
    }

    #[test]
    fn extreme_values_do_not_panic() {
        assert_eq!(
            offer(OfferKind::FlatAmount, i64::MIN).apply_to(i64::MAX),
            i64::MAX
        );

        let _total = offer(OfferKind::FlatPercent, i64::MAX).apply_to(i64::MAX);
    }
}
