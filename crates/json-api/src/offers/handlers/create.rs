//! Register Offer Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use mensa_app::domain::{
    offers::models::{Offer, OfferKind},
    segments::Segment,
};

use crate::{extensions::*, state::State};

/// Register Offer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterOfferRequest {
    /// Restaurant the offer applies to
    pub restaurant_id: i64,

    /// Offer type tag, `"FLATX"` or `"FLAT%"`
    pub offer_type: String,

    /// Flat amount or percentage
    pub offer_value: i64,

    /// Eligible customer segments
    pub customer_segment: Vec<String>,
}

impl From<RegisterOfferRequest> for Offer {
    fn from(request: RegisterOfferRequest) -> Self {
        Offer {
            restaurant_id: request.restaurant_id,
            kind: OfferKind::from_wire(&request.offer_type),
            value: request.offer_value,
            segments: request
                .customer_segment
                .into_iter()
                .map(Segment::new)
                .collect(),
        }
    }
}

/// Offer Registered Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OfferRegisteredResponse {
    /// Registration status message
    pub response_msg: String,
}

/// Register Offer Handler
///
/// Registration is append-only and never validates the payload: unknown
/// offer types, negative ids, and negative values are all accepted.
#[endpoint(
    tags("offers"),
    summary = "Register Offer",
    responses(
        (status_code = StatusCode::OK, description = "Offer registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterOfferRequest>,
    depot: &mut Depot,
) -> Result<Json<OfferRegisteredResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .offers
        .register_offer(json.into_inner().into())
        .await;

    Ok(Json(OfferRegisteredResponse {
        response_msg: "success".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use smallvec::smallvec;
    use testresult::TestResult;

    use mensa_app::domain::offers::MockOffersService;

    use crate::test_helpers::offers_service;

    use super::*;

    fn make_service(offers: MockOffersService) -> Service {
        offers_service(offers, Router::with_path("offer").post(handler))
    }

    #[tokio::test]
    async fn test_register_offer_success() -> TestResult {
        let mut offers = MockOffersService::new();

        offers
            .expect_register_offer()
            .once()
            .withf(|offer| {
                *offer
                    == Offer {
                        restaurant_id: 123_456_789,
                        kind: OfferKind::FlatAmount,
                        value: 10,
                        segments: smallvec![Segment::new("p1")],
                    }
            })
            .returning(|_| ());

        offers.expect_apply_offer().never();

        let mut res = TestClient::post("http://example.com/offer")
            .json(&json!({
                "restaurant_id": 123456789,
                "offer_type": "FLATX",
                "offer_value": 10,
                "customer_segment": ["p1"]
            }))
            .send(&make_service(offers))
            .await;

        let body: OfferRegisteredResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.response_msg, "success");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_offer_type_registers_as_percent() -> TestResult {
        let mut offers = MockOffersService::new();

        offers
            .expect_register_offer()
            .once()
            .withf(|offer| {
                *offer
                    == Offer {
                        restaurant_id: -123,
                        kind: OfferKind::FlatPercent,
                        value: 120,
                        segments: smallvec![Segment::new("p1"), Segment::new("p2")],
                    }
            })
            .returning(|_| ());

        offers.expect_apply_offer().never();

        let res = TestClient::post("http://example.com/offer")
            .json(&json!({
                "restaurant_id": -123,
                "offer_type": "null",
                "offer_value": 120,
                "customer_segment": ["p1", "p2"]
            }))
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_segment_list_is_accepted() -> TestResult {
        let mut offers = MockOffersService::new();

        offers
            .expect_register_offer()
            .once()
            .withf(|offer| offer.segments.is_empty())
            .returning(|_| ());

        offers.expect_apply_offer().never();

        let res = TestClient::post("http://example.com/offer")
            .json(&json!({
                "restaurant_id": 1,
                "offer_type": "FLAT%",
                "offer_value": 5,
                "customer_segment": []
            }))
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
