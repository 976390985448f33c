//! Apply Offer Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use mensa_app::domain::offers::models::ApplyOffer;

use crate::{extensions::*, state::State};

/// Apply Offer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplyOfferRequest {
    /// Cart total before discounts
    pub cart_value: i64,

    /// Restaurant whose offers are considered
    pub restaurant_id: i64,

    /// User whose segment decides eligibility
    pub user_id: i64,
}

impl From<ApplyOfferRequest> for ApplyOffer {
    fn from(request: ApplyOfferRequest) -> Self {
        ApplyOffer {
            cart_value: request.cart_value,
            restaurant_id: request.restaurant_id,
            user_id: request.user_id,
        }
    }
}

/// Apply Offer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplyOfferResponse {
    /// Cart total after discount application
    pub cart_value: i64,
}

/// Apply Offer Handler
///
/// Returns the discounted cart total, or the total unchanged when no offer
/// matches. Never an error response for well-formed requests.
#[endpoint(
    tags("carts"),
    summary = "Apply Offer",
    responses(
        (status_code = StatusCode::OK, description = "Discounted cart value"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ApplyOfferRequest>,
    depot: &mut Depot,
) -> Result<Json<ApplyOfferResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart_value = state
        .app
        .offers
        .apply_offer(json.into_inner().into())
        .await;

    Ok(Json(ApplyOfferResponse { cart_value }))
}
