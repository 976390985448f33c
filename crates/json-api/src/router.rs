//! App Router

use salvo::Router;

use crate::{carts, offers};

pub(crate) fn app_router() -> Router {
    Router::with_path("api/v1")
        .push(Router::with_path("offer").post(offers::create::handler))
        .push(
            Router::with_path("cart")
                .push(Router::with_path("apply_offer").post(carts::apply_offer::handler)),
        )
}
