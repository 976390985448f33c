//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use mensa_app::{context::AppContext, domain::offers::MockOffersService};

use crate::state::State;

pub(crate) fn state_with_offers(offers: MockOffersService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        offers: Arc::new(offers),
    }))
}

pub(crate) fn offers_service(offers: MockOffersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_offers(offers)))
            .push(route),
    )
}
