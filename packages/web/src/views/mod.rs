use dioxus::prelude::*;
use dioxus::router::Navigator;
use ui::{Destination, Navigate};

use crate::Route;

mod auth;
pub use auth::Auth;

mod signin;
mod signup;

mod secret;
pub use secret::Secret;

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Secret => Route::Secret {},
            Destination::Auth(notice) => Route::Auth { notice },
        }
    }
}

/// [`Navigate`] over the app router.
#[derive(Clone, Copy)]
pub(crate) struct RouteNavigator(pub Navigator);

impl RouteNavigator {
    /// Navigate without leaving a history entry.
    pub fn replace(&self, to: Destination) {
        self.0.replace(Route::from(to));
    }
}

impl Navigate for RouteNavigator {
    fn navigate(&self, to: Destination) {
        self.0.push(Route::from(to));
    }
}

pub(crate) fn use_route_navigator() -> RouteNavigator {
    RouteNavigator(use_navigator())
}
