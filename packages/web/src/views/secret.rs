//! `/secret`: only reachable with a live session.

use dioxus::prelude::*;
use ui::{strings, use_toasts, AuthClient, AuthNotice, Destination, Navigate, Notifier, ServerAuth};

use super::use_route_navigator;

#[component]
pub fn Secret() -> Element {
    let navigator = use_route_navigator();
    let toasts = use_toasts();
    let session = use_resource(|| async move { ServerAuth.get_session().await });
    let mut signing_out = use_signal(|| false);

    use_effect(move || match &*session.read() {
        Some(Ok(None)) => navigator.replace(Destination::Auth(AuthNotice::Unauthorized)),
        Some(Err(error)) => {
            tracing::warn!(%error, "session lookup failed");
            navigator.replace(Destination::Auth(AuthNotice::Unauthorized));
        }
        _ => {}
    });

    let user = match &*session.read() {
        Some(Ok(Some(user))) => user.clone(),
        _ => return rsx! {},
    };

    let sign_out = move |_: MouseEvent| {
        signing_out.set(true);
        spawn(async move {
            match ServerAuth.sign_out().await {
                Ok(()) => navigator.navigate(Destination::Auth(AuthNotice::SignedOut)),
                Err(error) => {
                    tracing::warn!(%error, "sign-out failed");
                    toasts.error(strings::SIGN_OUT_FAILURE, error.message().map(str::to_string));
                    signing_out.set(false);
                }
            }
        });
    };

    rsx! {
        main { class: "secret-page", dir: "rtl",
            section { class: "card",
                h1 { class: "card-title", "secret" }
                p { class: "secret-user", "{user.display_name()}" }
                button {
                    class: "button button-outline",
                    r#type: "button",
                    disabled: signing_out(),
                    onclick: sign_out,
                    {strings::SIGN_OUT}
                }
            }
        }
    }
}
