//! `/auth`: the tabbed sign-in / sign-up card.

use dioxus::prelude::*;
use ui::{strings, use_toasts, AuthNotice, Notifier};

use super::signin::SigninForm;
use super::signup::SignupForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    SignIn,
    SignUp,
}

impl AuthTab {
    const ALL: [AuthTab; 2] = [AuthTab::SignIn, AuthTab::SignUp];

    fn value(&self) -> &'static str {
        match self {
            Self::SignIn => "signin",
            Self::SignUp => "signup",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::SignIn => strings::TAB_SIGN_IN,
            Self::SignUp => strings::TAB_SIGN_UP,
        }
    }
}

#[component]
pub fn Auth(notice: AuthNotice) -> Element {
    let toasts = use_toasts();

    use_effect(use_reactive((&notice,), move |(notice,)| match notice {
        AuthNotice::SignedOut => toasts.success(strings::SIGN_OUT_SUCCESS, None),
        AuthNotice::Unauthorized => toasts.error(strings::UNAUTHORIZED, None),
        AuthNotice::None => {}
    }));

    rsx! {
        main { class: "auth-page", dir: "rtl",
            AuthCard {}
        }
    }
}

/// Two tabs; only the active panel is mounted.
#[component]
fn AuthCard() -> Element {
    let mut active = use_signal(|| AuthTab::SignIn);

    rsx! {
        div { class: "tabs", dir: "rtl",
            div { class: "tab-list", role: "tablist",
                for tab in AuthTab::ALL {
                    button {
                        key: "{tab.value()}",
                        r#type: "button",
                        role: "tab",
                        id: "tab-{tab.value()}",
                        class: "tab-trigger",
                        aria_selected: "{active() == tab}",
                        aria_controls: "panel-{tab.value()}",
                        "data-state": if active() == tab { "active" } else { "inactive" },
                        onclick: move |_| active.set(tab),
                        {tab.label()}
                    }
                }
            }
            div {
                role: "tabpanel",
                id: "panel-{active().value()}",
                aria_labelledby: "tab-{active().value()}",
                class: "tab-panel",
                if active() == AuthTab::SignIn {
                    SigninForm {}
                } else {
                    SignupForm {}
                }
            }
        }
    }
}

/// Card chrome shared by both panels.
#[component]
pub(super) fn AuthPanel(title: &'static str, description: &'static str, children: Element) -> Element {
    rsx! {
        section { class: "card",
            header { class: "card-header",
                h2 { class: "card-title", {title} }
                p { class: "card-description", {description} }
            }
            {children}
        }
    }
}
