//! Periodic session refresh.
//!
//! Calling `get_session` renews the session's inactivity window on the server,
//! so an open tab keeps its user signed in. The component renders nothing
//! unless the last attempt failed.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

use api::AuthFailure;

use crate::client::{AuthClient, AuthError, ServerAuth};
use crate::clock::sleep;
use crate::strings;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RefreshError {
    #[error("{}", .0.message.as_deref().unwrap_or(strings::REFRESH_FALLBACK))]
    Declared(AuthFailure),
    #[error("{}", strings::REFRESH_FAILED)]
    Thrown,
}

/// Outcome of the most recent refresh. Older outcomes are discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshState {
    error: Option<RefreshError>,
}

impl RefreshState {
    pub fn record(&mut self, outcome: Result<(), RefreshError>) {
        self.error = outcome.err();
    }

    pub fn error(&self) -> Option<&RefreshError> {
        self.error.as_ref()
    }
}

/// One refresh attempt. Having no session is not an error.
pub async fn refresh_session<C: AuthClient>(client: &C) -> Result<(), RefreshError> {
    match client.get_session().await {
        Ok(_) => Ok(()),
        Err(AuthError::Rejected(failure)) => Err(RefreshError::Declared(failure)),
        Err(AuthError::Transport(reason)) => {
            tracing::error!(%reason, "session refresh failed");
            Err(RefreshError::Thrown)
        }
    }
}

/// Refresh immediately, then once per `interval`, forever.
pub async fn run_refresher<C, F>(client: C, interval: Duration, mut report: F)
where
    C: AuthClient,
    F: FnMut(Result<(), RefreshError>),
{
    loop {
        report(refresh_session(&client).await);
        sleep(interval).await;
    }
}

/// Keeps the session alive while mounted.
#[component]
pub fn AuthRefreshToken(
    #[props(default = DEFAULT_REFRESH_INTERVAL)] refresh_interval: Duration,
) -> Element {
    let mut state = use_signal(RefreshState::default);
    let task = use_hook(|| Rc::new(Cell::new(None::<Task>)));

    let running = task.clone();
    use_effect(use_reactive((&refresh_interval,), move |(interval,)| {
        if let Some(previous) = running.take() {
            previous.cancel();
        }
        let handle = spawn(run_refresher(ServerAuth, interval, move |outcome| {
            state.write().record(outcome);
        }));
        running.set(Some(handle));
    }));

    use_drop(move || {
        if let Some(handle) = task.take() {
            handle.cancel();
        }
    });

    let error = state.read().error().cloned();
    match error {
        Some(error) => rsx! {
            div { class: "refresh-error", role: "alert", "{error}" }
        },
        None => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::submit::testing::{user, MockClient};

    #[test]
    fn error_messages() {
        let declared = RefreshError::Declared(AuthFailure {
            message: Some("Session expired".into()),
            ..AuthFailure::default()
        });
        assert_eq!(declared.to_string(), "Session expired");
        assert_eq!(
            RefreshError::Declared(AuthFailure::default()).to_string(),
            "can't retrieve a cookie"
        );
        assert_eq!(RefreshError::Thrown.to_string(), "Failed to refresh session");
    }

    #[test]
    fn state_keeps_only_the_latest_outcome() {
        let mut state = RefreshState::default();
        state.record(Err(RefreshError::Thrown));
        state.record(Err(RefreshError::Declared(AuthFailure::default())));
        assert_eq!(
            state.error(),
            Some(&RefreshError::Declared(AuthFailure::default()))
        );
        state.record(Ok(()));
        assert_eq!(state.error(), None);
    }

    #[tokio::test]
    async fn missing_session_is_not_an_error() {
        let client = MockClient::default();
        assert_eq!(refresh_session(&client).await, Ok(()));

        client.session.borrow_mut().push(Ok(Some(user("a"))));
        assert_eq!(refresh_session(&client).await, Ok(()));
    }

    #[tokio::test]
    async fn transport_failure_maps_to_thrown() {
        let client = MockClient::default();
        client
            .session
            .borrow_mut()
            .push(Err(AuthError::Transport("offline".into())));
        assert_eq!(refresh_session(&client).await, Err(RefreshError::Thrown));
    }

    #[tokio::test(start_paused = true)]
    async fn fetches_on_start_and_every_interval() {
        let client = MockClient::default();
        client
            .session
            .borrow_mut()
            .push(Err(AuthError::Transport("offline".into())));

        let reports = RefCell::new(Vec::new());
        let interval = Duration::from_secs(60);
        let run = run_refresher(&client, interval, |outcome| reports.borrow_mut().push(outcome));

        // Ticks at 0, 1 and 2 intervals fall inside the window.
        let _ = tokio::time::timeout(interval * 5 / 2, run).await;

        assert_eq!(client.session_calls.get(), 3);
        let mut state = RefreshState::default();
        for outcome in reports.into_inner() {
            state.record(outcome);
        }
        assert_eq!(state.error(), Some(&RefreshError::Thrown));
    }
}
