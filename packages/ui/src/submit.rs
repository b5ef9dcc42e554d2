//! The submit flow shared by both auth forms: validate, send, report, redirect.

use api::UserInfo;

use crate::client::{AuthClient, AuthError};
use crate::clock::now_description;
use crate::navigation::{Destination, Navigate};
use crate::toast::Notifier;
use crate::validation::FieldErrors;

/// A form whose values map onto one auth request.
#[allow(async_fn_in_trait)]
pub trait AuthForm: Clone {
    type Request;

    const SUCCESS_TITLE: &'static str;
    const FAILURE_TITLE: &'static str;
    /// Shown when the failure carries no server message.
    const FAILURE_FALLBACK: &'static str;

    fn errors(&self) -> FieldErrors;

    fn into_request(self) -> Self::Request;

    async fn send<C: AuthClient>(client: &C, request: Self::Request) -> Result<UserInfo, AuthError>;

    fn validate(&self) -> Result<Self::Request, FieldErrors> {
        let errors = self.errors();
        if errors.is_empty() {
            Ok(self.clone().into_request())
        } else {
            Err(errors)
        }
    }
}

/// Take the form's single submit slot. Returns `false` while a submission is
/// still in flight. Call it in the event handler itself, before spawning.
pub fn claim_submit(pending: &mut bool) -> bool {
    if *pending {
        return false;
    }
    *pending = true;
    true
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing was sent.
    Invalid(FieldErrors),
    Succeeded(UserInfo),
    Failed(AuthError),
}

pub async fn submit<F, C, N, R>(form: &F, client: &C, notifier: &N, router: &R) -> SubmitOutcome
where
    F: AuthForm,
    C: AuthClient,
    N: Notifier + ?Sized,
    R: Navigate + ?Sized,
{
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };

    match F::send(client, request).await {
        Ok(user) => {
            notifier.success(F::SUCCESS_TITLE, Some(now_description()));
            router.navigate(Destination::Secret);
            SubmitOutcome::Succeeded(user)
        }
        Err(error) => {
            tracing::warn!(%error, "auth form submission failed");
            let description = error.message().unwrap_or(F::FAILURE_FALLBACK).to_string();
            notifier.error(F::FAILURE_TITLE, Some(description));
            SubmitOutcome::Failed(error)
        }
    }
}
