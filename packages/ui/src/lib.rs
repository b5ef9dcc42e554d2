//! Shared UI for the auth app: form rules, the submit flow, and the widgets the
//! pages are built from.

pub mod client;
pub mod clock;
pub mod forms;
pub mod navigation;
pub mod presence;
pub mod refresher;
pub mod strings;
pub mod submit;
pub mod toast;
pub mod validation;

mod form_field;
pub use form_field::FormField;

pub use client::{AuthClient, AuthError, ServerAuth};
pub use forms::{SigninFormValues, SignupFormValues};
pub use navigation::{AuthNotice, Destination, Navigate};
pub use presence::{AnimatePresence, AnimatedMessage, Keyed, PresenceList, PresenceStatus};
pub use refresher::{AuthRefreshToken, RefreshError, RefreshState, DEFAULT_REFRESH_INTERVAL};
pub use submit::{claim_submit, submit, AuthForm, SubmitOutcome};
pub use toast::{use_toasts, Notifier, Toast, ToastKind, ToastQueue, Toaster};
pub use validation::{Field, FieldErrors};
