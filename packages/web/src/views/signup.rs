use dioxus::prelude::*;
use ui::{claim_submit, strings, submit, use_toasts, AuthForm, Field, FieldErrors, FormField, ServerAuth, SignupFormValues, SubmitOutcome};

use super::auth::AuthPanel;
use super::use_route_navigator;

#[component]
pub fn SignupForm() -> Element {
    let toasts = use_toasts();
    let navigator = use_route_navigator();
    let mut values = use_signal(SignupFormValues::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut attempted = use_signal(|| false);
    let mut pending = use_signal(|| false);

    use_effect(move || {
        if attempted() {
            errors.set(values.read().errors());
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if !claim_submit(&mut pending.write()) {
            return;
        }
        attempted.set(true);
        let form = values();
        spawn(async move {
            let outcome = submit(&form, &ServerAuth, &toasts, &navigator).await;
            pending.set(false);
            if let SubmitOutcome::Invalid(found) = outcome {
                errors.set(found);
            }
        });
    };

    rsx! {
        AuthPanel { title: strings::SIGN_UP_TITLE, description: strings::SIGN_UP_DESCRIPTION,
            form { class: "auth-form", novalidate: true, onsubmit,
                FormField {
                    id: "signup-name",
                    label: strings::LABEL_NAME,
                    value: values.read().name.clone(),
                    placeholder: strings::PLACEHOLDER_NAME,
                    autocomplete: "name",
                    disabled: pending(),
                    error: errors.read().message(Field::Name),
                    oninput: move |evt: FormEvent| values.write().name = evt.value(),
                }
                FormField {
                    id: "signup-email",
                    label: strings::LABEL_EMAIL,
                    input_type: "email",
                    value: values.read().email.clone(),
                    placeholder: strings::PLACEHOLDER_EMAIL,
                    autocomplete: "email",
                    disabled: pending(),
                    error: errors.read().message(Field::Email),
                    oninput: move |evt: FormEvent| values.write().email = evt.value(),
                }
                FormField {
                    id: "signup-password",
                    label: strings::LABEL_PASSWORD,
                    input_type: "password",
                    value: values.read().password.clone(),
                    placeholder: strings::PLACEHOLDER_PASSWORD,
                    autocomplete: "new-password",
                    disabled: pending(),
                    error: errors.read().message(Field::Password),
                    oninput: move |evt: FormEvent| values.write().password = evt.value(),
                }
                FormField {
                    id: "signup-confirm-password",
                    label: strings::LABEL_CONFIRM_PASSWORD,
                    input_type: "password",
                    value: values.read().confirm_password.clone(),
                    placeholder: strings::PLACEHOLDER_PASSWORD,
                    autocomplete: "new-password",
                    disabled: pending(),
                    error: errors.read().message(Field::ConfirmPassword),
                    oninput: move |evt: FormEvent| values.write().confirm_password = evt.value(),
                }
                button {
                    class: "button button-primary",
                    r#type: "submit",
                    disabled: pending(),
                    if pending() {
                        {strings::SIGN_UP_PENDING}
                    } else {
                        {strings::SIGN_UP_SUBMIT}
                    }
                }
            }
        }
    }
}
