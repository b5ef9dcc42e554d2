use dioxus::prelude::*;
use ui::{claim_submit, strings, submit, use_toasts, AuthForm, Field, FieldErrors, FormField, ServerAuth, SigninFormValues, SubmitOutcome};

use super::auth::AuthPanel;
use super::use_route_navigator;

#[component]
pub fn SigninForm() -> Element {
    let toasts = use_toasts();
    let navigator = use_route_navigator();
    let mut values = use_signal(SigninFormValues::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut attempted = use_signal(|| false);
    let mut pending = use_signal(|| false);

    // Once the user has tried to submit, keep messages in step with the input.
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
        AuthPanel { title: strings::SIGN_IN_TITLE, description: strings::SIGN_IN_DESCRIPTION,
            form { class: "auth-form", novalidate: true, onsubmit,
                FormField {
                    id: "signin-email",
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
                    id: "signin-password",
                    label: strings::LABEL_PASSWORD,
                    input_type: "password",
                    value: values.read().password.clone(),
                    placeholder: strings::PLACEHOLDER_PASSWORD,
                    autocomplete: "current-password",
                    disabled: pending(),
                    error: errors.read().message(Field::Password),
                    oninput: move |evt: FormEvent| values.write().password = evt.value(),
                }
                div { class: "form-check",
                    input {
                        id: "signin-remember",
                        r#type: "checkbox",
                        checked: values.read().remember_me,
                        disabled: pending(),
                        onchange: move |evt: FormEvent| values.write().remember_me = evt.checked(),
                    }
                    label { r#for: "signin-remember", {strings::LABEL_REMEMBER_ME} }
                }
                button {
                    class: "button button-primary",
                    r#type: "submit",
                    disabled: pending(),
                    if pending() {
                        {strings::SIGN_IN_PENDING}
                    } else {
                        {strings::SIGN_IN_SUBMIT}
                    }
                }
            }
        }
    }
}
