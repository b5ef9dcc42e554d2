use dioxus::prelude::*;

use crate::presence::AnimatedMessage;

/// Labelled input with a fading validation message underneath.
#[component]
pub fn FormField(
    #[props(into)] id: String,
    #[props(into)] label: String,
    value: String,
    #[props(into, default = "text".to_string())] input_type: String,
    #[props(into, default)] placeholder: String,
    #[props(into, default)] autocomplete: String,
    #[props(default)] disabled: bool,
    #[props(!optional)] error: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        div { class: "form-item",
            label {
                class: if invalid { "form-label form-label-invalid" } else { "form-label" },
                r#for: "{id}",
                "{label}"
            }
            input {
                id: "{id}",
                class: "form-input",
                r#type: input_type,
                value: "{value}",
                placeholder: "{placeholder}",
                autocomplete: "{autocomplete}",
                disabled,
                aria_invalid: "{invalid}",
                oninput: move |evt| oninput.call(evt),
            }
            AnimatedMessage { message: error }
        }
    }
}
