//! Input Field Components
//!
//! Text inputs, textareas, and native selects for the registration steps.
//! Invalid required fields get a red border via the `invalid` class.

use dioxus::prelude::*;

use ceis_core::types::SelectOption;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text ("" = no label row)
    #[props(default)]
    pub label: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: String,
    /// Input type (text, email, tel, date, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Marks a failed required field (red border)
    #[props(default = false)]
    pub invalid: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Single-line input field inside a labeled group
#[component]
pub fn Input(props: InputProps) -> Element {
    let class = if props.invalid { "input-field invalid" } else { "input-field" };

    rsx! {
        div { class: "input-group",
            if !props.label.is_empty() {
                label { class: "input-label",
                    "{props.label}"
                    if props.required {
                        span { class: "required-mark", " *" }
                    }
                }
            }
            input {
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: String,
    #[props(default)]
    pub placeholder: String,
    /// Number of visible rows
    #[props(default = 3)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub invalid: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line text input inside a labeled group
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = if props.invalid { "input-field invalid" } else { "input-field" };

    rsx! {
        div { class: "input-group",
            if !props.label.is_empty() {
                label { class: "input-label",
                    "{props.label}"
                    if props.required {
                        span { class: "required-mark", " *" }
                    }
                }
            }
            textarea {
                class: "{class}",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the SelectField component
#[derive(Clone, PartialEq, Props)]
pub struct SelectFieldProps {
    /// Currently selected value ("" = placeholder row)
    pub value: String,
    pub onchange: EventHandler<String>,
    pub options: &'static [SelectOption],
    #[props(default)]
    pub label: String,
    /// Placeholder row text ("Select your position")
    #[props(default)]
    pub placeholder: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub invalid: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Native dropdown with a disabled placeholder row. Leaving the placeholder
/// selected counts as unfilled for validation.
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let class = if props.invalid { "input-field invalid" } else { "input-field" };

    rsx! {
        div { class: "input-group",
            if !props.label.is_empty() {
                label { class: "input-label",
                    "{props.label}"
                    if props.required {
                        span { class: "required-mark", " *" }
                    }
                }
            }
            select {
                class: "{class}",
                value: "{props.value}",
                required: props.required,
                disabled: props.disabled,
                onchange: move |e| props.onchange.call(e.value()),
                option {
                    value: "",
                    selected: props.value.is_empty(),
                    if props.placeholder.is_empty() { "Select..." } else { "{props.placeholder}" }
                }
                for opt in props.options.iter() {
                    option {
                        value: "{opt.value}",
                        selected: props.value == opt.value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
