//! Choice Group Component
//!
//! Mutually-exclusive option buttons bound to one answer-store field.
//! Selection is derived by matching the stored value against each option,
//! so restoring a step re-derives the marked button for free.

use dioxus::prelude::*;

use ceis_core::types::ChoiceOption;

/// Properties for the ChoiceGroup component
#[derive(Clone, PartialEq, Props)]
pub struct ChoiceGroupProps {
    /// Option set of this group
    pub options: &'static [ChoiceOption],
    /// Currently stored value ("" = nothing chosen)
    pub selected: String,
    /// Handler called with the clicked option
    pub on_select: EventHandler<ChoiceOption>,
    /// Group label shown above the buttons ("" = no label row)
    #[props(default)]
    pub label: String,
    #[props(default = false)]
    pub required: bool,
    /// Marks a failed required group (red border)
    #[props(default = false)]
    pub invalid: bool,
}

/// Whether an option is the marked one, given the stored group value.
/// Matching is by `value`, never by display label.
pub fn is_option_selected(selected: &str, option: &ChoiceOption) -> bool {
    selected == option.value
}

/// Row of mutually-exclusive choice buttons
///
/// # Example
///
/// ```rust,ignore
/// ChoiceGroup {
///     options: BUS_OPTIONS,
///     selected: session.read().answers.value(keys::BUS).to_string(),
///     on_select: move |opt: ChoiceOption| {
///         session.write().select_choice(keys::BUS, opt.value, opt.price);
///     },
/// }
/// ```
#[component]
pub fn ChoiceGroup(props: ChoiceGroupProps) -> Element {
    let group_class = if props.invalid { "choice-group invalid" } else { "choice-group" };

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
            div {
                class: "{group_class}",
                role: "radiogroup",
                for opt in props.options.iter() {
                    {
                        let opt = *opt;
                        let is_selected = is_option_selected(&props.selected, &opt);
                        let on_select = props.on_select;
                        rsx! {
                            button {
                                class: if is_selected { "choice-btn selected" } else { "choice-btn" },
                                r#type: "button",
                                role: "radio",
                                "aria-checked": if is_selected { "true" } else { "false" },
                                onclick: move |_| on_select.call(opt),
                                "{opt.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTS: &[ChoiceOption] = &[
        ChoiceOption { label: "Full Package (+30 DT)", value: "Full Package", price: 30 },
        ChoiceOption { label: "None (I will arrange my own)", value: "None", price: 0 },
    ];

    #[test]
    fn exactly_one_option_is_marked_for_a_stored_value() {
        let marked: Vec<&ChoiceOption> = OPTS
            .iter()
            .filter(|o| is_option_selected("Full Package", o))
            .collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].price, 30);
    }

    #[test]
    fn matching_is_by_value_not_label() {
        // the stored value never contains the price-augmented label text
        assert!(!OPTS.iter().any(|o| is_option_selected("Full Package (+30 DT)", o)));
        assert!(OPTS.iter().all(|o| !is_option_selected("", o)));
    }
}
