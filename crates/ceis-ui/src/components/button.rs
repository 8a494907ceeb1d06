//! Button Components
//!
//! Button styles of the celestial design language:
//! - Cta: gold call-to-action ("Continue", "Follow the North Star")
//! - Glass: translucent secondary action ("Back", "Clear Signature")
//! - Danger: destructive accent

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Gold call-to-action with glow on hover
    #[default]
    Cta,
    /// Translucent glass button for secondary actions
    Glass,
    /// Red-accented destructive action
    Danger,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Cta => "cta-nav",
            ButtonVariant::Glass => "glass-btn",
            ButtonVariant::Danger => "glass-btn danger",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button following the celestial design language
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Cta,
///         onclick: move |_| advance(),
///         "Continue"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let extra = props.class.as_deref().unwrap_or("");
    let class = if extra.is_empty() {
        props.variant.class().to_string()
    } else {
        format!("{} {}", props.variant.class(), extra)
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_classes() {
        assert_eq!(ButtonVariant::Cta.class(), "cta-nav");
        assert_eq!(ButtonVariant::Glass.class(), "glass-btn");
        assert_eq!(ButtonVariant::Danger.class(), "glass-btn danger");
        assert_eq!(ButtonVariant::default(), ButtonVariant::Cta);
    }
}
