//! Zodiac Constellation Picker
//!
//! Twelve sign tiles arranged around a live particle field. Picking a sign
//! morphs the hero particles into that constellation and draws its edges.
//! The animation loop is owned by this component and stops when the step
//! unmounts.

use std::time::Duration;

use dioxus::prelude::*;

use ceis_core::zodiac::SIGNS;
use ceis_core::ParticleField;

use crate::theme::colors;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Properties for the ZodiacPicker component
#[derive(Clone, PartialEq, Props)]
pub struct ZodiacPickerProps {
    /// Currently chosen sign name ("" = none)
    pub selected: String,
    /// Label shown above the grid
    #[props(default)]
    pub label: String,
    /// Handler called with the clicked sign's name
    pub on_select: EventHandler<&'static str>,
    #[props(default = false)]
    pub invalid: bool,
}

#[component]
pub fn ZodiacPicker(props: ZodiacPickerProps) -> Element {
    let initial = props.selected.clone();
    let mut field = use_signal(move || {
        let mut f = ParticleField::new(480.0, 250.0);
        if !initial.is_empty() {
            f.set_shape(&initial);
        }
        f
    });

    // Frame loop. Dropped with the component, which ends the animation.
    use_future(move || async move {
        loop {
            tokio::time::sleep(FRAME_INTERVAL).await;
            field.write().tick();
        }
    });

    let (width, height) = {
        let f = field.read();
        (f.width(), f.height())
    };
    let edges = field.read().edges();
    let dots: Vec<(f32, f32, f32, f32, bool)> = field
        .read()
        .particles()
        .iter()
        .map(|p| (p.x, p.y, p.size, p.alpha, p.is_hero()))
        .collect();

    let border = if props.invalid {
        "border-color: var(--danger);"
    } else {
        ""
    };

    rsx! {
        div { class: "input-group",
            if !props.label.is_empty() {
                label { class: "input-label",
                    "{props.label}"
                    span { class: "required-mark", " *" }
                }
            }
            div { class: "zodiac-grid",
                for sign in SIGNS.iter().take(6) {
                    SignTile {
                        sign_index: sign_index(sign.name),
                        selected: props.selected.clone(),
                        on_select: move |name| props.on_select.call(name),
                        field,
                    }
                }
                div {
                    class: "zodiac-center",
                    style: "{border}",
                    onresize: move |e| {
                        if let Ok(size) = e.get_content_box_size() {
                            field.write().resize(size.width as f32, size.height as f32);
                        }
                    },
                    svg {
                        view_box: "0 0 {width} {height}",
                        preserve_aspect_ratio: "none",
                        for ((x1, y1), (x2, y2)) in edges {
                            line {
                                x1: "{x1}", y1: "{y1}", x2: "{x2}", y2: "{y2}",
                                stroke: colors::GOLD_GLOW,
                                stroke_width: "1",
                            }
                        }
                        for (x, y, size, alpha, hero) in dots {
                            circle {
                                cx: "{x}", cy: "{y}", r: "{size}",
                                fill: if hero { colors::GOLD_SUPERNOVA } else { colors::TEXT_PRIMARY },
                                opacity: "{alpha}",
                            }
                        }
                    }
                }
                for sign in SIGNS.iter().skip(6) {
                    SignTile {
                        sign_index: sign_index(sign.name),
                        selected: props.selected.clone(),
                        on_select: move |name| props.on_select.call(name),
                        field,
                    }
                }
            }
        }
    }
}

fn sign_index(name: &str) -> usize {
    SIGNS.iter().position(|s| s.name == name).unwrap_or(0)
}

/// One clickable sign tile of the grid.
#[component]
fn SignTile(
    sign_index: usize,
    selected: String,
    on_select: EventHandler<&'static str>,
    field: Signal<ParticleField>,
) -> Element {
    let sign = &SIGNS[sign_index];
    let class = if selected == sign.name {
        "zodiac-item selected"
    } else {
        "zodiac-item"
    };
    let name = sign.name;
    let mut field = field;

    rsx! {
        div {
            class: "{class}",
            role: "button",
            onclick: move |_| {
                field.write().set_shape(name);
                on_select.call(name);
            },
            span { class: "zodiac-icon", "{sign.glyph}" }
            span { class: "zodiac-name", "{sign.name}" }
            span { class: "zodiac-trait", "{sign.trait_word}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_index_covers_all_signs() {
        for (i, sign) in SIGNS.iter().enumerate() {
            assert_eq!(sign_index(sign.name), i);
        }
    }
}
