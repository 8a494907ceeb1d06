//! Signature Capture Surface
//!
//! White drawing surface driven by pointer events. Strokes are previewed
//! as SVG polylines while drawing; each completed stroke re-rasterizes the
//! pad to a PNG data URI and reports it upward.

use dioxus::prelude::*;
use tracing::error;

use ceis_core::SignaturePad;

const PAD_WIDTH: f32 = 750.0;
const PAD_HEIGHT: f32 = 200.0;

/// Properties for the SignaturePadView component
#[derive(Clone, PartialEq, Props)]
pub struct SignaturePadViewProps {
    /// Handler called with the PNG data URI after each completed stroke
    pub on_signed: EventHandler<String>,
    /// Handler called when the pad is cleared
    pub on_clear: EventHandler<()>,
    /// Label shown above the surface
    #[props(default)]
    pub label: String,
    #[props(default = false)]
    pub invalid: bool,
}

#[component]
pub fn SignaturePadView(props: SignaturePadViewProps) -> Element {
    let mut pad = use_signal(|| SignaturePad::new(PAD_WIDTH, PAD_HEIGHT));

    let on_signed = props.on_signed;
    let finish_stroke = move |_| {
        // a lone tap produces no drawable segment and does not count
        if pad.write().finish() && !pad.read().is_empty() {
            match pad.read().encode_png_data_uri() {
                Ok(uri) => on_signed.call(uri),
                Err(e) => error!(error = %e, "signature encoding failed"),
            }
        }
    };

    let strokes: Vec<String> = pad
        .read()
        .strokes()
        .iter()
        .map(|stroke| {
            stroke
                .iter()
                .map(|(x, y)| format!("{x},{y}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    let surface_class = if props.invalid {
        "signature-surface invalid"
    } else {
        "signature-surface"
    };

    rsx! {
        div { class: "input-group",
            if !props.label.is_empty() {
                label { class: "input-label",
                    "{props.label}"
                    span { class: "required-mark", " *" }
                }
            }
            div {
                class: "{surface_class}",
                onpointerdown: move |e| {
                    let p = e.element_coordinates();
                    pad.write().begin(p.x as f32, p.y as f32);
                },
                onpointermove: move |e| {
                    if pad.read().is_drawing() {
                        let p = e.element_coordinates();
                        pad.write().sample(p.x as f32, p.y as f32);
                    }
                },
                onpointerup: finish_stroke,
                onpointerleave: finish_stroke,
                svg {
                    view_box: "0 0 {PAD_WIDTH} {PAD_HEIGHT}",
                    width: "100%",
                    height: "100%",
                    for points in strokes {
                        polyline {
                            points: "{points}",
                            fill: "none",
                            stroke: "#111",
                            stroke_width: "2.5",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                        }
                    }
                }
                span { class: "signature-hint", "Sign above" }
            }
            button {
                class: "glass-btn danger",
                r#type: "button",
                onclick: move |_| {
                    pad.write().clear();
                    props.on_clear.call(());
                },
                "Clear Signature"
            }
        }
    }
}
