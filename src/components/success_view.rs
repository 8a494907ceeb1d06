//! Post-submission confirmation view.
//!
//! Draws a small constellation stroke by stroke, then shows the
//! confirmation text and a link back to the landing page.

use std::time::Duration;

use dioxus::prelude::*;

use crate::app::Route;
use crate::theme::colors;

const POINTS: &[(f32, f32)] = &[
    (150.0, 50.0),
    (250.0, 120.0),
    (220.0, 230.0),
    (80.0, 230.0),
    (50.0, 120.0),
    (150.0, 150.0),
];

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const PROGRESS_STEP: f32 = 0.01;

/// Points of the partially drawn constellation at a given progress in [0, 1].
fn drawn_points(progress: f32) -> Vec<(f32, f32)> {
    let segments = (POINTS.len() - 1) as f32;
    let reach = progress.clamp(0.0, 1.0) * segments;
    let whole = reach.floor() as usize;
    let frac = reach - reach.floor();

    let mut out: Vec<(f32, f32)> = POINTS[..=whole.min(POINTS.len() - 1)].to_vec();
    if whole + 1 < POINTS.len() && frac > 0.0 {
        let (ax, ay) = POINTS[whole];
        let (bx, by) = POINTS[whole + 1];
        out.push((ax + (bx - ax) * frac, ay + (by - ay) * frac));
    }
    out
}

#[component]
pub fn SuccessView() -> Element {
    let mut progress = use_signal(|| 0.0f32);

    use_future(move || async move {
        while progress() < 1.0 {
            tokio::time::sleep(FRAME_INTERVAL).await;
            progress.with_mut(|p| *p = (*p + PROGRESS_STEP).min(1.0));
        }
    });

    let path = drawn_points(progress());
    let points_attr = path
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ");

    rsx! {
        div { class: "success-view",
            svg {
                view_box: "0 0 300 280",
                width: "300",
                height: "280",
                polyline {
                    points: "{points_attr}",
                    fill: "none",
                    stroke: colors::GOLD_SUPERNOVA,
                    stroke_width: "2",
                    stroke_linecap: "round",
                }
                for (x, y) in path {
                    circle { cx: "{x}", cy: "{y}", r: "4", fill: colors::GOLD_SUPERNOVA }
                }
            }
            h1 {
                class: "orbitron text-gradient-gold",
                style: "font-size: 2.5rem; margin: 2rem 0 1rem;",
                "LAUNCH SUCCESSFUL"
            }
            p { class: "body-text", style: "margin-bottom: 2.5rem;",
                "Your seat in the galaxy has been reserved. See you under the stars."
            }
            Link { to: Route::Home {},
                button { class: "cta-nav", "Return to Base" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_progress_is_just_the_first_star() {
        assert_eq!(drawn_points(0.0), vec![POINTS[0]]);
    }

    #[test]
    fn full_progress_draws_every_point() {
        assert_eq!(drawn_points(1.0), POINTS.to_vec());
    }

    #[test]
    fn halfway_interpolates_within_a_segment() {
        // 0.5 of five segments reaches the midpoint of the third one
        let path = drawn_points(0.5);
        assert_eq!(path.len(), 4);
        assert_eq!(*path.last().unwrap(), (150.0, 230.0));
    }
}
