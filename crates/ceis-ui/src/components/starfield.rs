//! Starfield Backdrop Component
//!
//! Decorative ambient layer behind every page. Star positions are seeded
//! once at mount; the twinkle itself is a CSS animation, so no frame loop
//! runs for the backdrop (the zodiac picker owns the only continuous tick).

use dioxus::prelude::*;
use rand::Rng;

/// One decorative star of the backdrop
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Position as a percentage of the viewport
    pub left: f32,
    pub top: f32,
    /// Diameter in pixels
    pub size: f32,
    /// Twinkle cycle length in seconds
    pub duration: f32,
    /// Twinkle phase offset in seconds
    pub delay: f32,
    /// Peak opacity
    pub opacity: f32,
}

/// Seed `count` random stars.
pub fn seed_stars(count: usize) -> Vec<Star> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| Star {
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            size: rng.random_range(0.6..2.4),
            duration: rng.random_range(2.0..6.0),
            delay: rng.random_range(0.0..6.0),
            opacity: rng.random_range(0.3..1.0),
        })
        .collect()
}

/// Properties for the Starfield component
#[derive(Clone, PartialEq, Props)]
pub struct StarfieldProps {
    /// Number of stars to scatter
    #[props(default = 120)]
    pub count: usize,
}

/// Fixed full-viewport layer of twinkling stars
#[component]
pub fn Starfield(props: StarfieldProps) -> Element {
    let stars = use_hook(|| seed_stars(props.count));

    rsx! {
        div { class: "starfield-layer", "aria-hidden": "true",
            for star in stars.iter() {
                div {
                    class: "star",
                    style: format!(
                        "left:{:.1}%;top:{:.1}%;width:{:.1}px;height:{:.1}px;\
                         animation-duration:{:.1}s;animation-delay:{:.1}s;--star-opacity:{:.2};",
                        star.left, star.top, star.size, star.size,
                        star.duration, star.delay, star.opacity,
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_the_requested_count() {
        assert_eq!(seed_stars(120).len(), 120);
        assert!(seed_stars(0).is_empty());
    }

    #[test]
    fn stars_stay_inside_the_viewport() {
        for star in seed_stars(200) {
            assert!((0.0..100.0).contains(&star.left));
            assert!((0.0..100.0).contains(&star.top));
            assert!(star.opacity <= 1.0);
        }
    }
}
