//! "Following the North Star" story page.

use dioxus::prelude::*;

use crate::components::NavHeader;
use ceis_ui::Starfield;

#[component]
pub fn About() -> Element {
    rsx! {
        Starfield {}
        NavHeader {}
        main { class: "page",
            h1 { class: "orbitron text-gradient-gold section-title", "Following the North Star" }
            div { style: "display: grid; gap: 2rem; max-width: 800px; margin: 0 auto;",
                div { class: "glass-card",
                    h3 { class: "orbitron", style: "color: var(--gold-supernova); margin-bottom: 1rem;",
                        "Why a Night Under the Stars"
                    }
                    p { class: "body-text",
                        "Sailors crossed oceans with nothing but the sky to guide them. "
                        "This conference borrows their method: find your fixed point, hold "
                        "your course, and trust the people navigating beside you."
                    }
                }
                div { class: "glass-card",
                    h3 { class: "orbitron", style: "color: var(--gold-supernova); margin-bottom: 1rem;",
                        "What CEIS Stands For"
                    }
                    p { class: "body-text",
                        "The Conference of Exchange and Impact Summit is the entity's "
                        "flagship gathering. It closes the outgoing term, transitions the "
                        "incoming one, and aligns every local committee on the year ahead."
                    }
                }
                div { class: "glass-card",
                    h3 { class: "orbitron", style: "color: var(--gold-supernova); margin-bottom: 1rem;",
                        "Three Days, One Sky"
                    }
                    p { class: "body-text",
                        "Plenaries in the morning, functional spaces in the afternoon, and "
                        "the galaxy gala to close. Buses run from every region so no "
                        "delegate is left watching from the ground."
                    }
                }
                div { class: "glass-card",
                    h3 { class: "orbitron", style: "color: var(--gold-supernova); margin-bottom: 1rem;",
                        "Your Constellation Awaits"
                    }
                    p { class: "body-text",
                        "Registration asks for your star sign for a reason. Delegates are "
                        "seated by constellation on gala night, so the sky above the "
                        "venue is mirrored on the floor below it."
                    }
                }
            }
        }
    }
}
