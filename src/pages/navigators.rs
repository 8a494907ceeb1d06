//! Conference and agenda managers page.

use dioxus::prelude::*;

use crate::components::NavHeader;
use ceis_ui::Starfield;

struct Navigator {
    name: &'static str,
    role: &'static str,
    initials: &'static str,
}

const NAVIGATORS: &[Navigator] = &[
    Navigator { name: "Souleima Maacha", role: "Conference Manager", initials: "SM" },
    Navigator { name: "Ines Hamdoun", role: "Agenda Manager", initials: "IH" },
    Navigator { name: "Nour Tarchouna", role: "Agenda Manager", initials: "NT" },
];

#[component]
pub fn Navigators() -> Element {
    rsx! {
        Starfield {}
        NavHeader {}
        main { class: "page",
            h1 { class: "orbitron text-gradient-gold section-title", "The Navigators" }
            p {
                class: "body-text",
                style: "text-align: center; max-width: 650px; margin: 0 auto 4rem;",
                "The crew charting the course of this edition. Find them during the "
                "conference for anything from agenda questions to lost room keys."
            }
            div { class: "speaker-grid",
                for person in NAVIGATORS {
                    div { class: "speaker-planet",
                        div { class: "planet-avatar", "{person.initials}" }
                        h3 { class: "orbitron", style: "margin-top: 1.2rem;", "{person.name}" }
                        p { style: "color: var(--gold-supernova); font-size: 0.9rem; margin-top: 0.3rem;",
                            "{person.role}"
                        }
                    }
                }
            }
        }
    }
}
