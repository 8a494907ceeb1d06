//! Organizing committee departments page.

use dioxus::prelude::*;

use crate::components::NavHeader;
use ceis_ui::Starfield;

struct Department {
    name: &'static str,
    members: &'static [&'static str],
}

const DEPARTMENTS: &[Department] = &[
    Department {
        name: "Cosmic Experience",
        members: &["Siwar Melki", "Fadhel Lassoued", "Rania Haj Kacem"],
    },
    Department {
        name: "Stellar Communications",
        members: &["Yasmine Tlili", "Kenza Ammar", "Othman Ghozia"],
    },
    Department {
        name: "Orbital Logistics",
        members: &[
            "Ahmed Trigui",
            "Lina Grijou",
            "Omar Boudaya",
            "Nour Tiouiri",
            "Chahd Errokh",
        ],
    },
];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect()
}

#[component]
pub fn Architects() -> Element {
    rsx! {
        Starfield {}
        NavHeader {}
        main { class: "page",
            h1 { class: "orbitron text-gradient-gold section-title", "The Architects" }
            p {
                class: "body-text",
                style: "text-align: center; max-width: 650px; margin: 0 auto 4rem;",
                "Three departments building the night sky, one department at a time."
            }
            for dept in DEPARTMENTS {
                section { style: "margin-bottom: 4rem;",
                    h2 {
                        class: "orbitron",
                        style: "color: var(--gold-supernova); text-align: center; margin-bottom: 2.5rem; letter-spacing: 2px;",
                        "{dept.name}"
                    }
                    div { class: "speaker-grid",
                        for member in dept.members {
                            div { class: "speaker-planet",
                                div { class: "planet-avatar", "{initials(member)}" }
                                h3 { style: "margin-top: 1rem; font-size: 1.05rem;", "{member}" }
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

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(initials("Rania Haj Kacem"), "RHK");
        assert_eq!(initials("Ahmed Trigui"), "AT");
    }
}
