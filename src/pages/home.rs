//! Landing page with the hero banner and conference overview.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::NavHeader;
use ceis_ui::Starfield;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        Starfield {}
        NavHeader {}
        main { class: "page",
            section { class: "hero",
                p {
                    style: "letter-spacing: 5px; color: var(--text-muted); text-transform: uppercase; margin-bottom: 1rem;",
                    "A NIGHT UNDER THE STARS"
                }
                h1 { class: "orbitron text-gradient-gold celestial-title", "CEIS 2K26" }
                p {
                    class: "orbitron",
                    style: "font-size: 1.4rem; letter-spacing: 3px; margin: 1rem 0 2.5rem; color: var(--text-secondary);",
                    "Illuminate Your Path ✨"
                }
                button {
                    class: "cta-reg",
                    onclick: move |_| { nav.push(Route::Register {}); },
                    "Follow the North Star"
                }
            }

            section { class: "conference-details",
                div { class: "glass-card detail-box",
                    h4 { "When" }
                    p { class: "body-text", "February 2026" }
                }
                div { class: "glass-card detail-box",
                    h4 { "Where" }
                    p { class: "body-text", "Under the open sky, Tunisia" }
                }
                div { class: "glass-card detail-box",
                    h4 { "Who" }
                    p { class: "body-text", "Every navigator of AIESEC" }
                }
            }

            section { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; margin-bottom: 4rem;",
                div { class: "glass-card",
                    h3 {
                        class: "orbitron text-gradient-gold",
                        style: "margin-bottom: 1rem;",
                        "About the Conference"
                    }
                    p { class: "body-text",
                        "CEIS is where the entity gathers to close one orbit and chart the "
                        "next. Three days of sessions, recognition, and late-night "
                        "conversations that only happen when everyone is in the same place "
                        "at the same time."
                    }
                }
                div { class: "glass-card",
                    h3 {
                        class: "orbitron text-gradient-gold",
                        style: "margin-bottom: 1rem;",
                        "The Theme"
                    }
                    p { class: "body-text",
                        "Every great journey begins by looking up. This edition is a night "
                        "under the stars: each delegate picks their constellation, signs "
                        "their name, and takes a seat in the galaxy we build together."
                    }
                }
            }

            section {
                h2 { class: "orbitron text-gradient-gold section-title", "Why Attend" }
                div { class: "conference-details",
                    div { class: "glass-card detail-box",
                        h4 { "Learn" }
                        p { class: "body-text",
                            "Functional tracks and skill sessions led by the people who ran "
                            "the term you are about to inherit."
                        }
                    }
                    div { class: "glass-card detail-box",
                        h4 { "Connect" }
                        p { class: "body-text",
                            "Meet your counterparts from every local committee before the "
                            "new term begins."
                        }
                    }
                    div { class: "glass-card detail-box",
                        h4 { "Celebrate" }
                        p { class: "body-text",
                            "Awards night, gala dinner, and the stories that get retold for "
                            "years."
                        }
                    }
                }
            }

            section { class: "quote-section",
                blockquote {
                    "\"We are all in the gutter, but some of us are looking at the stars.\""
                }
                p { style: "margin-top: 1.5rem; color: var(--text-muted);", "— Oscar Wilde" }
            }
        }
    }
}
