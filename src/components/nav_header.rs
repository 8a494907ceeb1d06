//! Top navigation bar shared by every page.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NavHeader() -> Element {
    rsx! {
        header { class: "nav-header",
            Link { to: Route::Home {}, class: "nav-title orbitron",
                style: "text-decoration: none;",
                "CEIS 2K26"
            }
            nav { class: "nav-links",
                Link { to: Route::Home {}, active_class: "active", "Home" }
                Link { to: Route::About {}, active_class: "active", "About" }
                Link { to: Route::Navigators {}, active_class: "active", "Navigators" }
                Link { to: Route::Architects {}, active_class: "active", "Architects" }
                Link { to: Route::Register {}, active_class: "active", "Register" }
            }
        }
    }
}
