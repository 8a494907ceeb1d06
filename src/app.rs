use dioxus::prelude::*;

use crate::context::AppConfig;
use crate::pages::{About, Architects, Home, Navigators, Register};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the hero and "Follow the North Star" CTA
/// - `/about` - "Following the North Star" story cards
/// - `/navigators` - Conference and agenda managers
/// - `/architects` - OC departments
/// - `/register` - The six-step registration launchpad
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/navigators")]
    Navigators {},
    #[route("/architects")]
    Architects {},
    #[route("/register")]
    Register {},
}

/// Root application component.
///
/// Provides global styles, the app configuration context, and routing.
#[component]
pub fn App() -> Element {
    let config: Signal<AppConfig> = use_signal(|| AppConfig {
        sheets_url: crate::sheets_url(),
    });
    use_context_provider(|| config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
