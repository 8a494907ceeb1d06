//! Application context
//!
//! Provides the runtime configuration to all components via use_context.

use dioxus::prelude::*;

/// Configuration surface of the app: just the submission endpoint.
///
/// When `sheets_url` is `None` the registration flow still completes; the
/// submission client logs the payload instead of transmitting it.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub sheets_url: Option<String>,
}

/// Hook to access the app configuration from context.
pub fn use_app_config() -> Signal<AppConfig> {
    use_context::<Signal<AppConfig>>()
}
