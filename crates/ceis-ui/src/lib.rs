//! CEIS 2K26 UI Components
//!
//! Shared Dioxus components for the "Under the Stars" celestial aesthetic:
//! glassmorphism cards over a starfield, gold supernova accents, and the
//! generic form controls the registration steps are rendered with.
//!
//! ## Design Language
//!
//! - **Gold supernova (#ffcc00)**: titles, selected states, the fee
//! - **Deep void (#05010f)**: page background behind the starfield
//! - **Glass**: translucent bordered cards for every content block

pub mod components;

pub use components::*;
