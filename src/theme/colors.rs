//! Color constants of the "Under the Stars" palette.

#![allow(dead_code)]

// === VOID (Backgrounds) ===
pub const VOID_DEEP: &str = "#05010f";
pub const VOID_NEBULA: &str = "#0d0628";
pub const GLASS_BG: &str = "rgba(255, 255, 255, 0.04)";
pub const GLASS_BORDER: &str = "rgba(255, 255, 255, 0.14)";

// === GOLD SUPERNOVA (Titles, CTAs, Selection) ===
pub const GOLD_SUPERNOVA: &str = "#ffcc00";
pub const GOLD_GLOW: &str = "rgba(255, 204, 0, 0.35)";
pub const GOLD_FAINT: &str = "rgba(255, 204, 0, 0.1)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f5f2ff";
pub const TEXT_SECONDARY: &str = "rgba(245, 242, 255, 0.75)";
pub const TEXT_MUTED: &str = "rgba(245, 242, 255, 0.5)";

// === SEMANTIC ===
pub const DANGER: &str = "#ff4444";
pub const SUCCESS: &str = "#51d88a";
