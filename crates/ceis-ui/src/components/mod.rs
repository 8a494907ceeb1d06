//! Reusable UI components for the celestial design language

mod button;
mod choice_group;
mod input;
mod starfield;
mod step_indicator;

pub use button::*;
pub use choice_group::*;
pub use input::*;
pub use starfield::*;
pub use step_indicator::*;
