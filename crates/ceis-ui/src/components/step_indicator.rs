//! Step Progress Indicator
//!
//! Row of dots above the form: steps before the current one are completed,
//! the current one is active, the rest are pending.

use dioxus::prelude::*;

/// Visual state of one indicator dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

impl StepState {
    pub fn class(&self) -> &'static str {
        match self {
            StepState::Completed => "step completed",
            StepState::Active => "step active",
            StepState::Pending => "step",
        }
    }
}

/// State of the dot at 1-based `index` when the form is on 1-based `current`.
pub fn step_state(index: usize, current: usize) -> StepState {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => StepState::Completed,
        std::cmp::Ordering::Equal => StepState::Active,
        std::cmp::Ordering::Greater => StepState::Pending,
    }
}

/// Properties for the StepIndicator component
#[derive(Clone, PartialEq, Props)]
pub struct StepIndicatorProps {
    /// Total number of steps
    pub total: usize,
    /// Current 1-based step
    pub current: usize,
}

/// Dot-per-step progress indicator
#[component]
pub fn StepIndicator(props: StepIndicatorProps) -> Element {
    rsx! {
        div { class: "step-indicator",
            for index in 1..=props.total {
                div { class: step_state(index, props.current).class() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_around_the_current_step() {
        assert_eq!(step_state(1, 3), StepState::Completed);
        assert_eq!(step_state(2, 3), StepState::Completed);
        assert_eq!(step_state(3, 3), StepState::Active);
        assert_eq!(step_state(4, 3), StepState::Pending);
        assert_eq!(step_state(6, 3), StepState::Pending);
    }

    #[test]
    fn first_step_has_no_completed_dots() {
        let states: Vec<_> = (1..=6).map(|i| step_state(i, 1)).collect();
        assert_eq!(states[0], StepState::Active);
        assert!(states[1..].iter().all(|s| *s == StepState::Pending));
    }
}
