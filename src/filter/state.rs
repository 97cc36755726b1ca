//! Click/tap state and the transition function over tablet samples.

use crate::report::{ButtonMask, TabletReport};

use super::binding::click_binding;

/// Where the pen is in the hover / contact cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing seen yet. Behaves like `Hovering`.
    #[default]
    Idle,
    /// In range without pressure, no press remembered.
    Hovering,
    /// In range without pressure, holding the mask captured when a button went down.
    HoveringWithBuffer(ButtonMask),
    /// Touching the surface with plain pen semantics.
    Contacting,
    /// Touching the surface while a synthesized click is held. Carries the mapped mask.
    DraggingWithBinding(ButtonMask),
}

/// Everything the filter remembers between samples.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    phase: Phase,
    button_was_pressed: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Pressure was positive on the previous sample.
    pub fn pen_was_down(&self) -> bool {
        matches!(self.phase, Phase::Contacting | Phase::DraggingWithBinding(_))
    }

    /// Any barrel button was pressed on the previous sample.
    pub fn button_was_pressed(&self) -> bool {
        self.button_was_pressed
    }

    /// A synthesized press has been emitted and not yet released.
    pub fn binding_active(&self) -> bool {
        matches!(self.phase, Phase::DraggingWithBinding(_))
    }

    pub fn buffered_buttons(&self) -> Option<&ButtonMask> {
        match &self.phase {
            Phase::HoveringWithBuffer(mask) | Phase::DraggingWithBinding(mask) => Some(mask),
            _ => None,
        }
    }

    /// Compute the next state and the reports to emit, in order, for one sample.
    pub fn transition(&self, report: &TabletReport) -> (FilterState, Vec<TabletReport>) {
        let pen_down = report.is_pen_down();
        let button_pressed = report.is_button_pressed();
        let mut emitted = Vec::with_capacity(2);

        let phase = match (self.pen_was_down(), pen_down) {
            (true, false) => self.lift(report, &mut emitted),
            (false, false) => self.hover(report, button_pressed, &mut emitted),
            (false, true) => self.touch_down(report, button_pressed, &mut emitted),
            (true, true) => self.drag(report, button_pressed, &mut emitted),
        };

        let next = FilterState {
            phase,
            button_was_pressed: button_pressed,
        };
        (next, emitted)
    }

    fn lift(&self, report: &TabletReport, emitted: &mut Vec<TabletReport>) -> Phase {
        if self.binding_active() {
            emitted.push(report.position_only());
        } else {
            emitted.push(report.clone());
        }
        Phase::Hovering
    }

    fn hover(&self, report: &TabletReport, button_pressed: bool, emitted: &mut Vec<TabletReport>) -> Phase {
        let buffered = if button_pressed != self.button_was_pressed {
            button_pressed.then(|| report.buttons.clone())
        } else {
            self.buffered_buttons().cloned()
        };

        emitted.push(report.position_only());

        match buffered {
            Some(mask) => Phase::HoveringWithBuffer(mask),
            None => Phase::Hovering,
        }
    }

    fn touch_down(&self, report: &TabletReport, button_pressed: bool, emitted: &mut Vec<TabletReport>) -> Phase {
        // Prefer the live buttons; fall back to whatever was captured while hovering.
        let source = if button_pressed {
            Some(&report.buttons)
        } else {
            self.buffered_buttons()
        };

        match source {
            Some(source) => {
                let mapped = click_binding(source, report.buttons.len());
                emitted.push(report.synthesize(0, mapped.clone()));
                Phase::DraggingWithBinding(mapped)
            }
            None => {
                emitted.push(report.clone());
                Phase::Contacting
            }
        }
    }

    fn drag(&self, report: &TabletReport, button_pressed: bool, emitted: &mut Vec<TabletReport>) -> Phase {
        let Phase::DraggingWithBinding(mask) = &self.phase else {
            emitted.push(report.clone());
            return Phase::Contacting;
        };

        emitted.push(report.synthesize(0, click_binding(mask, report.buttons.len())));

        if self.button_was_pressed && !button_pressed {
            emitted.push(report.position_only());
            return Phase::Contacting;
        }
        Phase::DraggingWithBinding(mask.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Point;

    fn sample(pressure: u32, buttons: [bool; 2]) -> TabletReport {
        TabletReport::new(Point::new(5.0, 6.0), pressure, ButtonMask::new(buttons.to_vec()))
    }

    fn run(samples: &[TabletReport]) -> (FilterState, Vec<Vec<TabletReport>>) {
        let mut state = FilterState::new();
        let mut out = Vec::new();
        for s in samples {
            let (next, emitted) = state.transition(s);
            state = next;
            out.push(emitted);
        }
        (state, out)
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = FilterState::new();
        assert_eq!(state.phase(), &Phase::Idle);
        assert!(!state.pen_was_down());
        assert!(!state.button_was_pressed());
        assert!(!state.binding_active());
        assert!(state.buffered_buttons().is_none());
    }

    #[test]
    fn test_hover_press_is_buffered() {
        let (state, _) = run(&[sample(0, [false, false]), sample(0, [false, true])]);
        assert_eq!(state.phase(), &Phase::HoveringWithBuffer(ButtonMask::new(vec![false, true])));
    }

    #[test]
    fn test_hover_release_clears_buffer() {
        let (state, _) = run(&[sample(0, [true, false]), sample(0, [false, false])]);
        assert_eq!(state.phase(), &Phase::Hovering);
    }

    #[test]
    fn test_buffer_survives_release_edge_only_once() {
        // Press then release while hovering: the release edge clears the buffer.
        let (state, out) = run(&[
            sample(0, [false, false]),
            sample(0, [true, false]),
            sample(0, [false, false]),
            sample(50, [false, false]),
        ]);
        assert_eq!(state.phase(), &Phase::Contacting);
        assert_eq!(out[3], vec![sample(50, [false, false])]);
    }

    #[test]
    fn test_touch_down_prefers_live_buttons() {
        let (state, out) = run(&[sample(0, [true, false]), sample(10, [false, true])]);
        assert_eq!(out[1], vec![sample(0, [false, true])]);
        assert_eq!(state.buffered_buttons(), Some(&ButtonMask::new(vec![false, true])));
        assert!(state.binding_active());
    }

    #[test]
    fn test_touch_down_uses_buffer_after_release_on_contact_frame() {
        // Button held while hovering, released on the very frame the tip lands.
        let (state, out) = run(&[sample(0, [false, false]), sample(0, [true, false]), sample(10, [false, false])]);
        assert_eq!(out[2], vec![sample(0, [true, false])]);
        assert!(state.binding_active());
    }

    #[test]
    fn test_binding_without_prior_press_holds_until_lift() {
        let (state, out) = run(&[
            sample(0, [false, false]),
            sample(0, [true, false]),
            sample(10, [false, false]),
            sample(20, [false, false]),
            sample(30, [false, false]),
        ]);
        // Previous sample had no button pressed, so no mid-drag release fires.
        assert_eq!(out[3], vec![sample(0, [true, false])]);
        assert_eq!(out[4], vec![sample(0, [true, false])]);
        assert!(state.binding_active());
    }

    #[test]
    fn test_lift_returns_to_hovering() {
        let (state, _) = run(&[sample(0, [true, false]), sample(10, [true, false]), sample(0, [true, false])]);
        assert_eq!(state.phase(), &Phase::Hovering);
        assert!(state.button_was_pressed());
    }

    #[test]
    fn test_held_button_after_lift_is_not_rebuffered() {
        // No edge on the button flag after lift, so the buffer stays empty.
        let (state, out) = run(&[
            sample(0, [true, false]),
            sample(10, [true, false]),
            sample(0, [true, false]),
            sample(0, [true, false]),
        ]);
        assert_eq!(state.phase(), &Phase::Hovering);
        assert_eq!(out[3], vec![sample(0, [false, false])]);
    }

    #[test]
    fn test_mid_drag_release_returns_to_contacting() {
        let (state, out) = run(&[
            sample(0, [true, false]),
            sample(10, [true, false]),
            sample(20, [false, false]),
            sample(30, [false, false]),
        ]);
        assert_eq!(out[2], vec![sample(0, [true, false]), sample(0, [false, false])]);
        assert_eq!(out[3], vec![sample(30, [false, false])]);
        assert_eq!(state.phase(), &Phase::Contacting);
    }

    #[test]
    fn test_drag_remaps_to_current_button_count() {
        let mut state = FilterState::new();
        let down = TabletReport::new(Point::default(), 10, ButtonMask::new(vec![true, false]));
        state = state.transition(&down).0;

        let wide = TabletReport::new(Point::default(), 10, ButtonMask::new(vec![true, false, false]));
        let (_, emitted) = state.transition(&wide);
        assert_eq!(emitted[0].buttons, ButtonMask::new(vec![true, false, false]));
    }
}
