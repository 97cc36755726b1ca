//! Click-and-tap filter: a barrel button pressed while hovering turns the next
//! touch into a click, and holding it through a drag keeps the click held.
//!
//! Every synthesized report carries zero pressure, including drag frames where
//! the tip is genuinely on the surface. Consumers that expect pressure while a
//! binding is held will see 0.

mod binding;
mod state;

pub use binding::{click_binding, MIDDLE_CLICK, RIGHT_CLICK};
pub use state::{FilterState, Phase};

use crate::report::Report;

/// Where a stage sits relative to the coordinate transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePosition {
    /// Before any processing, on raw device reports.
    Raw,
    /// Before the area / geometry transforms.
    PreTransform,
    /// After the transforms, right before output dispatch.
    PostTransform,
}

/// A synchronous pipeline stage. `consume` is called once per report in
/// arrival order and pushes zero or more reports into `emit` before returning.
pub trait PipelineElement {
    fn name(&self) -> &'static str;
    fn position(&self) -> PipelinePosition;
    fn consume(&mut self, report: Report, emit: &mut dyn FnMut(Report));
}

#[derive(Debug, Default)]
pub struct ClickTapFilter {
    state: FilterState,
}

impl ClickTapFilter {
    pub const NAME: &'static str = "Click and Tap";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn consume<F: FnMut(Report)>(&mut self, report: Report, mut emit: F) {
        let tablet = match report {
            Report::Tablet(tablet) => tablet,
            other => {
                emit(other);
                return;
            }
        };

        let (next, emitted) = self.state.transition(&tablet);
        log::trace!(
            "sample pressure={} buttons={} {:?} -> {:?}",
            tablet.pressure,
            tablet.buttons,
            self.state.phase(),
            next.phase()
        );

        match (self.state.binding_active(), next.binding_active()) {
            (false, true) => log::debug!("click binding pressed ({})", tablet.buttons),
            (true, false) => log::debug!("click binding released"),
            _ => {}
        }

        for out in emitted {
            emit(Report::Tablet(out));
        }
        self.state = next;
    }
}

impl PipelineElement for ClickTapFilter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn position(&self) -> PipelinePosition {
        PipelinePosition::PostTransform
    }

    fn consume(&mut self, report: Report, emit: &mut dyn FnMut(Report)) {
        ClickTapFilter::consume(self, report, emit)
    }
}

/// Forwards every report untouched. Used to compare against the filtered stream.
#[derive(Debug, Default)]
pub struct Passthrough;

impl PipelineElement for Passthrough {
    fn name(&self) -> &'static str {
        "Passthrough"
    }

    fn position(&self) -> PipelinePosition {
        PipelinePosition::PostTransform
    }

    fn consume(&mut self, report: Report, emit: &mut dyn FnMut(Report)) {
        emit(report)
    }
}
