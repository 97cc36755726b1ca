//! Click-and-tap pen filter: barrel-button presses made while hovering become a
//! click on the next touch, held for as long as the button is held through the drag.

pub mod config;
pub mod dump;
pub mod filter;
pub mod input;
pub mod replay;
pub mod report;
pub mod trace;

pub use filter::{ClickTapFilter, FilterState, Phase, PipelineElement, PipelinePosition};
pub use report::{ButtonMask, OtherReport, Point, Report, TabletReport};
