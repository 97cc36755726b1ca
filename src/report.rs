//! Reports flowing through the pipeline: tablet samples and opaque passthrough reports.

use serde::Deserialize;
use std::fmt;

/// Pen position in output space (after the coordinate transforms upstream).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Per-button pressed state, one entry per physical pen button.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct ButtonMask(Vec<bool>);

impl ButtonMask {
    pub fn new(buttons: Vec<bool>) -> Self {
        Self(buttons)
    }

    /// All-false mask with `len` buttons.
    pub fn empty(len: usize) -> Self {
        Self(vec![false; len])
    }

    /// All-false mask of the same length as this one.
    pub fn released(&self) -> Self {
        Self::empty(self.0.len())
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&b| b)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pressed state of button `index`; missing buttons read as released.
    pub fn get(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn set(&mut self, index: usize, pressed: bool) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = pressed;
        }
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl From<Vec<bool>> for ButtonMask {
    fn from(buttons: Vec<bool>) -> Self {
        Self(buttons)
    }
}

impl fmt::Display for ButtonMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, pressed) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", if *pressed { 1 } else { 0 })?;
        }
        write!(f, "]")
    }
}

/// One pen sample: position, tip pressure and barrel button state.
#[derive(Debug, Clone, PartialEq)]
pub struct TabletReport {
    pub position: Point,
    pub pressure: u32,
    pub buttons: ButtonMask,
}

impl TabletReport {
    pub fn new(position: Point, pressure: u32, buttons: ButtonMask) -> Self {
        Self {
            position,
            pressure,
            buttons,
        }
    }

    /// Fresh report at this position with the given pressure and buttons.
    pub fn synthesize(&self, pressure: u32, buttons: ButtonMask) -> Self {
        Self::new(self.position, pressure, buttons)
    }

    /// Fresh report at this position with zero pressure and nothing pressed.
    pub fn position_only(&self) -> Self {
        self.synthesize(0, self.buttons.released())
    }

    pub fn is_pen_down(&self) -> bool {
        self.pressure > 0
    }

    pub fn is_button_pressed(&self) -> bool {
        self.buttons.any()
    }
}

/// A report of some other kind (aux keys, out-of-range frames, ...).
/// Never inspected, only passed through.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OtherReport {
    pub kind: String,
    #[serde(default)]
    pub values: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Tablet(TabletReport),
    Other(OtherReport),
}

impl From<TabletReport> for Report {
    fn from(report: TabletReport) -> Self {
        Report::Tablet(report)
    }
}

impl From<OtherReport> for Report {
    fn from(report: OtherReport) -> Self {
        Report::Other(report)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Tablet(t) => write!(
                f,
                "tablet x={:.1} y={:.1} pressure={} buttons={}",
                t.position.x, t.position.y, t.pressure, t.buttons
            ),
            Report::Other(o) => write!(f, "other kind={} values={:?}", o.kind, o.values),
        }
    }
}
