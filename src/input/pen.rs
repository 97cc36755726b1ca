//! Fold evdev pen frames into tablet reports.

use evdevil::event::InputEvent;

use crate::report::{ButtonMask, OtherReport, Point, Report, TabletReport};

use super::event::{
    ABS_PRESSURE, ABS_X, ABS_Y, BTN_STYLUS, BTN_STYLUS2, BTN_STYLUS3, BTN_TOOL_PEN, BTN_TOOL_RUBBER, EV_ABS,
    EV_KEY, EV_SYN, SYN_REPORT,
};

/// Barrel button codes in mask order.
const BUTTON_CODES: [u16; 3] = [BTN_STYLUS, BTN_STYLUS2, BTN_STYLUS3];

pub const OUT_OF_RANGE: &str = "out-of-range";

/// Collects axis and key events until SYN_REPORT, then yields one report.
///
/// evdev only sends values that changed, so axes and buttons carry over
/// between frames.
pub struct PenFrameAssembler {
    x: i32,
    y: i32,
    pressure: i32,
    buttons: ButtonMask,
    in_range: bool,
    frame_count: u64,
}

impl PenFrameAssembler {
    pub fn new(button_count: usize) -> Self {
        Self {
            x: 0,
            y: 0,
            pressure: 0,
            buttons: ButtonMask::empty(button_count),
            // Captures may start mid-stroke without a BTN_TOOL_PEN event.
            in_range: true,
            frame_count: 0,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Feed one event. Returns a report when the event closes a frame.
    pub fn push(&mut self, ev: &InputEvent) -> Option<Report> {
        let ty = ev.event_type().raw();
        let code = ev.raw_code();
        let value = ev.raw_value();

        match ty {
            EV_ABS => match code {
                ABS_X => self.x = value,
                ABS_Y => self.y = value,
                ABS_PRESSURE => self.pressure = value,
                _ => {}
            },
            EV_KEY => match code {
                BTN_TOOL_PEN | BTN_TOOL_RUBBER => self.in_range = value != 0,
                _ => {
                    if let Some(index) = BUTTON_CODES.iter().position(|&c| c == code) {
                        self.buttons.set(index, value != 0);
                    }
                }
            },
            EV_SYN if code == SYN_REPORT => return Some(self.finish_frame()),
            _ => {}
        }
        None
    }

    fn finish_frame(&mut self) -> Report {
        if self.frame_count == 0 {
            log::info!("Pen frames flowing");
        }
        self.frame_count += 1;

        if !self.in_range {
            return Report::Other(OtherReport {
                kind: OUT_OF_RANGE.into(),
                values: vec![self.x, self.y],
            });
        }

        Report::Tablet(TabletReport::new(
            Point::new(self.x as f32, self.y as f32),
            self.pressure.max(0) as u32,
            self.buttons.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evdevil::event::EventType;

    fn ev(ty: u16, code: u16, value: i32) -> InputEvent {
        InputEvent::new(EventType::from_raw(ty), code, value)
    }

    fn frame(assembler: &mut PenFrameAssembler, events: &[(u16, u16, i32)]) -> Option<Report> {
        let mut out = None;
        for &(ty, code, value) in events {
            out = assembler.push(&ev(ty, code, value));
        }
        out
    }

    #[test]
    fn test_frame_builds_tablet_report() {
        let mut asm = PenFrameAssembler::new(2);
        let report = frame(
            &mut asm,
            &[
                (EV_KEY, BTN_TOOL_PEN, 1),
                (EV_ABS, ABS_X, 100),
                (EV_ABS, ABS_Y, 200),
                (EV_ABS, ABS_PRESSURE, 30),
                (EV_KEY, BTN_STYLUS, 1),
                (EV_SYN, SYN_REPORT, 0),
            ],
        );
        assert_eq!(
            report,
            Some(Report::Tablet(TabletReport::new(
                Point::new(100.0, 200.0),
                30,
                ButtonMask::new(vec![true, false])
            )))
        );
        assert_eq!(asm.frame_count(), 1);
    }

    #[test]
    fn test_values_carry_over() {
        let mut asm = PenFrameAssembler::new(2);
        frame(&mut asm, &[(EV_ABS, ABS_X, 5), (EV_ABS, ABS_Y, 6), (EV_KEY, BTN_STYLUS2, 1), (EV_SYN, SYN_REPORT, 0)]);
        let report = frame(&mut asm, &[(EV_ABS, ABS_X, 7), (EV_SYN, SYN_REPORT, 0)]);
        assert_eq!(
            report,
            Some(Report::Tablet(TabletReport::new(Point::new(7.0, 6.0), 0, ButtonMask::new(vec![false, true]))))
        );
    }

    #[test]
    fn test_buttons_beyond_count_are_ignored() {
        let mut asm = PenFrameAssembler::new(1);
        let report = frame(&mut asm, &[(EV_KEY, BTN_STYLUS2, 1), (EV_SYN, SYN_REPORT, 0)]);
        let Some(Report::Tablet(t)) = report else { panic!("expected tablet report") };
        assert_eq!(t.buttons, ButtonMask::new(vec![false]));
    }

    #[test]
    fn test_out_of_range_frame() {
        let mut asm = PenFrameAssembler::new(2);
        let report = frame(&mut asm, &[(EV_ABS, ABS_X, 9), (EV_KEY, BTN_TOOL_PEN, 0), (EV_SYN, SYN_REPORT, 0)]);
        assert_eq!(report, Some(Report::Other(OtherReport { kind: OUT_OF_RANGE.into(), values: vec![9, 0] })));
    }

    #[test]
    fn test_no_report_before_syn() {
        let mut asm = PenFrameAssembler::new(2);
        assert!(asm.push(&ev(EV_ABS, ABS_PRESSURE, 10)).is_none());
    }
}
