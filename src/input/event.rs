use std::io::{ErrorKind, Read};

use evdevil::event::{EventType, InputEvent};

pub const INPUT_EVENT_SIZE_32: usize = 16;
pub const INPUT_EVENT_SIZE_64: usize = 24;

pub const EV_SYN: u16 = 0x00;
pub const EV_KEY: u16 = 0x01;
pub const EV_ABS: u16 = 0x03;
pub const SYN_REPORT: u16 = 0;

pub const ABS_X: u16 = 0x00;
pub const ABS_Y: u16 = 0x01;
pub const ABS_PRESSURE: u16 = 0x18;

pub const BTN_TOOL_PEN: u16 = 0x140;
pub const BTN_TOOL_RUBBER: u16 = 0x141;
pub const BTN_STYLUS3: u16 = 0x149;
pub const BTN_STYLUS: u16 = 0x14b;
pub const BTN_STYLUS2: u16 = 0x14c;

/// Parse a Linux input_event from raw bytes (32-bit or 64-bit format).
pub fn parse_input_event(buf: &[u8]) -> Option<InputEvent> {
    match buf.len() {
        INPUT_EVENT_SIZE_32 => parse_input_event_32(buf),
        INPUT_EVENT_SIZE_64 => parse_input_event_64(buf),
        len if len >= INPUT_EVENT_SIZE_64 => parse_input_event_64(buf),
        len if len >= INPUT_EVENT_SIZE_32 => parse_input_event_32(buf),
        _ => None,
    }
}

fn parse_input_event_32(buf: &[u8]) -> Option<InputEvent> {
    let ty = u16::from_le_bytes([buf[8], buf[9]]);
    let code = u16::from_le_bytes([buf[10], buf[11]]);
    let value = i32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]);

    Some(InputEvent::new(EventType::from_raw(ty), code, value))
}

fn parse_input_event_64(buf: &[u8]) -> Option<InputEvent> {
    let ty = u16::from_le_bytes([buf[16], buf[17]]);
    let code = u16::from_le_bytes([buf[18], buf[19]]);
    let value = i32::from_le_bytes([buf[20], buf[21], buf[22], buf[23]]);

    Some(InputEvent::new(EventType::from_raw(ty), code, value))
}

/// Read `event_size`-byte records from `reader` until EOF, handing each parsed
/// event to `on_event`. A trailing partial record is ignored.
///
/// Returns the number of events read.
pub fn read_events(
    reader: &mut impl Read,
    event_size: usize,
    mut on_event: impl FnMut(InputEvent),
) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
    let mut buf = vec![0u8; event_size];
    let mut count: u64 = 0;

    loop {
        match reader.read_exact(&mut buf) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }

        let Some(ev) = parse_input_event(&buf) else {
            continue;
        };
        count += 1;
        on_event(ev);
    }

    Ok(count)
}
