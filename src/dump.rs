//! Dump the raw events of an evdev capture for debugging.
//! Record one with e.g. `cat /dev/input/event1 > pen.bin`, then run `click-tap dump pen.bin`.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::input::{
    read_events, ABS_PRESSURE, ABS_X, ABS_Y, BTN_STYLUS, BTN_STYLUS2, BTN_STYLUS3, BTN_TOOL_PEN, BTN_TOOL_RUBBER,
    EV_ABS, EV_KEY, EV_SYN, SYN_REPORT,
};

fn code_name(ty: u16, code: u16) -> String {
    match ty {
        EV_SYN if code == SYN_REPORT => "SYN_REPORT".into(),
        EV_KEY => {
            let key = match code {
                BTN_TOOL_PEN => "TOOL_PEN",
                BTN_TOOL_RUBBER => "TOOL_RUBBER",
                BTN_STYLUS => "STYLUS",
                BTN_STYLUS2 => "STYLUS2",
                BTN_STYLUS3 => "STYLUS3",
                _ => return format!("KEY/{}", code),
            };
            format!("BTN_{}", key)
        }
        EV_ABS => {
            let abs = match code {
                ABS_X => "X",
                ABS_Y => "Y",
                ABS_PRESSURE => "PRESSURE",
                0x19 => "DISTANCE",
                0x1a => "TILT_X",
                0x1b => "TILT_Y",
                _ => "?",
            };
            format!("ABS_{}({})", abs, code)
        }
        _ => format!("type{} code{}", ty, code),
    }
}

pub fn run_dump(
    input: &Path,
    event_size: usize,
    out: &mut impl Write,
) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
    let file = File::open(input).map_err(|e| format!("Failed to open capture {}: {}", input.display(), e))?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();

    let n = read_events(&mut reader, event_size, |ev| {
        let name = code_name(ev.event_type().raw(), ev.raw_code());
        lines.push(format!("{}  value={}", name, ev.raw_value()));
    })?;

    for (i, line) in lines.iter().enumerate() {
        writeln!(out, "{:6}  {}", i + 1, line)?;
    }
    Ok(n)
}
