//! Drive a recorded report stream through a pipeline stage.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::config::{Config, InputFormat};
use crate::filter::{ClickTapFilter, Passthrough, PipelineElement};
use crate::input::{read_events, PenFrameAssembler};
use crate::report::Report;
use crate::trace;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    pub consumed: u64,
    pub emitted: u64,
}

pub fn build_stage(config: &Config) -> Box<dyn PipelineElement> {
    if config.passthrough {
        Box::new(Passthrough)
    } else {
        Box::new(ClickTapFilter::new())
    }
}

/// Load every report from `input`, decoding it according to `config.format`.
pub fn load_reports(config: &Config, input: &Path) -> Result<Vec<Report>, Box<dyn std::error::Error + Send + Sync>> {
    match config.format {
        InputFormat::Trace => trace::load_from_path(input),
        InputFormat::Evdev => {
            let file = File::open(input).map_err(|e| format!("Failed to open capture {}: {}", input.display(), e))?;
            let mut reader = BufReader::new(file);
            let mut assembler = PenFrameAssembler::new(config.buttons);
            let mut reports = Vec::new();

            let events = read_events(&mut reader, config.event_size, |ev| {
                if let Some(report) = assembler.push(&ev) {
                    reports.push(report);
                }
            })?;
            log::debug!("Decoded {} events into {} frames", events, assembler.frame_count());
            Ok(reports)
        }
    }
}

/// Feed `reports` through `stage` in order, writing one line per emitted report.
pub fn replay(
    stage: &mut dyn PipelineElement,
    reports: impl IntoIterator<Item = Report>,
    out: &mut impl Write,
) -> Result<ReplayStats, Box<dyn std::error::Error + Send + Sync>> {
    let mut stats = ReplayStats::default();
    let mut emitted = Vec::with_capacity(2);

    log::info!("Replaying through '{}' ({:?})", stage.name(), stage.position());

    for report in reports {
        stage.consume(report, &mut |r| emitted.push(r));
        stats.consumed += 1;

        for r in emitted.drain(..) {
            writeln!(out, "{}", r)?;
            stats.emitted += 1;
        }

        if stats.consumed.is_multiple_of(500) {
            log::debug!("Reports replayed: {}", stats.consumed);
        }
    }

    log::info!("Replay done: {} in, {} out", stats.consumed, stats.emitted);
    Ok(stats)
}

pub fn run_replay(
    config: &Config,
    input: &Path,
    out: &mut impl Write,
) -> Result<ReplayStats, Box<dyn std::error::Error + Send + Sync>> {
    let reports = load_reports(config, input)?;
    let mut stage = build_stage(config);
    replay(stage.as_mut(), reports, out)
}
