//! Plain-text report writer
//!
//! The same card the CLI prints, minus the ANSI color - suitable for
//! pasting into an issue or piping to another tool.

use super::Report;
use std::io::{self, Write};

pub fn write<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let result = &report.result;
    let verdict = if result.is_ai_generated() {
        "AI-GENERATED"
    } else {
        "HUMAN"
    };

    writeln!(out, "synthscan analysis report")?;
    writeln!(out, "{}", "-".repeat(60))?;
    writeln!(out, "generated:     {}", report.generated)?;
    writeln!(out, "source:        {}", report.source)?;
    writeln!(out, "kind:          {}", result.kind_label())?;
    writeln!(out, "verdict:       {} ({}% confidence)", verdict, result.confidence())?;
    writeln!(out, "analysis time: {}s", result.analysis_time())?;
    writeln!(out)?;
    writeln!(out, "{}", result.narrative())?;
    writeln!(out)?;
    writeln!(out, "indicators:")?;
    for phrase in result.indicators() {
        writeln!(out, "  - {}", phrase)?;
    }

    if let Some(info) = result.video_info() {
        writeln!(out)?;
        writeln!(out, "video:")?;
        writeln!(out, "  file:       {}", info.file_name)?;
        writeln!(out, "  size:       {}", info.file_size)?;
        writeln!(out, "  duration:   {}", info.duration)?;
        writeln!(out, "  resolution: {}", info.resolution)?;
    }

    Ok(())
}
