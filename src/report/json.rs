//! JSON report writer
//!
//! Pretty-printed so a verdict file is directly readable; the shape is the
//! serde view of [`Report`](super::Report) with the kind-tagged verdict.

use super::Report;
use std::io::{self, Write};

pub fn write<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")
}
