//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Destination for an export: a file, with missing parent directories
/// created, or stdout when no path is given.
pub fn output_writer(target: Option<&Path>) -> Result<Box<dyn Write>, ExportError> {
    let Some(path) = target else {
        return Ok(Box::new(io::stdout().lock()));
    };
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod csv {
    use std::io::Write;

    use gfd_overlay::ShipLine;
    use serde::Serialize;

    use crate::ExportError;

    /// CSV row emitted for each ship line.
    #[derive(Debug, Serialize)]
    struct Row<'a> {
        ship: &'a str,
        id: &'a str,
        speed: u32,
        seconds: u64,
        briefing: &'a str,
    }

    /// Write ship lines as CSV with header `ship,id,speed,seconds,briefing`.
    pub fn write_flight_table<W: Write>(writer: W, lines: &[ShipLine]) -> Result<(), ExportError> {
        let mut out = ::csv::Writer::from_writer(writer);
        for line in lines {
            out.serialize(Row {
                ship: line.ship.key(),
                id: line.ship.id(),
                speed: line.speed,
                seconds: line.seconds,
                briefing: &line.briefing,
            })?;
        }
        if lines.is_empty() {
            out.write_record(["ship", "id", "speed", "seconds", "briefing"])?;
        }
        out.flush()?;
        Ok(())
    }
}

pub mod json {
    use std::io::Write;

    use gfd_overlay::RenderModel;
    use serde_json::to_writer_pretty;

    use crate::ExportError;

    /// Pretty-printed render model followed by a newline.
    pub fn write_render_model<W: Write>(
        mut writer: W,
        model: &RenderModel,
    ) -> Result<(), ExportError> {
        to_writer_pretty(&mut writer, model)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
