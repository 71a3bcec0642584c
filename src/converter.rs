use std::fmt::{Display, Formatter};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, error, info};

use crate::errors::ConvertError;
use crate::record::{transform_line, RowKind};

/// Header written before any edge row
pub const CSV_HEADER: &[u8] = b"n1,n2,label";

/// Counts reported after a successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionSummary {
    pub input_lines: usize,
    pub indexed_rows: usize,
}

impl ConversionSummary {
    /// Data rows plus the header
    pub fn output_lines(&self) -> usize {
        self.input_lines + 1
    }
}

impl Display for ConversionSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} input lines, {} indexed labels rewritten, {} output lines",
            self.input_lines,
            self.indexed_rows,
            self.output_lines()
        )
    }
}

/// Convert the edge dump at `input` into a headered CSV at `output`.
///
/// The input is read whole and split on `\n`, so a trailing newline yields a
/// final empty row. The output is created or truncated before the first row
/// is written; if a record turns out to be malformed the rows written so far
/// are left in place and the error is returned.
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ConversionSummary, ConvertError> {
    let input = input.as_ref();
    let output = output.as_ref();
    info!("Converting {} -> {}", input.display(), output.display());

    let data = fs::read(input).map_err(|source| {
        error!("Cannot read {}: {}", input.display(), source);
        ConvertError::ReadInput {
            path: input.to_path_buf(),
            source,
        }
    })?;

    let file = File::create(output).map_err(|source| {
        error!("Cannot create {}: {}", output.display(), source);
        ConvertError::CreateOutput {
            path: output.to_path_buf(),
            source,
        }
    })?;
    let mut writer = BufWriter::new(file);

    let summary = write_rows(&data, &mut writer, output)?;
    writer.flush().map_err(|source| ConvertError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    info!("Conversion finished: {}", summary);
    Ok(summary)
}

/// Write the header and one row per line of `data` to `out`.
///
/// `output` is only used to give write errors a location.
pub fn write_rows<W: Write>(
    data: &[u8],
    out: &mut W,
    output: &Path,
) -> Result<ConversionSummary, ConvertError> {
    let write_err = |source| ConvertError::WriteOutput {
        path: output.to_path_buf(),
        source,
    };

    out.write_all(CSV_HEADER).map_err(write_err)?;
    out.write_all(b"\n").map_err(write_err)?;

    let mut summary = ConversionSummary::default();
    for (idx, line) in data.split(|&b| b == b'\n').enumerate() {
        let line_number = idx + 1;
        let row = transform_line(line).map_err(|missing| {
            let err = ConvertError::MalformedRecord {
                line_number,
                field_count: missing.field_count,
                line: String::from_utf8_lossy(line).into_owned(),
            };
            error!("{}", err);
            err
        })?;

        if row.kind == RowKind::Indexed {
            debug!(
                "Line {}: indexed label rewritten to '{}'",
                line_number,
                String::from_utf8_lossy(row.as_bytes())
            );
            summary.indexed_rows += 1;
        }

        out.write_all(row.as_bytes()).map_err(write_err)?;
        out.write_all(b"\n").map_err(write_err)?;
        summary.input_lines += 1;
    }

    Ok(summary)
}
