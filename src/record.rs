//! Per-line transform from the whitespace-delimited edge dump to a CSV row.
//!
//! Lines are handled as raw bytes. A line becomes a row by turning every tab
//! and space into a comma. Lines that carry an indexed label (`call_i`,
//! `ret_i`, ...) additionally have the `_i` in their label replaced with `_`
//! followed by the index held in the fourth field, which is consumed.

/// Marker left in a label by the solver when the real index lives in field 3
pub const INDEXED_LABEL_MARKER: &[u8] = b"_i";

const FIELD_DELIMITER: u8 = b',';
const SOURCE_FIELD: usize = 0;
const TARGET_FIELD: usize = 1;
const LABEL_FIELD: usize = 2;
const INDEX_FIELD: usize = 3;

/// Replace every non-overlapping marker in `label`, scanning left to right.
/// The replacement is inserted literally.
pub fn replace_indexed_marker(label: &[u8], replacement: &[u8]) -> Vec<u8> {
    let marker_len = INDEXED_LABEL_MARKER.len();
    let mut out = Vec::with_capacity(label.len() + replacement.len());
    let mut rest = label;
    while let Some(pos) = rest
        .windows(marker_len)
        .position(|w| w == INDEXED_LABEL_MARKER)
    {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(replacement);
        rest = &rest[pos + marker_len..];
    }
    out.extend_from_slice(rest);
    out
}

/// Replace each tab and space with a comma, keeping everything else as-is
pub fn normalize_delimiters(line: &[u8]) -> Vec<u8> {
    line.iter()
        .map(|&b| match b {
            b'\t' | b' ' => FIELD_DELIMITER,
            other => other,
        })
        .collect()
}

/// Checks the whole normalized line, not just the label field, so a `_i`
/// inside a node id also selects the indexed rewrite.
pub fn has_indexed_label_marker(line: &[u8]) -> bool {
    line.windows(INDEXED_LABEL_MARKER.len())
        .any(|w| w == INDEXED_LABEL_MARKER)
}

/// Split a normalized line into its comma-separated fields
pub fn split_fields(line: &[u8]) -> Vec<&[u8]> {
    line.split(|&b| b == FIELD_DELIMITER).collect()
}

/// What happened to a single input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Delimiters normalized, nothing else touched
    Plain,
    /// Label rewritten with the consumed index field
    Indexed,
}

/// One output row, without its trailing newline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRow {
    pub bytes: Vec<u8>,
    pub kind: RowKind,
}

impl EdgeRow {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Field count of a line that carried the marker but no index field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingIndexField {
    pub field_count: usize,
}

/// Transform one input line into its output row.
///
/// In the indexed branch only `n1`, `n2` and the rewritten label survive;
/// any field after the index is dropped.
pub fn transform_line(line: &[u8]) -> Result<EdgeRow, MissingIndexField> {
    let normalized = normalize_delimiters(line);
    if !has_indexed_label_marker(&normalized) {
        return Ok(EdgeRow {
            bytes: normalized,
            kind: RowKind::Plain,
        });
    }

    let fields = split_fields(&normalized);
    if fields.len() <= INDEX_FIELD {
        return Err(MissingIndexField {
            field_count: fields.len(),
        });
    }

    let index = fields[INDEX_FIELD];
    let mut replacement = Vec::with_capacity(index.len() + 1);
    replacement.push(b'_');
    replacement.extend_from_slice(index);
    let label = replace_indexed_marker(fields[LABEL_FIELD], &replacement);

    let mut bytes = Vec::with_capacity(normalized.len());
    bytes.extend_from_slice(fields[SOURCE_FIELD]);
    bytes.push(FIELD_DELIMITER);
    bytes.extend_from_slice(fields[TARGET_FIELD]);
    bytes.push(FIELD_DELIMITER);
    bytes.extend_from_slice(&label);

    Ok(EdgeRow {
        bytes,
        kind: RowKind::Indexed,
    })
}
