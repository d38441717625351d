//! Table loading from JSON arrays and JSON lines.
//!
//! `.jsonl` / `.ndjson` files are read as one row per line. Any other file is
//! sniffed: a leading `[` means one JSON array of rows, anything else is read
//! as JSON lines.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::row::TableRow;
use crate::types::ConformError;

/// A fallible stream of rows, in table order.
pub type RowSource = Box<dyn Iterator<Item = Result<TableRow, ConformError>>>;

/// On-disk table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// A single JSON array of rows.
    Array,
    /// One JSON row per line.
    Lines,
}

impl TableFormat {
    /// Format implied by the file extension, if any.
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "jsonl" | "ndjson" => Some(TableFormat::Lines),
            _ => None,
        }
    }

    /// Format implied by the content's first non-whitespace character.
    pub fn sniff(content: &str) -> Self {
        if content.trim_start().starts_with('[') {
            TableFormat::Array
        } else {
            TableFormat::Lines
        }
    }
}

/// Load every row of the table at `path`.
pub fn load_table(path: &Path) -> Result<Vec<TableRow>, ConformError> {
    open_rows(path)?.collect()
}

/// Open the table at `path` as a row stream.
///
/// JSON lines are parsed lazily, one line per row. A JSON array has to be
/// parsed as a whole before its rows can be yielded.
pub fn open_rows(path: &Path) -> Result<RowSource, ConformError> {
    let io_err = |source| ConformError::Io {
        path: path.display().to_string(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let mut reader = BufReader::new(file);

    let format = match TableFormat::from_extension(path) {
        Some(format) => format,
        None => sniff_reader(&mut reader).map_err(io_err)?,
    };

    if format == TableFormat::Array {
        let mut content = String::new();
        reader.read_to_string(&mut content).map_err(io_err)?;
        let rows = parse_json_array(&content)?;
        return Ok(Box::new(rows.into_iter().map(Ok)));
    }

    let display = path.display().to_string();
    let lines = reader.lines().enumerate().filter_map(move |(idx, line)| match line {
        Ok(text) => parse_json_line(&text, idx + 1).transpose(),
        Err(source) => Some(Err(ConformError::Io {
            path: display.clone(),
            source,
        })),
    });
    Ok(Box::new(lines))
}

/// Parse an in-memory table, sniffing its format.
pub fn parse_table_str(content: &str) -> Result<Vec<TableRow>, ConformError> {
    parse_table_as(content, TableFormat::sniff(content))
}

/// Parse an in-memory table in the given format.
pub fn parse_table_as(content: &str, format: TableFormat) -> Result<Vec<TableRow>, ConformError> {
    match format {
        TableFormat::Array => parse_json_array(content),
        TableFormat::Lines => content
            .lines()
            .enumerate()
            .filter_map(|(idx, text)| parse_json_line(text, idx + 1).transpose())
            .collect(),
    }
}

fn parse_json_array(content: &str) -> Result<Vec<TableRow>, ConformError> {
    serde_json::from_str(content).map_err(|source| ConformError::Json {
        line: source.line(),
        source,
    })
}

/// Parse one JSON-lines entry. Blank lines yield `Ok(None)`.
fn parse_json_line(text: &str, line: usize) -> Result<Option<TableRow>, ConformError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let value: Value =
        serde_json::from_str(text).map_err(|source| ConformError::Json { line, source })?;
    TableRow::try_from(value)
        .map(Some)
        .map_err(|reason| ConformError::InvalidRow { line, reason })
}

fn sniff_reader<R: BufRead>(reader: &mut R) -> std::io::Result<TableFormat> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(TableFormat::Lines);
        }
        match buf.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(pos) if buf[pos] == b'[' => return Ok(TableFormat::Array),
            Some(_) => return Ok(TableFormat::Lines),
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}
