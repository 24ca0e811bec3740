//! FASTA reading and writing.
//!
//! The reader accepts both multi-record files and raw pasted text; the
//! writer wraps sequence bodies at a fixed column width. Sequence content
//! is kept as-is here; alphabet validation belongs to the sequence models.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

/// Column width for wrapped sequence bodies.
pub const LINE_WIDTH: usize = 50;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("FASTA input does not start with a '>' header line")]
    MissingHeader,
    #[error("FASTA record '{0}' has an empty sequence body")]
    EmptySequence(String),
    #[error("file I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One FASTA record: identifier (first word of the header) and its
/// concatenated sequence body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub sequence: String,
}

impl FastaRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }
}

/// Parses FASTA text. Blank lines and `\r` are ignored; whitespace inside
/// sequence lines is stripped.
pub fn parse_str(text: &str) -> Result<Vec<FastaRecord>, FastaError> {
    let mut records: Vec<FastaRecord> = Vec::new();
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            let id = header.split_whitespace().next().unwrap_or_default().to_string();
            records.push(FastaRecord::new(id, String::new()));
        } else {
            let record = records.last_mut().ok_or(FastaError::MissingHeader)?;
            record
                .sequence
                .extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }
    if records.is_empty() {
        return Err(FastaError::MissingHeader);
    }
    for record in &records {
        if record.sequence.is_empty() {
            return Err(FastaError::EmptySequence(record.id.clone()));
        }
    }
    Ok(records)
}

pub fn read_file(path: &Path) -> Result<Vec<FastaRecord>, FastaError> {
    let text = fs::read_to_string(path)?;
    parse_str(&text)
}

/// Resolves a caller-supplied source string: a path to an existing file is
/// read from disk, anything else is treated as raw FASTA text.
pub fn resolve_input(source: &str) -> Result<Vec<FastaRecord>, FastaError> {
    let path = Path::new(source);
    if path.is_file() {
        read_file(path)
    } else {
        parse_str(source)
    }
}

pub fn write_records<W: Write>(mut writer: W, records: &[FastaRecord]) -> io::Result<()> {
    for record in records {
        writeln!(writer, ">{}", record.id)?;
        for chunk in record.sequence.as_bytes().chunks(LINE_WIDTH) {
            writer.write_all(chunk)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

pub fn write_file(path: &Path, records: &[FastaRecord]) -> Result<(), FastaError> {
    let file = fs::File::create(path)?;
    let mut writer = io::BufWriter::new(file);
    write_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}
