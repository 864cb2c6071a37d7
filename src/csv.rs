// src/csv.rs
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use ::csv::{ReaderBuilder, WriterBuilder};

use crate::error::Result;
use crate::sheet::{Cell, Sheet};

/* ---------------- Parsing ---------------- */

/// Delimited text into cells. Ragged rows are kept as they are; there is no
/// header detection, row 0 is whatever the file starts with.
pub fn parse_rows<R: io::Read>(reader: R, delim: u8) -> Result<Vec<Vec<Cell>>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(
            rec.iter()
                .map(|f| if f.is_empty() { Cell::Empty } else { Cell::text(f) })
                .collect(),
        );
    }
    Ok(rows)
}

pub fn read_rows(path: &Path, delim: u8) -> Result<Vec<Vec<Cell>>> {
    let file = File::open(path)?;
    let rows = parse_rows(file, delim)?;
    logd!("Csv: {} row(s) from {}", rows.len(), path.display());
    Ok(rows)
}

/* ---------------- Writing ---------------- */

pub fn write_sheet<W: Write>(w: W, sheet: &Sheet, delim: u8) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delim)
        .flexible(true)
        .from_writer(w);
    for row in &sheet.rows {
        wtr.write_record(row.iter().map(Cell::as_text))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_file(path: &Path, sheet: &Sheet, delim: u8) -> Result<()> {
    let file = File::create(path)?;
    write_sheet(io::BufWriter::new(file), sheet, delim)
}

/// Whole sheet as delimited text (clipboard copy).
pub fn to_delimited_string(sheet: &Sheet, delim: u8) -> String {
    let mut buf: Vec<u8> = Vec::new();
    if let Err(e) = write_sheet(&mut buf, sheet, delim) {
        loge!("Csv: {e}");
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
