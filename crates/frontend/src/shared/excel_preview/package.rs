//! Structural checks on an xlsx package before it reaches calamine.
//!
//! calamine indexes the shared-string table and subtracts range corners
//! without bounds checks, and a panic aborts the whole wasm module. Every
//! worksheet is scanned here with the same reader settings calamine uses, so
//! out-of-range string indices, inverted ranges and overflowing cell
//! references are reported as decode errors instead.

use contracts::reports::ReportError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{BufRead, BufReader, Cursor, Read, Seek};
use zip::ZipArchive;

const WORKBOOK_PART: &str = "xl/workbook.xml";
const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";
const WORKSHEETS_DIR: &str = "xl/worksheets/";

/// Most digits a row component may carry before calamine's arithmetic overflows
const MAX_ROW_DIGITS: usize = 9;
/// Most letters a column component may carry, same reason
const MAX_COLUMN_LETTERS: usize = 6;

/// Rejects xlsx packages calamine cannot read without panicking.
///
/// Anything that is not an xlsx zip (xls, ods, random bytes) is passed
/// through untouched; calamine reports those itself.
pub fn verify_xlsx(bytes: &[u8]) -> Result<(), ReportError> {
    if !bytes.starts_with(b"PK") {
        return Ok(());
    }

    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(decode_error)?;
    let names: Vec<String> = archive.file_names().map(String::from).collect();
    if !names.iter().any(|n| n.eq_ignore_ascii_case(WORKBOOK_PART)) {
        return Ok(());
    }

    let shared_strings = match names.iter().find(|n| n.eq_ignore_ascii_case(SHARED_STRINGS_PART)) {
        Some(name) => count_shared_strings(part_reader(&mut archive, name)?)?,
        None => 0,
    };

    for name in names.iter().filter(|n| is_worksheet(n)) {
        check_worksheet(part_reader(&mut archive, name)?, shared_strings, name)?;
    }
    Ok(())
}

fn decode_error(e: impl std::fmt::Display) -> ReportError {
    ReportError::Decode(e.to_string())
}

fn is_worksheet(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.starts_with(WORKSHEETS_DIR) && lower.ends_with(".xml")
}

/// Reads a whole part and wraps it in a reader configured like calamine's
fn part_reader<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Reader<BufReader<Cursor<Vec<u8>>>>, ReportError> {
    let mut contents = Vec::new();
    archive
        .by_name(name)
        .map_err(decode_error)?
        .read_to_end(&mut contents)
        .map_err(decode_error)?;

    let mut reader = Reader::from_reader(BufReader::new(Cursor::new(contents)));
    reader
        .check_end_names(false)
        .trim_text(false)
        .check_comments(false)
        .expand_empty_elements(true);
    Ok(reader)
}

/// Number of entries calamine keeps from the shared-string table.
///
/// An `<si>` only yields an entry when it holds a rich run or a
/// non-phonetic `<t>`.
fn count_shared_strings<R: BufRead>(mut xml: Reader<R>) -> Result<usize, ReportError> {
    let mut buf = Vec::new();
    let mut count = 0;
    let mut item: Option<bool> = None;
    let mut phonetic = false;

    loop {
        buf.clear();
        match xml.read_event_into(&mut buf).map_err(decode_error)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"si" => {
                    item = Some(false);
                    phonetic = false;
                }
                b"r" => mark_text(&mut item),
                b"rPh" => phonetic = true,
                b"t" if !phonetic => mark_text(&mut item),
                _ => {}
            },
            Event::End(ref e) => match e.local_name().as_ref() {
                b"si" => {
                    if item.take() == Some(true) {
                        count += 1;
                    }
                }
                b"rPh" => phonetic = false,
                b"sst" => break,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(count)
}

fn mark_text(item: &mut Option<bool>) {
    if let Some(has_text) = item.as_mut() {
        *has_text = true;
    }
}

fn check_worksheet<R: BufRead>(
    mut xml: Reader<R>,
    shared_strings: usize,
    part: &str,
) -> Result<(), ReportError> {
    let mut buf = Vec::new();
    let mut shared_cell = false;
    let mut value: Option<String> = None;

    loop {
        buf.clear();
        match xml.read_event_into(&mut buf).map_err(decode_error)? {
            Event::Start(ref e) => {
                check_references(e, part)?;
                match e.local_name().as_ref() {
                    b"c" => shared_cell = attribute_is(e, b"t", b"s")?,
                    b"v" if shared_cell => value = Some(String::new()),
                    _ => {}
                }
            }
            Event::Text(ref t) => {
                if let Some(v) = value.as_mut() {
                    v.push_str(&t.unescape().map_err(decode_error)?);
                }
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"v" => {
                    let index = value.take().and_then(|v| v.parse::<usize>().ok());
                    if let Some(index) = index.filter(|i| *i >= shared_strings) {
                        return Err(ReportError::Decode(format!(
                            "{}: shared string {} out of {}",
                            part, index, shared_strings
                        )));
                    }
                }
                b"c" => shared_cell = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(())
}

fn attribute_is(e: &BytesStart<'_>, key: &[u8], expected: &[u8]) -> Result<bool, ReportError> {
    for attr in e.attributes() {
        let attr = attr.map_err(decode_error)?;
        if attr.key.as_ref() == key {
            return Ok(attr.value.as_ref() == expected);
        }
    }
    Ok(false)
}

/// `ref` holds a range (`dimension`, `mergeCell`, shared formulas), `r` a
/// single cell or row
fn check_references(e: &BytesStart<'_>, part: &str) -> Result<(), ReportError> {
    for attr in e.attributes() {
        let attr = attr.map_err(decode_error)?;
        let ok = match attr.key.as_ref() {
            b"ref" => range_is_safe(&attr.value),
            b"r" => reference_is_safe(&attr.value),
            _ => true,
        };
        if !ok {
            return Err(ReportError::Decode(format!(
                "{}: invalid reference '{}'",
                part,
                String::from_utf8_lossy(&attr.value)
            )));
        }
    }
    Ok(())
}

fn reference_is_safe(reference: &[u8]) -> bool {
    let digits = reference.iter().filter(|c| c.is_ascii_digit()).count();
    let letters = reference.iter().filter(|c| c.is_ascii_alphabetic()).count();
    digits <= MAX_ROW_DIGITS && letters <= MAX_COLUMN_LETTERS
}

/// A range whose corners are both full cell references must not be inverted
fn range_is_safe(range: &[u8]) -> bool {
    let parts: Vec<&[u8]> = range.split(|c| *c == b':').collect();
    if !parts.iter().all(|part| reference_is_safe(part)) {
        return false;
    }
    match parts.as_slice() {
        [start, end] => match (cell_position(start), cell_position(end)) {
            (Some((start_row, start_col)), Some((end_row, end_col))) => {
                end_row >= start_row && end_col >= start_col
            }
            _ => true,
        },
        _ => true,
    }
}

/// One-based (row, column) of a plain `A1` reference
fn cell_position(reference: &[u8]) -> Option<(u32, u32)> {
    let split = reference.iter().position(|c| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);
    if letters.is_empty()
        || !letters.iter().all(|c| c.is_ascii_alphabetic())
        || !digits.iter().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let column = letters.iter().fold(0u32, |acc, c| {
        acc * 26 + (c.to_ascii_uppercase() - b'A') as u32 + 1
    });
    let row = std::str::from_utf8(digits).ok()?.parse::<u32>().ok()?;
    Some((row, column))
}
