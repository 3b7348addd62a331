use super::package::verify_xlsx;
use crate::usecases::common::Notifier;
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use contracts::reports::{ReportError, SpreadsheetGrid};
use std::io::Cursor;

pub const DECODE_ERROR_MESSAGE: &str = "Error al procesar el archivo Excel";

/// Result of decoding a workbook for display.
///
/// `grid` is always renderable; `failure` is set when it is the error
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSheet {
    pub grid: SpreadsheetGrid,
    pub failure: Option<ReportError>,
}

/// Decodes the first sheet of a workbook, never failing.
///
/// An empty first sheet yields the "Sin datos disponibles" grid; unreadable
/// bytes yield the "Error al cargar datos" grid together with the cause.
pub fn decode(bytes: &[u8]) -> DecodedSheet {
    match read_first_sheet(bytes) {
        Ok(grid) if grid.is_empty() => DecodedSheet {
            grid: SpreadsheetGrid::no_data(),
            failure: None,
        },
        Ok(grid) => DecodedSheet {
            grid,
            failure: None,
        },
        Err(e) => DecodedSheet {
            grid: SpreadsheetGrid::load_error(),
            failure: Some(e),
        },
    }
}

/// Decodes for display, raising one error toast when the bytes are unreadable
pub fn decode_and_report<N: Notifier + ?Sized>(bytes: &[u8], notifier: &N) -> SpreadsheetGrid {
    let decoded = decode(bytes);
    if let Some(e) = &decoded.failure {
        log::error!("Error loading Excel: {}", e);
        notifier.error(DECODE_ERROR_MESSAGE, None);
    }
    decoded.grid
}

/// Reads the first sheet of a workbook (xlsx, xls, ods) into a grid of rows
pub fn read_first_sheet(bytes: &[u8]) -> Result<SpreadsheetGrid, ReportError> {
    verify_xlsx(bytes)?;
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| ReportError::Decode(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ReportError::Decode("El libro no contiene hojas".to_string()))?
        .map_err(|e| ReportError::Decode(e.to_string()))?;

    Ok(SpreadsheetGrid::from_rows(range_to_rows(&range)))
}

/// Cell text anchored at A1: cells before the first used row/column are
/// kept as blanks so column positions match the sheet.
fn range_to_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<String>> = (0..first_row).map(|_| Vec::new()).collect();
    for cells in range.rows() {
        let mut row = vec![String::new(); first_col as usize];
        row.extend(cells.iter().map(ToString::to_string));
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::notifications::{ToastKind, ToastQueue};
    use rust_xlsxwriter::Workbook;
    use std::cell::RefCell;
    use std::io::{Read, Write};
    use zip::write::SimpleFileOptions;
    use zip::{ZipArchive, ZipWriter};

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    /// One worksheet per entry; empty strings are left unwritten
    fn workbook(sheets: &[&[&[&str]]]) -> Vec<u8> {
        let mut book = Workbook::new();
        for rows in sheets {
            let worksheet = book.add_worksheet();
            for (r, cells) in rows.iter().enumerate() {
                for (c, value) in cells.iter().enumerate() {
                    if !value.is_empty() {
                        worksheet.write_string(r as u32, c as u16, *value).unwrap();
                    }
                }
            }
        }
        book.save_to_buffer().unwrap()
    }

    /// Copies a package, passing one part through `edit`
    fn rewrite_part(bytes: &[u8], part: &str, edit: impl Fn(&str) -> String) -> Vec<u8> {
        let mut source = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for i in 0..source.len() {
            let mut file = source.by_index(i).unwrap();
            let name = file.name().to_string();
            let mut contents = Vec::new();
            file.read_to_end(&mut contents).unwrap();
            if name == part {
                contents = edit(&String::from_utf8(contents).unwrap()).into_bytes();
            }
            writer.start_file(name.as_str(), SimpleFileOptions::default()).unwrap();
            writer.write_all(&contents).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_reads_header_and_rows() {
        let mut book = Workbook::new();
        let sheet = book.add_worksheet();
        sheet.write_string(0, 0, "Nombre Productor").unwrap();
        sheet.write_string(0, 1, "Cantidad").unwrap();
        sheet.write_string(1, 0, "Finca 1").unwrap();
        sheet.write_number(1, 1, 120.0).unwrap();
        sheet.write_number(2, 1, 7.5).unwrap();
        let bytes = book.save_to_buffer().unwrap();

        let decoded = decode(&bytes);

        assert!(decoded.failure.is_none());
        assert_eq!(
            decoded.grid.rows(),
            &[
                row(&["Nombre Productor", "Cantidad"]),
                row(&["Finca 1", "120"]),
                row(&["", "7.5"]),
            ]
        );
    }

    #[test]
    fn test_blank_cells_become_empty_strings() {
        let bytes = workbook(&[&[&["a", "b", "c"], &["1", "", "3"], &["x"]]]);

        let grid = decode(&bytes).grid;

        assert_eq!(grid.rows()[1], row(&["1", "", "3"]));
        assert_eq!(grid.rows()[2], row(&["x", "", ""]));
        assert!(grid.rows().iter().all(|r| r.len() == 3));
    }

    #[test]
    fn test_only_first_sheet_is_read() {
        let bytes = workbook(&[&[&["primera"]], &[&["segunda"]]]);
        assert_eq!(decode(&bytes).grid.rows(), &[row(&["primera"])]);
    }

    #[test]
    fn test_empty_first_sheet_yields_no_data_placeholder() {
        let bytes = workbook(&[&[], &[&["ignored"]]]);

        let decoded = decode(&bytes);

        assert!(decoded.failure.is_none());
        assert_eq!(
            decoded.grid.rows(),
            &[
                row(&["Nombre Productor", "Área", "Producto", "Cantidad", "Costo"]),
                row(&["Sin datos disponibles", "", "", "", ""]),
            ]
        );
    }

    #[test]
    fn test_malformed_bytes_yield_error_placeholder() {
        let decoded = decode(b"definitely not a workbook");

        assert!(matches!(decoded.failure, Some(ReportError::Decode(_))));
        assert_eq!(
            decoded.grid.rows()[1],
            row(&["Error al cargar datos", "", "", "", ""])
        );
    }

    #[test]
    fn test_truncated_zip_yields_error_placeholder() {
        let bytes = workbook(&[&[&["a"]]]);
        let decoded = decode(&bytes[..bytes.len() / 2]);
        assert!(decoded.failure.is_some());
        assert_eq!(decoded.grid, SpreadsheetGrid::load_error());
    }

    #[test]
    fn test_offset_range_is_anchored_at_a1() {
        let mut book = Workbook::new();
        let sheet = book.add_worksheet();
        sheet.write_string(1, 1, "b2").unwrap();
        let bytes = book.save_to_buffer().unwrap();

        assert_eq!(decode(&bytes).grid.rows(), &[row(&["", ""]), row(&["", "b2"])]);
    }

    #[test]
    fn test_shared_string_index_past_table_yields_error_placeholder() {
        let bytes = workbook(&[&[&["Finca 1"]]]);
        let sheet = |xml: &str| {
            assert!(xml.contains("<v>0</v>"));
            xml.replace("<v>0</v>", "<v>99</v>")
        };
        let corrupted = rewrite_part(&bytes, "xl/worksheets/sheet1.xml", sheet);

        let decoded = decode(&corrupted);

        assert!(matches!(decoded.failure, Some(ReportError::Decode(_))));
        assert_eq!(decoded.grid, SpreadsheetGrid::load_error());
    }

    #[test]
    fn test_inverted_dimension_yields_error_placeholder() {
        let bytes = workbook(&[&[&["a", ""], &["", "b"]]]);
        let sheet = |xml: &str| {
            assert!(xml.contains(r#"<dimension ref="A1:B2"/>"#));
            xml.replace(r#"<dimension ref="A1:B2"/>"#, r#"<dimension ref="B2:A1"/>"#)
        };
        let corrupted = rewrite_part(&bytes, "xl/worksheets/sheet1.xml", sheet);

        assert_eq!(decode(&corrupted).grid, SpreadsheetGrid::load_error());
    }

    #[test]
    fn test_rewritten_but_intact_package_still_decodes() {
        let bytes = workbook(&[&[&["a", "b"]]]);
        let copy = rewrite_part(&bytes, "xl/worksheets/sheet1.xml", |xml| xml.to_string());
        assert_eq!(decode(&copy).grid.rows(), &[row(&["a", "b"])]);
    }

    #[test]
    fn test_single_byte_corruptions_never_panic() {
        let bytes = workbook(&[&[&["Nombre Productor", "Cantidad"], &["Finca 1", "120"]]]);
        for i in 0..bytes.len() {
            for mask in [0xFF, 0x01, 0x80] {
                let mut corrupted = bytes.clone();
                corrupted[i] ^= mask;
                let decoded = decode(&corrupted);
                assert_eq!(decoded.failure.is_some(), decoded.grid == SpreadsheetGrid::load_error());
            }
        }
    }

    #[test]
    fn test_decode_failure_raises_one_error_toast() {
        let toasts = RefCell::new(ToastQueue::default());

        let grid = decode_and_report(b"definitely not a workbook", &toasts);

        assert_eq!(grid, SpreadsheetGrid::load_error());
        let toasts = toasts.borrow();
        assert_eq!(toasts.count(ToastKind::Error), 1);
        assert_eq!(toasts.toasts()[0].message, DECODE_ERROR_MESSAGE);
    }

    #[test]
    fn test_readable_workbook_raises_no_toast() {
        let toasts = RefCell::new(ToastQueue::default());

        let grid = decode_and_report(&workbook(&[&[&["a"]]]), &toasts);

        assert_eq!(grid.rows(), &[row(&["a"])]);
        assert!(toasts.borrow().toasts().is_empty());
    }
}
