/// Header used by the placeholder grids
pub const PLACEHOLDER_HEADER: [&str; 5] = ["Nombre Productor", "Área", "Producto", "Cantidad", "Costo"];

pub const NO_DATA_MESSAGE: &str = "Sin datos disponibles";
pub const LOAD_ERROR_MESSAGE: &str = "Error al cargar datos";

/// Rows of cell text decoded from a spreadsheet; row 0 is the header.
///
/// Every row has the same width: short rows are padded with empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpreadsheetGrid {
    rows: Vec<Vec<String>>,
}

impl SpreadsheetGrid {
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { rows }
    }

    /// Shown when the first sheet has no rows at all
    pub fn no_data() -> Self {
        Self::placeholder(NO_DATA_MESSAGE)
    }

    /// Shown when the payload could not be parsed
    pub fn load_error() -> Self {
        Self::placeholder(LOAD_ERROR_MESSAGE)
    }

    fn placeholder(message: &str) -> Self {
        let header = PLACEHOLDER_HEADER.iter().map(|h| h.to_string()).collect();
        let mut row = vec![String::new(); PLACEHOLDER_HEADER.len()];
        row[0] = message.to_string();
        Self {
            rows: vec![header, row],
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }
}
