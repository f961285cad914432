use std::collections::HashMap;

/// One data row of a sheet, keyed by header name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    cells: HashMap<String, String>,
}

impl SheetRow {
    /// Cell under `header`, "" when the header is unknown
    pub fn get(&self, header: &str) -> &str {
        self.cells.get(header).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains_header(&self, header: &str) -> bool {
        self.cells.contains_key(header)
    }
}

/// Header row plus data rows of a sheet range
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<SheetRow>,
}

impl SheetTable {
    /// Cell of `row` in the column at position `column`.
    ///
    /// The sheets address columns by position, the header text only
    /// serves as the key. Out-of-range positions read as "".
    pub fn cell<'a>(&self, row: &'a SheetRow, column: usize) -> &'a str {
        match self.headers.get(column) {
            Some(header) => row.get(header),
            None => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Converts a raw value grid into a table: the first row is the header,
/// missing trailing cells become "".
pub fn to_table(values: &[Vec<String>]) -> SheetTable {
    let Some((header_row, data_rows)) = values.split_first() else {
        return SheetTable::default();
    };

    let headers = header_row.clone();
    let rows = data_rows
        .iter()
        .map(|raw| {
            let cells = headers
                .iter()
                .enumerate()
                .map(|(index, header)| {
                    let value = raw.get(index).cloned().unwrap_or_default();
                    (header.clone(), value)
                })
                .collect();
            SheetRow { cells }
        })
        .collect();

    SheetTable { headers, rows }
}
