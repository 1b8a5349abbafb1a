// Input table seam: the flat cost table handed over by the external
// data-preparation step. Column projection and dataset merging happen on
// the collaborator's side; this type only checks the contract and extracts
// typed cost entries.

use super::models::CostEntry;

/// Columns the cost table must provide. Anything else is ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = ["seller_id", "order_id", "freight_value"];

/// Error types for table ingestion
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Input table is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("Row {row}: '{value}' is not a non-negative freight value")]
    InvalidFreightValue { row: usize, value: String },
}

/// Flat shipment-cost table with named columns and string cells.
///
/// Rows shorter than the column list are legal for ignored columns; a row
/// that has no cell under a required column is treated as a missing column.
#[derive(Debug, Clone, Default)]
pub struct ShipmentTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ShipmentTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: String::new(),
            columns,
            rows,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    fn column_index(&self, column: &str) -> Result<usize, TableError> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| TableError::MissingColumn {
                column: column.to_string(),
            })
    }

    /// Extract typed cost entries, validating the table contract first.
    ///
    /// Fails before any entry is produced when a required column is absent,
    /// so no partial model can ever be built from a malformed table. An
    /// empty table yields an empty entry list, which downstream treats as a
    /// trivially optimal model rather than an error.
    pub fn cost_entries(&self) -> Result<Vec<CostEntry>, TableError> {
        let seller_idx = self.column_index(REQUIRED_COLUMNS[0])?;
        let order_idx = self.column_index(REQUIRED_COLUMNS[1])?;
        let freight_idx = self.column_index(REQUIRED_COLUMNS[2])?;

        let mut entries = Vec::with_capacity(self.rows.len());
        for (row_no, row) in self.rows.iter().enumerate() {
            let cell = |idx: usize| -> Result<&String, TableError> {
                row.get(idx).ok_or_else(|| TableError::MissingColumn {
                    column: self.columns[idx].clone(),
                })
            };

            let seller_id = cell(seller_idx)?;
            let order_id = cell(order_idx)?;
            let raw_freight = cell(freight_idx)?;

            let freight_value: f64 =
                raw_freight
                    .trim()
                    .parse()
                    .map_err(|_| TableError::InvalidFreightValue {
                        row: row_no,
                        value: raw_freight.clone(),
                    })?;
            if !freight_value.is_finite() || freight_value < 0.0 {
                return Err(TableError::InvalidFreightValue {
                    row: row_no,
                    value: raw_freight.clone(),
                });
            }

            entries.push(CostEntry::new(
                seller_id.clone(),
                order_id.clone(),
                freight_value,
            ));
        }

        Ok(entries)
    }
}
