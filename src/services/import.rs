//! CSV transaction import
//!
//! Imports transactions from CSV files exported by banks or other trackers.
//! Amounts are signed in the file: positive rows become income, negative
//! rows become expenses. An import can either append to the stored set or
//! replace it wholesale (no merging or deduplication in replace mode).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{GoalflowError, GoalflowResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// Column mapping configuration for CSV import
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Index of the date column
    pub date_column: usize,
    /// Index of the signed amount column
    pub amount_column: usize,
    /// Index of the category column
    pub category_column: usize,
    /// Index of an optional note column
    pub note_column: Option<usize>,
    /// Date format string (e.g., "%Y-%m-%d", "%m/%d/%Y")
    pub date_format: String,
    /// Whether the first row is a header
    pub has_header: bool,
    /// Delimiter character
    pub delimiter: char,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date_column: 0,
            amount_column: 1,
            category_column: 2,
            note_column: None,
            date_format: "%Y-%m-%d".to_string(),
            has_header: true,
            delimiter: ',',
        }
    }
}

/// Summary of a completed import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportResult {
    /// Rows imported as transactions
    pub imported: usize,
    /// Rows skipped (zero amounts)
    pub skipped: usize,
}

/// Service for importing transactions from CSV
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import transactions from a CSV file
    ///
    /// With `replace` set, the stored transaction set is discarded and
    /// replaced by the file contents; otherwise rows are appended.
    pub fn import_file(
        &self,
        path: impl AsRef<Path>,
        mapping: &ColumnMapping,
        replace: bool,
    ) -> GoalflowResult<ImportResult> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| GoalflowError::Import(format!("Failed to open {}: {}", path.display(), e)))?;
        self.import_reader(file, mapping, replace)
    }

    /// Import transactions from any reader (exposed for testing)
    pub fn import_reader<R: Read>(
        &self,
        reader: R,
        mapping: &ColumnMapping,
        replace: bool,
    ) -> GoalflowResult<ImportResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(mapping.has_header)
            .delimiter(mapping.delimiter as u8)
            .flexible(false)
            .from_reader(reader);

        let mut parsed = Vec::new();
        let mut result = ImportResult::default();

        for (index, record) in csv_reader.records().enumerate() {
            // Row numbers in errors are 1-based and account for the header
            let row = index + 1 + usize::from(mapping.has_header);

            let record = record
                .map_err(|e| GoalflowError::Import(format!("Row {}: {}", row, e)))?;

            let field = |column: usize| -> GoalflowResult<&str> {
                record.get(column).map(str::trim).ok_or_else(|| {
                    GoalflowError::Import(format!("Row {}: missing column {}", row, column))
                })
            };

            let date = NaiveDate::parse_from_str(field(mapping.date_column)?, &mapping.date_format)
                .map_err(|e| GoalflowError::Import(format!("Row {}: invalid date: {}", row, e)))?;

            let signed = Money::parse(field(mapping.amount_column)?)
                .map_err(|e| GoalflowError::Import(format!("Row {}: {}", row, e)))?;

            if signed.is_zero() {
                result.skipped += 1;
                continue;
            }

            let category = field(mapping.category_column)?;
            if category.is_empty() {
                return Err(GoalflowError::Import(format!("Row {}: empty category", row)));
            }

            let kind = if signed.is_negative() {
                TransactionKind::Expense
            } else {
                TransactionKind::Income
            };

            let mut transaction = Transaction::new(kind, signed.abs(), category, date);
            if let Some(note_column) = mapping.note_column {
                transaction = transaction.with_note(field(note_column)?);
            }

            parsed.push(transaction);
            result.imported += 1;
        }

        if replace {
            self.storage.transactions.replace_all(parsed)?;
        } else {
            for transaction in parsed {
                self.storage.transactions.add(transaction)?;
            }
        }
        self.storage.transactions.save()?;

        Ok(result)
    }
}
