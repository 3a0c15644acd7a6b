//! CSV position loader.
//!
//! One leg per row. Headers are matched case-insensitively:
//!
//! | Column     | Aliases         | Meaning                                |
//! |------------|-----------------|----------------------------------------|
//! | `Type`     | `contract_type` | `Call`, `Put` or `Stock`               |
//! | `Strike`   |                 | Strike, or reference price for stock   |
//! | `Premium`  |                 | Premium per share; may be blank for stock |
//! | `Volume`   | `quantity`      | Contracts or shares                    |
//! | `Position` | `side`          | `Long` or `Short`                      |

use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::debug;

use super::error::LoaderError;
use crate::application::dto::LegRecordDto;
use crate::application::ports::{PositionSourceError, PositionSourcePort};

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    contract_type: usize,
    strike: usize,
    premium: usize,
    quantity: usize,
    side: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoaderError> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|header| names.iter().any(|name| header.eq_ignore_ascii_case(name)))
                .ok_or_else(|| LoaderError::MissingColumn(names[0].to_string()))
        };

        Ok(Self {
            contract_type: find(&["Type", "contract_type"])?,
            strike: find(&["Strike"])?,
            premium: find(&["Premium"])?,
            quantity: find(&["Volume", "quantity"])?,
            side: find(&["Position", "side"])?,
        })
    }
}

/// CSV file loader for position legs.
#[derive(Debug, Clone)]
pub struct CsvPositionLoader {
    path: PathBuf,
}

impl CsvPositionLoader {
    /// Create a loader for the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the position file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load leg records from the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, a required column is absent,
    /// or a row cannot be parsed.
    pub fn load(&self) -> Result<Vec<LegRecordDto>, LoaderError> {
        if !self.path.exists() {
            return Err(LoaderError::FileNotFound(self.path.display().to_string()));
        }

        let file = std::fs::File::open(&self.path)?;
        let records = Self::parse(file)?;
        debug!(path = %self.path.display(), rows = records.len(), "Parsed position file");
        Ok(records)
    }

    /// Parse leg records from any CSV reader.
    ///
    /// # Errors
    ///
    /// Returns an error if a required column is absent or a row cannot be
    /// parsed.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<LegRecordDto>, LoaderError> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let columns = ColumnIndex::from_headers(reader.headers()?)?;

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let row = idx + 1;
            if record.iter().all(str::is_empty) {
                continue;
            }
            records.push(parse_record(&record, row, columns)?);
        }
        Ok(records)
    }
}

impl PositionSourcePort for CsvPositionLoader {
    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }

    fn load_legs(&self) -> Result<Vec<LegRecordDto>, PositionSourceError> {
        Ok(self.load()?)
    }
}

fn parse_record(
    record: &StringRecord,
    row: usize,
    columns: ColumnIndex,
) -> Result<LegRecordDto, LoaderError> {
    let field = |idx: usize| record.get(idx).unwrap_or_default();
    let invalid = |message: String| LoaderError::InvalidFormat { row, message };

    let contract_type = field(columns.contract_type);
    if contract_type.is_empty() {
        return Err(invalid("Type is blank".to_string()));
    }

    let strike = parse_decimal(field(columns.strike), "Strike").map_err(invalid)?;

    let raw_premium = field(columns.premium);
    let premium = if raw_premium.is_empty() && contract_type.eq_ignore_ascii_case("stock") {
        Decimal::ZERO
    } else {
        parse_decimal(raw_premium, "Premium").map_err(invalid)?
    };

    let raw_quantity = field(columns.quantity);
    let quantity = raw_quantity
        .parse::<u32>()
        .map_err(|e| invalid(format!("Volume '{raw_quantity}' is not a whole number: {e}")))?;

    Ok(LegRecordDto::new(
        contract_type,
        strike,
        premium,
        quantity,
        field(columns.side),
    ))
}

fn parse_decimal(raw: &str, column: &str) -> Result<Decimal, String> {
    Decimal::from_str(raw).map_err(|e| format!("{column} '{raw}' is not a number: {e}"))
}
