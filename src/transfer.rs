//! CSV import/export of birthday records
//!
//! Export always writes the canonical column set with every data field quoted.
//! Import locates columns by header name, rejects bad rows individually and
//! keeps going; only unreadable input or a header without the required
//! columns aborts the whole import.

use crate::birthday::{BirthDate, BirthdayRecord};
use crate::error::{ParseError, TransferError};
use chrono::NaiveDate;
use csv::{Position, QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Canonical CSV columns, in export order
pub const CSV_HEADERS: [&str; 8] = [
    "id",
    "name",
    "birthday",
    "phoneNumber",
    "emailAddress",
    "socialMediaURL",
    "notes",
    "yearIsKnown",
];

/// Result of parsing a CSV document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvImport {
    /// Rows that decoded successfully, in file order
    pub records: Vec<BirthdayRecord>,
    /// One entry per rejected row
    pub errors: Vec<ParseError>,
}

impl CsvImport {
    /// Number of rows that were rejected
    pub fn skipped(&self) -> usize {
        self.errors.len()
    }
}

/// Serialize records to CSV text (header first, one row per record)
pub fn generate_csv(records: &[BirthdayRecord]) -> Result<String, TransferError> {
    let mut csv_text = CSV_HEADERS.join(",");
    csv_text.push('\n');

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records {
        writer.write_record([
            record.id().to_string().as_str(),
            record.name.as_str(),
            record.birthday.to_iso_string().as_str(),
            record.phone_number.as_deref().unwrap_or(""),
            record.email.as_deref().unwrap_or(""),
            record.social_media_url.as_deref().unwrap_or(""),
            record.notes.as_deref().unwrap_or(""),
            if record.year_known() { "true" } else { "false" },
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TransferError::Csv(e.into_error().into()))?;
    csv_text.push_str(&String::from_utf8_lossy(&bytes));
    Ok(csv_text)
}

/// Parse CSV text into records
///
/// Blank lines are ignored. The first non-blank row is the header. Each data
/// row that fails validation is reported in [`CsvImport::errors`] and left out
/// of [`CsvImport::records`].
pub fn parse_csv(text: &str) -> Result<CsvImport, TransferError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut rows = reader.records();

    let header = loop {
        match rows.next() {
            None => return Ok(CsvImport::default()),
            Some(row) => {
                let row = row?;
                if !is_blank(&row) {
                    break row;
                }
            }
        }
    };
    let columns = ColumnMap::from_header(&header)?;

    let mut import = CsvImport::default();
    for row in rows {
        let row = row?;
        if is_blank(&row) {
            continue;
        }
        let line = row
            .position()
            .map(|pos| start_line(text, pos))
            .unwrap_or_default();
        match columns.decode(&row, line) {
            Ok(record) => import.records.push(record),
            Err(e) => {
                warn!("Skipping CSV row: {}", e);
                import.errors.push(e);
            }
        }
    }

    debug!(
        "Parsed CSV: {} record(s), {} rejected row(s)",
        import.records.len(),
        import.skipped()
    );
    Ok(import)
}

/// Write records to a CSV file, returning the number of rows written
pub fn export_csv_file(path: &Path, records: &[BirthdayRecord]) -> Result<usize, TransferError> {
    let csv_text = generate_csv(records)?;
    fs::write(path, csv_text).map_err(|source| TransferError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Exported {} birthday(s) to {}", records.len(), path.display());
    Ok(records.len())
}

/// Read and parse a CSV file
pub fn import_csv_file(path: &Path) -> Result<CsvImport, TransferError> {
    let text = fs::read_to_string(path).map_err(|source| TransferError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let import = parse_csv(&text)?;
    info!(
        "Read {} birthday(s) from {} ({} row(s) skipped)",
        import.records.len(),
        path.display(),
        import.skipped()
    );
    Ok(import)
}

/// 1-based line on which a row's first field starts
///
/// The reader reports the position right after the previous row, so any
/// blank lines it skipped in between are counted here.
fn start_line(text: &str, pos: &Position) -> u64 {
    let rest = text.as_bytes().get(pos.byte() as usize..).unwrap_or_default();
    let skipped = rest
        .iter()
        .take_while(|b| matches!(b, b'\n' | b'\r'))
        .filter(|b| **b == b'\n')
        .count();
    pos.line() + skipped as u64
}

fn is_blank(row: &StringRecord) -> bool {
    row.len() <= 1 && row.iter().all(|field| field.trim().is_empty())
}

/// Column positions resolved from the header row
struct ColumnMap {
    width: usize,
    id: Option<usize>,
    name: usize,
    birthday: usize,
    phone_number: Option<usize>,
    email: Option<usize>,
    social_media_url: Option<usize>,
    notes: Option<usize>,
    year_known: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &StringRecord) -> Result<Self, TransferError> {
        let names: Vec<String> = header
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        let find = |aliases: &[&str]| {
            names
                .iter()
                .position(|name| aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name)))
        };

        Ok(Self {
            width: names.len(),
            id: find(&["id"]),
            name: find(&["name"]).ok_or(TransferError::MissingColumn("name"))?,
            birthday: find(&["birthday"]).ok_or(TransferError::MissingColumn("birthday"))?,
            phone_number: find(&["phoneNumber"]),
            email: find(&["emailAddress", "email"]),
            social_media_url: find(&["socialMediaURL"]),
            notes: find(&["notes"]),
            year_known: find(&["yearIsKnown"]),
        })
    }

    fn decode(&self, row: &StringRecord, line: u64) -> Result<BirthdayRecord, ParseError> {
        if row.len() != self.width {
            return Err(ParseError::ColumnCount {
                line,
                expected: self.width,
                actual: row.len(),
            });
        }

        let field = |column: usize| row.get(column).unwrap_or_default();
        let optional = |column: Option<usize>| {
            column
                .map(field)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let raw_birthday = field(self.birthday);
        let invalid_date = || ParseError::InvalidDate {
            line,
            value: raw_birthday.to_string(),
        };
        let date = NaiveDate::parse_from_str(raw_birthday.trim(), "%Y-%m-%d")
            .map_err(|_| invalid_date())?;

        let year_known = match self.year_known.map(field).map(str::trim) {
            None | Some("") => true,
            Some(flag) if flag.eq_ignore_ascii_case("true") => true,
            Some(flag) if flag.eq_ignore_ascii_case("false") => false,
            Some(flag) => {
                return Err(ParseError::InvalidYearFlag {
                    line,
                    value: flag.to_string(),
                });
            }
        };
        let birthday = if year_known {
            BirthDate::from_date(date).map_err(|_| invalid_date())?
        } else {
            BirthDate::without_year(date)
        };

        let id = match self.id.map(field).map(str::trim) {
            None | Some("") => Uuid::new_v4(),
            Some(raw) => Uuid::parse_str(raw).map_err(|_| ParseError::InvalidId {
                line,
                value: raw.to_string(),
            })?,
        };

        let mut record = BirthdayRecord::with_id(id, field(self.name), birthday)
            .map_err(|_| ParseError::EmptyName { line })?;
        record.phone_number = optional(self.phone_number);
        record.email = optional(self.email);
        record.social_media_url = optional(self.social_media_url);
        record.notes = optional(self.notes);
        Ok(record)
    }
}
