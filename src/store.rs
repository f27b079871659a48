//! The append-only CSV of collected places.
//!
//! Deduplication compares whole rendered rows as text. Two rows that name
//! the same place but differ in any character are both kept.

use std::{
    collections::HashSet,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    api::{Degrees, PlaceDocument},
    Result,
};

/// Column names of every store file: name, address, latitude, longitude.
pub const HEADER: [&str; 4] = ["이름", "주소", "위도", "경도"];

/// One place as it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceRecord {
    pub name: String,
    pub address: String,
    pub lat: Degrees,
    pub lng: Degrees,
}

impl PlaceRecord {
    /// Build a record, preferring the road-form address.
    pub fn from_document(doc: &PlaceDocument) -> Self {
        Self {
            name: doc.place_name.clone(),
            address: doc.preferred_address().to_string(),
            lat: doc.y.clone(),
            lng: doc.x.clone(),
        }
    }

    /// Render as `"name","address","lat","lng"` with no line terminator.
    ///
    /// Values are wrapped in quotes verbatim, so a `"` inside a value is not
    /// escaped. Line breaks inside a value become spaces, which keeps every
    /// record on exactly one line of the store.
    pub fn to_row(&self) -> Result<String> {
        let fields = [
            self.name.as_str(),
            self.address.as_str(),
            self.lat.as_str(),
            self.lng.as_str(),
        ]
        .map(|value| format!("\"{}\"", single_line(value)));
        render(fields)
    }
}

/// Join fields with commas exactly as given.
fn render<I, T>(fields: I) -> Result<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(vec![]);
    writer.write_record(fields)?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let line = String::from_utf8(bytes).map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;
    Ok(line.trim_end_matches('\n').to_string())
}

fn single_line(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// A store file on disk.
pub struct PlaceStore {
    path: PathBuf,
}

impl PlaceStore {
    /// Open the store at `path`; the file itself need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the CSV file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Every row already in the file, header excluded.
    pub fn existing_rows(&self) -> Result<HashSet<String>> {
        Ok(self
            .load()?
            .map(|text| rows_of(&text).map(str::to_string).collect())
            .unwrap_or_default())
    }

    /// Append the rows not already present and return them.
    ///
    /// Repeats within `rows` are written once. The header goes in only when
    /// the file is new or empty, and nothing is touched when every row is
    /// a duplicate.
    pub fn append_unique(
        &self,
        rows: impl IntoIterator<Item = String>,
    ) -> Result<Vec<String>> {
        let existing = self.load()?;
        let mut seen: HashSet<String> = existing
            .as_deref()
            .map(|text| rows_of(text).map(str::to_string).collect())
            .unwrap_or_default();

        let unique: Vec<String> = rows
            .into_iter()
            .filter(|row| seen.insert(row.clone()))
            .collect();
        if unique.is_empty() {
            return Ok(unique);
        }

        let mut out = String::new();
        match existing.as_deref() {
            None | Some("") => {
                out.push_str(&render(HEADER)?);
                out.push('\n');
            }
            Some(text) if !text.ends_with('\n') => out.push('\n'),
            Some(_) => {}
        }
        for row in &unique {
            out.push_str(row);
            out.push('\n');
        }

        if let Some(dir) =
            self.path.parent().filter(|d| !d.as_os_str().is_empty())
        {
            fs::create_dir_all(dir)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(out.as_bytes())?;
        debug!(
            path = %self.path.display(),
            rows = unique.len(),
            "appended rows"
        );

        Ok(unique)
    }
}

fn rows_of(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .skip(1)
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
}
