use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    api::{Degrees, LocalSearch},
    Error, Result,
};

/// The single saved position the place search is centered on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: Degrees,
    pub lng: Degrees,
}

impl Coordinate {
    /// Coordinate from latitude and longitude text.
    pub fn new(lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self {
            lat: Degrees::new(lat),
            lng: Degrees::new(lng),
        }
    }
}

/// Result of one resolver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateOutcome {
    /// The first hit was written to the location file.
    Saved(Coordinate),
    /// The search came back empty.
    NoResults,
}

/// Read the coordinate written by an earlier resolver run.
pub fn read_coordinate(path: &Path) -> Result<Coordinate> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::MissingLocation(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&text)?)
}

/// Overwrite the coordinate file, creating its directory if needed.
pub fn write_coordinate(path: &Path, coordinate: &Coordinate) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, serde_json::to_string(coordinate)?)?;
    debug!(path = %path.display(), "wrote coordinate");
    Ok(())
}

/// Geocode `query` and save the first hit to `path`.
///
/// Nothing is written when the search comes back empty.
pub async fn resolve<A: LocalSearch>(
    api: &A,
    query: &str,
    path: &Path,
) -> Result<LocateOutcome> {
    let documents = api.search_address(query).await?;
    let Some(first) = documents.into_iter().next() else {
        info!(query, "address search returned no results");
        return Ok(LocateOutcome::NoResults);
    };

    let coordinate = Coordinate {
        lat: first.y,
        lng: first.x,
    };
    write_coordinate(path, &coordinate)?;
    info!(lat = %coordinate.lat, lng = %coordinate.lng, "saved location");
    Ok(LocateOutcome::Saved(coordinate))
}
