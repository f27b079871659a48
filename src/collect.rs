use std::path::PathBuf;

use tracing::info;

use crate::{
    api::LocalSearch,
    config::Config,
    location::read_coordinate,
    store::{PlaceRecord, PlaceStore},
    Result,
};

/// Search radius in meters when none is configured.
pub const DEFAULT_RADIUS: u32 = 1000;

/// Result of one collector run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectOutcome {
    /// The search came back empty.
    NoResults,
    /// New rows were appended to the store at `path`.
    Appended { path: PathBuf, rows: Vec<String> },
    /// Every fetched place was already in the store.
    AllDuplicates,
}

/// Search for `keyword` around the saved location and append new places.
///
/// Fails before any request when no location has been saved yet.
pub async fn collect<A: LocalSearch>(
    api: &A,
    keyword: &str,
    config: &Config,
    radius: u32,
) -> Result<CollectOutcome> {
    let center = read_coordinate(&config.location_path())?;
    info!(
        keyword,
        lat = %center.lat,
        lng = %center.lng,
        radius,
        "searching places"
    );

    let documents = api.search_keyword(keyword, &center, radius).await?;
    if documents.is_empty() {
        return Ok(CollectOutcome::NoResults);
    }

    let rows = documents
        .iter()
        .map(|doc| PlaceRecord::from_document(doc).to_row())
        .collect::<Result<Vec<_>>>()?;
    let fetched = rows.len();

    let store = PlaceStore::new(config.store_path());
    let rows = store.append_unique(rows)?;
    info!(fetched, appended = rows.len(), "place search done");

    if rows.is_empty() {
        Ok(CollectOutcome::AllDuplicates)
    } else {
        Ok(CollectOutcome::Appended {
            path: store.path().to_path_buf(),
            rows,
        })
    }
}
