//! Typed access to the Kakao Local search endpoints.

use reqwest::{header::AUTHORIZATION, Client};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::{config::Config, location::Coordinate, Result};

const ADDRESS_PATH: &str = "/v2/local/search/address.json";
const KEYWORD_PATH: &str = "/v2/local/search/keyword.json";

/// A latitude or longitude exactly as the API spelled it.
///
/// The API sends decimal strings, but plain JSON numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Degrees(String);

impl Degrees {
    /// Wrap an already formatted decimal.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The decimal text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Degrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Degrees {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Degrees(text),
            Raw::Number(number) => Degrees(number.to_string()),
        })
    }
}

/// One hit from the address (geocoding) endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressDocument {
    /// Longitude
    pub x: Degrees,
    /// Latitude
    pub y: Degrees,
}

/// One hit from the keyword (places) endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDocument {
    pub place_name: String,
    #[serde(default)]
    pub road_address_name: Option<String>,
    #[serde(default)]
    pub address_name: String,
    /// Longitude
    pub x: Degrees,
    /// Latitude
    pub y: Degrees,
}

impl PlaceDocument {
    /// The road-form address when the API supplied one, else the lot address.
    pub fn preferred_address(&self) -> &str {
        match self.road_address_name.as_deref() {
            Some(road) if !road.is_empty() => road,
            _ => &self.address_name,
        }
    }
}

/// The two searches the programs need.
///
/// A non-success status yields `Ok` with an empty list; only transport
/// failures come back as errors.
#[allow(async_fn_in_trait)]
pub trait LocalSearch {
    /// Geocode a free-text address.
    async fn search_address(&self, query: &str)
        -> Result<Vec<AddressDocument>>;

    /// Find places matching `query` within `radius` meters of `center`.
    async fn search_keyword(
        &self,
        query: &str,
        center: &Coordinate,
        radius: u32,
    ) -> Result<Vec<PlaceDocument>>;
}

/// HTTP client for the Kakao Local API.
pub struct KakaoClient {
    client: Client,
    base: Url,
    api_key: String,
}

impl KakaoClient {
    /// Client for the API root and key in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_client(config, Client::new())
    }

    fn with_client(config: &Config, client: Client) -> Result<Self> {
        if config.api_key.is_empty() {
            warn!("API_KEY is not set, the search API will reject requests");
        }
        Ok(Self {
            client,
            base: Url::parse(&config.api_base)?,
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base.join(path)?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }

    async fn fetch_documents<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<Vec<T>> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("KakaoAK {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "search API returned a non-success status");
            return Ok(vec![]);
        }

        let body = response.text().await?;
        Ok(parse_documents(&body))
    }
}

impl LocalSearch for KakaoClient {
    async fn search_address(
        &self,
        query: &str,
    ) -> Result<Vec<AddressDocument>> {
        let url = self.endpoint(ADDRESS_PATH, &[("query", query)])?;
        self.fetch_documents(url).await
    }

    async fn search_keyword(
        &self,
        query: &str,
        center: &Coordinate,
        radius: u32,
    ) -> Result<Vec<PlaceDocument>> {
        let radius = radius.to_string();
        let url = self.endpoint(
            KEYWORD_PATH,
            &[
                ("query", query),
                ("x", center.lng.as_str()),
                ("y", center.lat.as_str()),
                ("radius", &radius),
            ],
        )?;
        self.fetch_documents(url).await
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    documents: Vec<serde_json::Value>,
}

/// Pull the `documents` list out of a response body.
///
/// A body that is not the expected envelope counts as no results. Items
/// missing a required field are dropped one by one.
fn parse_documents<T: DeserializeOwned>(body: &str) -> Vec<T> {
    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!("unexpected response body from search API: {e}");
            return vec![];
        }
    };

    envelope
        .documents
        .into_iter()
        .filter_map(|doc| match serde_json::from_value(doc) {
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!("skipping incomplete result item: {e}");
                None
            }
        })
        .collect()
}
