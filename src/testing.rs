//! In-memory stand-in for the search API.

use std::cell::Cell;

use crate::{
    api::{AddressDocument, Degrees, LocalSearch, PlaceDocument},
    location::Coordinate,
    Error, Result,
};

/// Canned results plus a count of calls made.
#[derive(Default)]
pub struct FakeSearch {
    addresses: Vec<AddressDocument>,
    places: Vec<PlaceDocument>,
    offline: bool,
    calls: Cell<usize>,
    last_radius: Cell<Option<u32>>,
}

impl FakeSearch {
    /// Address hits given as `(x, y)`.
    pub fn with_addresses(hits: &[(&str, &str)]) -> Self {
        Self {
            addresses: hits
                .iter()
                .map(|(x, y)| AddressDocument {
                    x: Degrees::new(*x),
                    y: Degrees::new(*y),
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn with_places(places: Vec<PlaceDocument>) -> Self {
        Self {
            places,
            ..Default::default()
        }
    }

    /// Every call fails as if the connection dropped.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_radius(&self) -> Option<u32> {
        self.last_radius.get()
    }

    fn hit(&self) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        if self.offline {
            return Err(Error::Io(std::io::Error::other("connection reset")));
        }
        Ok(())
    }
}

/// A keyword hit with the given fields.
pub fn place(
    name: &str,
    road: Option<&str>,
    address: &str,
    lat: &str,
    lng: &str,
) -> PlaceDocument {
    PlaceDocument {
        place_name: name.to_string(),
        road_address_name: road.map(str::to_string),
        address_name: address.to_string(),
        x: Degrees::new(lng),
        y: Degrees::new(lat),
    }
}

impl LocalSearch for FakeSearch {
    async fn search_address(
        &self,
        _query: &str,
    ) -> Result<Vec<AddressDocument>> {
        self.hit()?;
        Ok(self.addresses.clone())
    }

    async fn search_keyword(
        &self,
        _query: &str,
        _center: &Coordinate,
        radius: u32,
    ) -> Result<Vec<PlaceDocument>> {
        self.hit()?;
        self.last_radius.set(Some(radius));
        Ok(self.places.clone())
    }
}
