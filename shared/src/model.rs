use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::CityRecord;
use crate::config::StoreConfig;
use crate::sheet::SheetState;
use crate::theme::ThemeMode;

pub const CITY_ID_HEX_LEN: usize = 16;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityId(pub String);

impl CityId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Content-derived id for records the store sends without one.
    fn from_content(title: &str, description: &str, image_url: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        for part in [title, description, image_url] {
            hasher.update(&(part.len() as u64).to_le_bytes());
            hasher.update(part.as_bytes());
        }
        let hash = hasher.finalize();
        Self(hash.to_hex()[..CITY_ID_HEX_LEN].to_string())
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl City {
    /// Turns wire records into cities, keeping response order.
    ///
    /// Ids are unique within the returned list: a source id is kept as-is,
    /// a missing one is derived from the content, and repeats get a `-<n>`
    /// suffix.
    pub fn ingest(records: Vec<CityRecord>) -> Vec<City> {
        let mut seen: HashMap<String, usize> = HashMap::with_capacity(records.len());
        let mut cities = Vec::with_capacity(records.len());

        for record in records {
            let base = match record.id.as_deref().map(str::trim) {
                Some(id) if !id.is_empty() => CityId::new(id),
                _ => CityId::from_content(&record.title, &record.description, &record.image_url),
            };

            let mut id = base.0.clone();
            let mut occurrence = seen.get(&base.0).copied().unwrap_or(0);
            while seen.contains_key(&id) {
                occurrence += 1;
                id = format!("{}-{occurrence}", base.0);
            }
            seen.insert(base.0.clone(), occurrence);
            seen.entry(id.clone()).or_insert(0);

            cities.push(City {
                id: CityId(id),
                title: record.title,
                description: record.description,
                image_url: record.image_url,
            });
        }

        cities
    }
}

/// Monotonic tag attached to every fetch so a late response from an older
/// request cannot overwrite a newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    #[must_use]
    pub const fn latest(&self) -> u64 {
        self.latest
    }

    #[must_use]
    pub const fn is_current(&self, seq: u64) -> bool {
        seq == self.latest && seq != 0
    }
}

#[derive(Debug)]
pub struct Model {
    pub config: Option<StoreConfig>,

    pub cities: Vec<City>,
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub error: Option<String>,

    pub theme_mode: ThemeMode,

    // Detail sheet
    pub selected_city: Option<City>,
    pub sheet: SheetState,

    pub requests: RequestSequence,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    pub fn new() -> Self {
        Self {
            config: None,
            cities: Vec::new(),
            // The first fetch starts as soon as the screen mounts.
            is_loading: true,
            is_refreshing: false,
            error: None,
            theme_mode: ThemeMode::default(),
            selected_city: None,
            sheet: SheetState::default(),
            requests: RequestSequence::default(),
        }
    }

    pub fn city(&self, id: &CityId) -> Option<&City> {
        self.cities.iter().find(|c| &c.id == id)
    }
}
