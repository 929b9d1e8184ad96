use serde::Deserialize;

use crate::config::StoreConfig;
use crate::error::FetchError;
use crate::model::{City, CityId};

#[derive(Debug, Clone, Deserialize)]
pub enum Event {
    Noop,

    /// The home screen mounted. Sending it again remounts and refetches.
    AppStarted {
        config: StoreConfig,
    },

    /// Pull-to-refresh.
    RefreshRequested,

    #[serde(skip)]
    CitiesFetched {
        request_seq: u64,
        result: Result<Vec<City>, FetchError>,
    },

    CardPressed {
        city_id: CityId,
    },

    /// Lifecycle callback from the sheet: the snap index it settled on,
    /// `-1` once hidden.
    SheetChanged {
        index: i32,
    },
    SheetDismissed,

    ThemeToggled,
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::AppStarted { .. } => "app_started",
            Self::RefreshRequested => "refresh_requested",
            Self::CitiesFetched { .. } => "cities_fetched",
            Self::CardPressed { .. } => "card_pressed",
            Self::SheetChanged { .. } => "sheet_changed",
            Self::SheetDismissed => "sheet_dismissed",
            Self::ThemeToggled => "theme_toggled",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::RefreshRequested
                | Self::CardPressed { .. }
                | Self::SheetDismissed
                | Self::ThemeToggled
        )
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::Noop
    }
}
