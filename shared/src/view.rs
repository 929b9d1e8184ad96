use serde::{Deserialize, Serialize};

use crate::model::{City, Model};
use crate::sheet::{SheetState, SHEET_HEIGHT_FRACTION};
use crate::theme::Theme;

pub const APP_TITLE: &str = "Maravillas";
pub const EMPTY_LIST_MESSAGE: &str = "No cities found";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CardView {
    /// Stable list key.
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl From<&City> for CardView {
    fn from(city: &City) -> Self {
        Self {
            id: city.id.0.clone(),
            title: city.title.clone(),
            description: city.description.clone(),
            image_url: city.image_url.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DetailSheetView {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub height_fraction: f32,
}

impl From<&City> for DetailSheetView {
    fn from(city: &City) -> Self {
        Self {
            title: city.title.clone(),
            description: city.description.clone(),
            image_url: city.image_url.clone(),
            height_fraction: SHEET_HEIGHT_FRACTION,
        }
    }
}

/// What fills the screen body, in strict precedence order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScreenView {
    Loading,
    Error {
        message: String,
    },
    List {
        cards: Vec<CardView>,
        is_refreshing: bool,
        empty_message: Option<String>,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub title: String,
    pub theme: Theme,
    pub theme_icon: String,
    pub screen: ScreenView,
    pub detail: Option<DetailSheetView>,
    pub sheet: SheetState,
}

impl ViewModel {
    pub fn from_model(model: &Model) -> Self {
        Self {
            title: APP_TITLE.to_string(),
            theme: model.theme_mode.theme(),
            theme_icon: model.theme_mode.status_icon().to_string(),
            screen: Self::screen(model),
            detail: model.selected_city.as_ref().map(DetailSheetView::from),
            sheet: model.sheet,
        }
    }

    fn screen(model: &Model) -> ScreenView {
        if model.is_loading {
            return ScreenView::Loading;
        }

        if let Some(message) = &model.error {
            return ScreenView::Error {
                message: message.clone(),
            };
        }

        ScreenView::List {
            cards: model.cities.iter().map(CardView::from).collect(),
            is_refreshing: model.is_refreshing,
            empty_message: model
                .cities
                .is_empty()
                .then(|| EMPTY_LIST_MESSAGE.to_string()),
        }
    }

    /// Cards currently on screen; empty for the loading and error screens.
    pub fn cards(&self) -> &[CardView] {
        match &self.screen {
            ScreenView::List { cards, .. } => cards,
            ScreenView::Loading | ScreenView::Error { .. } => &[],
        }
    }
}
