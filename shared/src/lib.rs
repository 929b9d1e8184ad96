// lib.rs - Maravillas shared core

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod app;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod event;
pub mod model;
pub mod sheet;
pub mod theme;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::StoreConfig;
pub use crux_core::{render::Render, App as CruxApp};
pub use error::{ConfigError, FetchError, FETCH_FALLBACK_MESSAGE};
pub use event::Event;
pub use model::{City, CityId, Model};
pub use sheet::SheetState;
pub use theme::{Theme, ThemeMode, DARK_THEME, LIGHT_THEME};
pub use view::{CardView, DetailSheetView, ScreenView, ViewModel, EMPTY_LIST_MESSAGE};
