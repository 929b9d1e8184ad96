use tracing::{debug, info, warn};

use crate::api;
use crate::capabilities::Capabilities;
use crate::error::FetchError;
use crate::event::Event;
use crate::model::{City, CityId, Model};
use crate::sheet::CLOSED_INDEX;
use crate::view::ViewModel;

#[derive(Default)]
pub struct App;

impl App {
    /// Tags a new request and hands it to the shell. Returns `false` when
    /// there is nothing to fetch from yet.
    fn start_fetch(model: &mut Model, caps: &Capabilities) -> bool {
        let Some(config) = &model.config else {
            warn!("fetch requested before the store was configured");
            return false;
        };

        let request_seq = model.requests.issue();
        api::fetch_cities(caps, config, request_seq);
        true
    }

    fn handle_fetch_result(
        request_seq: u64,
        result: Result<Vec<City>, FetchError>,
        model: &mut Model,
    ) -> bool {
        if !model.requests.is_current(request_seq) {
            debug!(
                request_seq,
                latest = model.requests.latest(),
                "discarding stale city response"
            );
            return false;
        }

        match result {
            Ok(cities) => {
                info!(count = cities.len(), "cities loaded");
                model.error = None;
                model.cities = cities;
            }
            Err(e) => {
                model.error = Some(e.user_message());
            }
        }

        model.is_loading = false;
        model.is_refreshing = false;
        true
    }

    fn select_city(city_id: &CityId, model: &mut Model) -> bool {
        let Some(city) = model.city(city_id).cloned() else {
            warn!(%city_id, "pressed card is not in the current list");
            return false;
        };

        model.selected_city = Some(city);
        model.sheet = model.sheet.present();
        true
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        let event_name = event.name();
        debug!(event = event_name, "update");

        if event.is_user_initiated() {
            info!(event = event_name, "user action");
        }

        let changed = match event {
            Event::Noop => false,

            Event::AppStarted { config } => {
                model.config = Some(config);
                model.is_loading = true;
                Self::start_fetch(model, caps);
                true
            }

            Event::RefreshRequested => {
                if Self::start_fetch(model, caps) {
                    model.is_refreshing = true;
                    true
                } else {
                    false
                }
            }

            Event::CitiesFetched {
                request_seq,
                result,
            } => Self::handle_fetch_result(request_seq, result, model),

            Event::CardPressed { city_id } => Self::select_city(&city_id, model),

            Event::SheetChanged { index } => {
                debug!(index, "sheet changed");
                if index > CLOSED_INDEX && model.selected_city.is_none() {
                    warn!(index, "sheet reported open with no city selected");
                    false
                } else {
                    model.sheet = model.sheet.on_index_changed(index);
                    if !model.sheet.is_visible() {
                        // Content stays while the sheet animates out; drop it once hidden.
                        model.selected_city = None;
                    }
                    true
                }
            }

            Event::SheetDismissed => {
                model.sheet = model.sheet.dismiss();
                true
            }

            Event::ThemeToggled => {
                model.theme_mode = model.theme_mode.toggled();
                true
            }
        };

        if changed {
            caps.render.render();
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel::from_model(model)
    }
}
