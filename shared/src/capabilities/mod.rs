pub mod http;

pub use self::http::{ValidatedUrl, ACCESS_KEY_HEADER};

// Crux's built-in Render capability covers everything the shell needs to
// redraw, so it is used as-is.
pub use crux_core::render::Render;
pub use crux_http::Http;

// The derived `WithContext` impl names `App`.
use crate::app::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
}
