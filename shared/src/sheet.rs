//! Presentation state of the city detail sheet.
//!
//! The core asks the shell to present the sheet; the shell reports back the
//! snap index it settled on (`-1` when hidden) and user dismissals. The
//! transitions are:
//!
//! ```text
//! Closed -> Opening -> Open -> Closing -> Closed
//! ```

use serde::{Deserialize, Serialize};

/// Fraction of the screen height the sheet occupies once open.
pub const SHEET_HEIGHT_FRACTION: f32 = 0.5;

/// Snap index the shell reports when the sheet is fully hidden.
pub const CLOSED_INDEX: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl SheetState {
    /// Imperative "present" request. Already visible sheets stay as they are
    /// and just pick up the new content.
    #[must_use]
    pub const fn present(self) -> Self {
        match self {
            Self::Closed | Self::Closing => Self::Opening,
            Self::Opening | Self::Open => self,
        }
    }

    /// User swipe-down or tap outside.
    #[must_use]
    pub const fn dismiss(self) -> Self {
        match self {
            Self::Opening | Self::Open => Self::Closing,
            Self::Closing | Self::Closed => self,
        }
    }

    #[must_use]
    pub const fn on_index_changed(self, index: i32) -> Self {
        if index > CLOSED_INDEX {
            Self::Open
        } else {
            Self::Closed
        }
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Closed)
    }
}
