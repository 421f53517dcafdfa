//! Alert banner models.

pub mod builder;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a site notification.
///
/// `None` is the resting state: no alert has been raised yet.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Error,
    Info,
    Success,
    #[default]
    None,
}

impl AlertKind {
    /// Whether an alert of this kind can be shown at all.
    pub fn is_displayable(self) -> bool {
        !matches!(self, AlertKind::None)
    }
}

/// Opaque reference to an icon symbol.
///
/// The stores never interpret the value; the presentation layer maps it to
/// whatever glyph set it renders with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Payload of a `set_alert` request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    #[serde(default)]
    pub icon: Option<Icon>,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, message)
    }
}

/// Observable state of the alert banner.
///
/// `id` changes every time an alert is revealed so readers can tell two
/// identical consecutive alerts apart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertState {
    pub id: Option<Uuid>,
    pub kind: AlertKind,
    pub message: String,
    pub visible: bool,
    pub icon: Option<Icon>,
}
