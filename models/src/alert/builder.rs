use crate::error::model_error::ModelError;
use crate::{Alert, AlertKind, ErrorLocation, Icon};

use std::panic::Location;

/// Builder for creating validated [`Alert`] payloads.
///
/// A displayable alert needs a non-blank message; `AlertKind::None` may carry
/// an empty one.
#[derive(Debug, Default)]
pub struct AlertBuilder {
    kind: Option<AlertKind>,
    message: Option<String>,
    icon: Option<Icon>,
}

impl AlertBuilder {
    pub fn with_kind(mut self, kind: AlertKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(Icon::new(icon));
        self
    }

    /// Build the Alert with validation.
    #[track_caller]
    pub fn build(self) -> Result<Alert, ModelError> {
        let kind = self.kind.ok_or_else(|| ModelError::Validation {
            message: String::from("Alert kind is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let message = self.message.unwrap_or_default();

        if kind.is_displayable() && message.trim().is_empty() {
            return Err(ModelError::Validation {
                message: format!("{kind:?} alert requires a message"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.icon.as_ref().is_some_and(|icon| icon.as_str().is_empty()) {
            return Err(ModelError::Validation {
                message: String::from("Icon symbol cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Alert {
            kind,
            message,
            icon: self.icon,
        })
    }
}
