use crate::{AlertBuilder, AlertKind, ModelError};

/// **VALUE**: Verifies that a complete builder produces the expected alert.
///
/// **WHY THIS MATTERS**: Pages raise alerts through the builder after quote
/// submission. A builder that drops the icon or message shows a blank banner.
///
/// **BUG THIS CATCHES**: Would catch fields not being carried into `Alert`.
#[test]
fn given_complete_builder_when_building_then_returns_alert() {
    // GIVEN: Builder with every field set
    let builder = AlertBuilder::default()
        .with_kind(AlertKind::Success)
        .with_message("Quote request sent")
        .with_icon("check-circle");

    // WHEN: Building
    let alert = builder.build().expect("valid alert should build");

    // THEN: All fields carried over
    assert_eq!(alert.kind, AlertKind::Success);
    assert_eq!(alert.message, "Quote request sent");
    assert_eq!(
        alert.icon.as_ref().map(|icon| icon.as_str()),
        Some("check-circle")
    );
}

/// **VALUE**: Verifies that the kind is mandatory.
///
/// **WHY THIS MATTERS**: Without a kind the banner cannot pick its styling.
///
/// **BUG THIS CATCHES**: Would catch the required-field check being removed.
#[test]
fn given_missing_kind_when_building_then_returns_validation_error() {
    // GIVEN: Builder without kind
    let builder = AlertBuilder::default().with_message("Something happened");

    // WHEN: Building
    let result = builder.build();

    // THEN: Validation error
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Alert kind is required");
        }
        Ok(alert) => panic!("Expected validation error, got {alert:?}"),
    }
}

/// **VALUE**: Verifies that displayable alerts need a message.
///
/// **WHY THIS MATTERS**: An error banner with whitespace only tells the visitor
/// nothing about what went wrong with their quote.
///
/// **BUG THIS CATCHES**: Would catch blank-message validation being bypassed.
#[test]
fn given_blank_message_for_error_kind_when_building_then_returns_validation_error() {
    let result = AlertBuilder::default()
        .with_kind(AlertKind::Error)
        .with_message("   ")
        .build();

    assert!(
        matches!(result, Err(ModelError::Validation { .. })),
        "Blank error message should be rejected"
    );
}

/// **VALUE**: Verifies that `AlertKind::None` may be built without a message.
///
/// **WHY THIS MATTERS**: Clearing the banner to its resting kind is a valid request.
///
/// **BUG THIS CATCHES**: Would catch message validation applied to every kind.
#[test]
fn given_none_kind_without_message_when_building_then_succeeds() {
    let alert = AlertBuilder::default()
        .with_kind(AlertKind::None)
        .build()
        .expect("none alert should build");

    assert_eq!(alert.kind, AlertKind::None);
    assert!(alert.message.is_empty());
    assert!(alert.icon.is_none());
}

/// **VALUE**: Verifies that an empty icon symbol is rejected.
///
/// **WHY THIS MATTERS**: An empty icon reference renders as a broken glyph.
///
/// **BUG THIS CATCHES**: Would catch the icon check being dropped.
#[test]
fn given_empty_icon_when_building_then_returns_validation_error() {
    let result = AlertBuilder::default()
        .with_kind(AlertKind::Info)
        .with_message("Office closed Monday")
        .with_icon("")
        .build();

    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Icon symbol cannot be empty");
        }
        Ok(alert) => panic!("Expected validation error, got {alert:?}"),
    }
}
