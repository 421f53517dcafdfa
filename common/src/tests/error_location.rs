use crate::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every storage, store and config error in the workspace
/// carries an `ErrorLocation`. If capture is wrong, persistence failures logged by
/// the form stores point nowhere useful.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` stops being
/// propagated or if line/column extraction breaks.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN: A location captured on a known line
    let expected_line = line!() + 1;
    let location = ErrorLocation::from(Location::caller());

    // THEN: File, line and column are populated
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path, got {}",
        location.file
    );
    assert_eq!(location.line, expected_line, "Should capture correct line");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the `[file:line:column]` display format.
///
/// **WHY THIS MATTERS**: Error messages embed the location through `Display`.
/// Log lines are grepped by this format when diagnosing storage failures.
///
/// **BUG THIS CATCHES**: Would catch if brackets or separators change.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A hand-built location
    let location = ErrorLocation {
        file: "src/store/persisted.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting as string
    let formatted = location.to_string();

    // THEN: Exact bracketed format
    assert_eq!(formatted, "[src/store/persisted.rs:42:7]");
}

/// **VALUE**: Verifies that `#[track_caller]` helpers report their call sites.
///
/// **WHY THIS MATTERS**: Error constructors across the workspace are wrapped in
/// `#[track_caller]` helpers. Without propagation every error would report the
/// helper's own line.
///
/// **BUG THIS CATCHES**: Would catch a removed `#[track_caller]` attribute.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    // GIVEN: A helper function that captures location
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    // WHEN: Capturing location from two consecutive lines
    let first = capture_location();
    let second = capture_location();

    // THEN: Same file, sequential lines
    assert_eq!(first.file, second.file, "Should have same file");
    assert_eq!(first.line + 1, second.line, "Lines should be sequential");
}

/// **VALUE**: Verifies that `ErrorLocation` serializes with named fields.
///
/// **WHY THIS MATTERS**: Site errors cross the presentation boundary as JSON and
/// embed their location.
///
/// **BUG THIS CATCHES**: Would catch a dropped `Serialize` derive or renamed fields.
#[test]
fn given_error_location_when_serialized_then_contains_named_fields() {
    let location = ErrorLocation {
        file: "lib.rs",
        line: 3,
        column: 9,
    };

    let json = serde_json::to_value(location).expect("location should serialize");

    assert_eq!(json["file"], "lib.rs");
    assert_eq!(json["line"], 3);
    assert_eq!(json["column"], 9);
}
