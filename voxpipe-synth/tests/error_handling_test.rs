//! Tests for error handling in voxpipe-synth
//! Tests for display formatting and error conversions

use voxpipe_synth::error::SpeechError;

#[test]
fn test_error_display_prefixes() {
    let cases = vec![
        (
            SpeechError::Parse("bad token".to_string()),
            "Parse error: bad token",
        ),
        (
            SpeechError::InvalidField("speed must be a number".to_string()),
            "Invalid field: speed must be a number",
        ),
        (
            SpeechError::Provider("endpoint offline".to_string()),
            "Provider error: endpoint offline",
        ),
        (
            SpeechError::Config("Timeout must be greater than 0".to_string()),
            "Configuration error: Timeout must be greater than 0",
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(format!("{}", error), expected);
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error: SpeechError = io_error.into();

    match error {
        SpeechError::Io(_) => {}
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_io_error_display() {
    let error = SpeechError::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "missing",
    ));
    let text = format!("{}", error);

    assert!(text.starts_with("IO error:"));
    assert!(text.contains("missing"));
}

#[test]
fn test_error_messages_are_single_line() {
    // The binary prints errors verbatim after an "Error: " prefix, so
    // every message must stay on one line
    let errors = vec![
        SpeechError::Parse("expected value at line 1 column 1".to_string()),
        SpeechError::InvalidField("text must be a string (got a number)".to_string()),
        SpeechError::Provider("TTS endpoint error (503): unavailable".to_string()),
        SpeechError::Config("Host TLD must be alphabetic".to_string()),
        SpeechError::Io(std::io::Error::new(std::io::ErrorKind::Other, "io failure")),
    ];

    for error in errors {
        let text = format!("{}", error);
        assert!(!text.is_empty());
        assert!(!text.contains('\n'));
    }
}
