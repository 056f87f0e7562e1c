// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Non-fatal interaction failures.
///
/// None of these abort anything: the operation that hit them becomes a no-op
/// and the failure is only visible through state (fallback image, disabled
/// navigation buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fault {
    /// The image resource failed to load.
    LoadFailure,

    /// Next/previous requested with fewer than two navigable members.
    InvalidNavigation,

    /// The operation targets a source that is no longer registered.
    StaleReference,
}

impl Fault {
    /// Stable identifier used in diagnostics output.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Fault::LoadFailure => "load-failure",
            Fault::InvalidNavigation => "invalid-navigation",
            Fault::StaleReference => "stale-reference",
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::LoadFailure => write!(f, "Image failed to load"),
            Fault::InvalidNavigation => write!(f, "Not enough images to navigate"),
            Fault::StaleReference => write!(f, "Image is no longer registered"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_becomes_config_variant() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("zoom_step = [");
        let err: Error = parse.expect_err("invalid toml").into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn fault_codes_are_distinct() {
        let codes = [
            Fault::LoadFailure.code(),
            Fault::InvalidNavigation.code(),
            Fault::StaleReference.code(),
        ];
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }

    #[test]
    fn fault_display_is_human_readable() {
        assert_eq!(
            Fault::InvalidNavigation.to_string(),
            "Not enough images to navigate"
        );
    }
}
