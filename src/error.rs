// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Media(MediaError),
}

/// Specific error types for media playback failures.
///
/// Mirrors the four native media-element error categories plus a
/// catch-all, so the presentation layer can show a specific,
/// user-friendly message for each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// Fetching was aborted (user agent stopped the download).
    Aborted,

    /// A network error interrupted the media download.
    Network(String),

    /// The media data is corrupted or the decoder failed.
    Decode(String),

    /// The source URL or its container/codec is not supported.
    SrcNotSupported,

    /// Generic error with raw message.
    Other(String),
}

impl MediaError {
    /// Returns the stable message key for this error type, used by the
    /// presentation layer to pick a localized "unavailable" message.
    pub fn ui_key(&self) -> &'static str {
        match self {
            MediaError::Aborted => "error-media-aborted",
            MediaError::Network(_) => "error-media-network",
            MediaError::Decode(_) => "error-media-decode",
            MediaError::SrcNotSupported => "error-media-src-not-supported",
            MediaError::Other(_) => "error-media-general",
        }
    }

    /// Builds a `MediaError` from a native media-element error code.
    ///
    /// Codes follow the platform convention: 1 = aborted, 2 = network,
    /// 3 = decode, 4 = source not supported. Unknown codes fall through
    /// to `Other` carrying the raw message.
    pub fn from_code(code: u32, message: &str) -> Self {
        match code {
            1 => MediaError::Aborted,
            2 => MediaError::Network(message.to_string()),
            3 => MediaError::Decode(message.to_string()),
            4 => MediaError::SrcNotSupported,
            _ => MediaError::Other(message.to_string()),
        }
    }

    /// Attempts to categorize a raw error message into a specific
    /// `MediaError` type. Used when the event adapter only has the
    /// message text, not the numeric code.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("abort") {
            return MediaError::Aborted;
        }

        if msg_lower.contains("network")
            || msg_lower.contains("connection")
            || msg_lower.contains("timed out")
            || msg_lower.contains("timeout")
        {
            return MediaError::Network(msg.to_string());
        }

        if msg_lower.contains("not supported")
            || msg_lower.contains("no supported source")
            || msg_lower.contains("format error")
        {
            return MediaError::SrcNotSupported;
        }

        if msg_lower.contains("decode")
            || msg_lower.contains("corrupt")
            || msg_lower.contains("demuxer")
            || msg_lower.contains("malformed")
        {
            return MediaError::Decode(msg.to_string());
        }

        MediaError::Other(msg.to_string())
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::Aborted => write!(f, "Media fetch aborted"),
            MediaError::Network(msg) => write!(f, "Network error: {}", msg),
            MediaError::Decode(msg) => write!(f, "Decode error: {}", msg),
            MediaError::SrcNotSupported => write!(f, "Media source not supported"),
            MediaError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
        }
    }
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

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
    fn media_error_from_code_maps_native_codes() {
        assert_eq!(MediaError::from_code(1, ""), MediaError::Aborted);
        assert!(matches!(
            MediaError::from_code(2, "fetch failed"),
            MediaError::Network(_)
        ));
        assert!(matches!(
            MediaError::from_code(3, "bad frame"),
            MediaError::Decode(_)
        ));
        assert_eq!(MediaError::from_code(4, ""), MediaError::SrcNotSupported);
        assert!(matches!(
            MediaError::from_code(99, "weird"),
            MediaError::Other(_)
        ));
    }

    #[test]
    fn media_error_from_message_network() {
        let err = MediaError::from_message("A network connection was lost");
        assert!(matches!(err, MediaError::Network(_)));
    }

    #[test]
    fn media_error_from_message_not_supported() {
        let err = MediaError::from_message("No supported source was found");
        assert!(matches!(err, MediaError::SrcNotSupported));
    }

    #[test]
    fn media_error_from_message_decode() {
        let err = MediaError::from_message("PIPELINE_ERROR_DECODE: corrupt stream");
        assert!(matches!(err, MediaError::Decode(_)));
    }

    #[test]
    fn media_error_from_message_abort() {
        let err = MediaError::from_message("The fetching process was aborted by the user");
        assert!(matches!(err, MediaError::Aborted));
    }

    #[test]
    fn media_error_ui_keys() {
        assert_eq!(MediaError::Aborted.ui_key(), "error-media-aborted");
        assert_eq!(
            MediaError::SrcNotSupported.ui_key(),
            "error-media-src-not-supported"
        );
        assert_eq!(
            MediaError::Other("x".into()).ui_key(),
            "error-media-general"
        );
    }

    #[test]
    fn media_error_display() {
        let err = MediaError::Network("dns failure".to_string());
        assert!(format!("{}", err).contains("dns failure"));
    }
}
