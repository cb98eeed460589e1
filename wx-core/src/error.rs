use thiserror::Error;

/// Coarse classification of a [`WxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad user input, detected before any network call.
    Validation,
    /// Network failure or unreadable response on either API call.
    Transport,
    /// Markup or text encoding could not be decoded into the expected shape.
    Decode,
    /// A decoded document is too short for the positional layout a view needs.
    Structural,
}

#[derive(Debug, Error)]
pub enum WxError {
    #[error("Zipcode is not five numbers: {0}")]
    InvalidZip(String),

    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} failed with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Unsupported character encoding '{0}' declared in document")]
    UnknownEncoding(String),

    #[error("Document is not valid {encoding} text")]
    Malformed { encoding: &'static str },

    #[error("Failed to parse {what} XML")]
    Xml {
        what: &'static str,
        #[source]
        source: quick_xml::de::DeError,
    },

    #[error("Unexpected latLonList '{0}', expected 'lat,lon'")]
    LatLon(String),

    #[error("Weather document is missing data: {0}")]
    Structural(String),
}

impl WxError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WxError::InvalidZip(_) => ErrorKind::Validation,
            WxError::Transport { .. } | WxError::HttpStatus { .. } => ErrorKind::Transport,
            WxError::UnknownEncoding(_)
            | WxError::Malformed { .. }
            | WxError::Xml { .. }
            | WxError::LatLon(_) => ErrorKind::Decode,
            WxError::Structural(_) => ErrorKind::Structural,
        }
    }
}

pub type Result<T, E = WxError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_zip_message_names_input() {
        let err = WxError::InvalidZip("9592".into());

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "Zipcode is not five numbers: 9592");
    }

    #[test]
    fn decode_variants_share_a_kind() {
        assert_eq!(WxError::LatLon("".into()).kind(), ErrorKind::Decode);
        assert_eq!(WxError::UnknownEncoding("x-klingon".into()).kind(), ErrorKind::Decode);
        assert_eq!(WxError::Malformed { encoding: "UTF-8" }.kind(), ErrorKind::Decode);
    }
}
