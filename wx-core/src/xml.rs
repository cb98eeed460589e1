//! Text decoding and deserialization of upstream XML payloads.
//!
//! NWS documents are not always UTF-8: the forecast feed declares
//! `encoding="ISO-8859-1"` in its XML declaration, so the byte payload is
//! transcoded to UTF-8 according to that declaration before parsing.

use encoding_rs::{Encoding, UTF_8};
use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{Result, WxError};

/// Decode `bytes` honouring a BOM or the declared encoding, then deserialize.
pub(crate) fn from_bytes<T: DeserializeOwned>(bytes: &[u8], what: &'static str) -> Result<T> {
    let text = decode_text(bytes)?;
    quick_xml::de::from_str(&text).map_err(|source| WxError::Xml { what, source })
}

fn decode_text(bytes: &[u8]) -> Result<String> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (declared_encoding(bytes)?.unwrap_or(UTF_8), bytes),
    };
    debug!("decoding {} bytes as {}", body.len(), encoding.name());

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
        .ok_or(WxError::Malformed { encoding: encoding.name() })
}

/// Read the `encoding` pseudo-attribute of a leading `<?xml ...?>` declaration.
fn declared_encoding(bytes: &[u8]) -> Result<Option<&'static Encoding>> {
    let Some(rest) = bytes.trim_ascii_start().strip_prefix(b"<?xml") else {
        return Ok(None);
    };
    let Some(end) = rest.windows(2).position(|w| w == b"?>") else {
        return Ok(None);
    };
    let decl = String::from_utf8_lossy(&rest[..end]);

    let Some(label) = pseudo_attribute(&decl, "encoding") else {
        return Ok(None);
    };
    Encoding::for_label(label.as_bytes())
        .map(Some)
        .ok_or_else(|| WxError::UnknownEncoding(label.to_string()))
}

fn pseudo_attribute<'a>(decl: &'a str, name: &str) -> Option<&'a str> {
    let start = decl.find(name)? + name.len();
    let value = decl[start..].trim_start().strip_prefix('=')?.trim_start();
    let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &value[1..];
    value.find(quote).map(|end| &value[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn defaults_to_utf8_without_declaration() {
        let text = decode_text("<a>Señora</a>".as_bytes()).unwrap();
        assert_eq!(text, "<a>Señora</a>");
    }

    #[test]
    fn honours_declared_latin1() {
        let bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><a>Se\xF1ora</a>";

        let text = decode_text(bytes).unwrap();

        assert!(text.ends_with("<a>Señora</a>"));
    }

    #[test]
    fn accepts_single_quoted_declaration() {
        let bytes = b"<?xml version='1.0' encoding='iso-8859-1' ?><a>\xB0</a>";
        assert!(decode_text(bytes).unwrap().contains('°'));
    }

    #[test]
    fn bom_wins_over_declaration() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><a>ñ</a>".as_bytes());

        assert!(decode_text(&bytes).unwrap().ends_with("<a>ñ</a>"));
    }

    #[test]
    fn unknown_label_is_decode_error() {
        let err = decode_text(b"<?xml version=\"1.0\" encoding=\"x-klingon\"?><a/>").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.to_string().contains("x-klingon"));
    }

    #[test]
    fn invalid_utf8_is_decode_error() {
        let err = decode_text(b"<?xml version=\"1.0\"?><a>\xF1</a>").unwrap_err();
        assert!(matches!(err, WxError::Malformed { encoding: "UTF-8" }));
    }

    #[test]
    fn broken_markup_is_decode_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Root {
            #[allow(dead_code)]
            a: String,
        }

        let err = from_bytes::<Root>(b"<root><a>x</b></root>", "test").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
