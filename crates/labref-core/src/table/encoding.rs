use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Candidate text encodings for CSV input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    /// UTF-8, with an optional byte-order mark.
    #[serde(rename = "utf-8", alias = "utf8", alias = "utf-8-sig")]
    Utf8,
    #[serde(rename = "latin1", alias = "latin-1")]
    Latin1,
    #[serde(rename = "cp1252", alias = "windows-1252")]
    Windows1252,
    #[serde(rename = "iso-8859-1")]
    Iso8859_1,
}

/// Fallback order used when a layout does not name its own.
pub const DEFAULT_ENCODINGS: &[Encoding] = &[
    Encoding::Utf8,
    Encoding::Latin1,
    Encoding::Windows1252,
    Encoding::Iso8859_1,
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl Encoding {
    pub fn label(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "latin1",
            Encoding::Windows1252 => "cp1252",
            Encoding::Iso8859_1 => "iso-8859-1",
        }
    }

    /// Decode `bytes` strictly. Returns `None` when the bytes are not valid
    /// in this encoding; nothing is replaced.
    pub fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        match self {
            Encoding::Utf8 => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(body)
            }
            Encoding::Windows1252 => encoding_rs::WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes),
            // ISO-8859-1 maps every byte to the code point of the same value.
            Encoding::Latin1 | Encoding::Iso8859_1 => {
                Some(Cow::Owned(bytes.iter().map(|&b| b as char).collect()))
            }
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
