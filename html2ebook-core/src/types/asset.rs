//! Asset entry type: any non-HTML file bundled into the book

use serde::{Deserialize, Serialize};

/// A single non-HTML file (stylesheet, image, audio) registered in the book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    /// Path relative to the input root, separators normalized to `/`
    pub file_name: String,

    /// MIME type string; empty when the extension has no known mapping
    pub mime_type: String,

    /// Raw file bytes, registered verbatim with no validation
    #[serde(with = "base64_serde")]
    pub data: Vec<u8>,
}

impl Asset {
    /// Create a new asset entry
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }
}

/// Base64 serialization for binary data
pub(crate) mod base64_serde {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}
