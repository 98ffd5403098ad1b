//! Cabin image naming and public URLs.

use uuid::Uuid;

const FALLBACK_FILE_NAME: &str = "image";

/// Where cabin photos live: the public base URL of the blob store and the
/// bucket they are uploaded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLocation {
    base_url: String,
    bucket: String,
}

impl ImageLocation {
    #[must_use]
    pub fn new(base_url: impl Into<String>, bucket: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            bucket: bucket.into(),
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Derives a fresh object name from an uploaded file name.
    ///
    /// Directory components are dropped so the name never contains a path
    /// separator, and a random prefix keeps uploads of the same file from
    /// overwriting each other. Characters outside `[A-Za-z0-9._-]` become `_`,
    /// so the name is the same in the upload path and in [`Self::public_url`].
    #[must_use]
    pub fn object_name(file_name: &str) -> String {
        let base_name = file_name.rsplit(['/', '\\']).next().unwrap_or_default();

        let base_name: String = if base_name.is_empty() {
            FALLBACK_FILE_NAME.to_string()
        } else {
            base_name.chars().map(url_safe).collect()
        };

        format!("{}-{base_name}", Uuid::new_v4().simple())
    }

    /// Public URL of `object_name`, known before the object is uploaded.
    #[must_use]
    pub fn public_url(&self, object_name: &str) -> String {
        format!("{}/{}/{object_name}", self.base_url, self.bucket)
    }
}

fn url_safe(c: char) -> char {
    if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
        c
    } else {
        '_'
    }
}
