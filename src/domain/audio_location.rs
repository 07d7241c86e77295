use std::fmt;

/// Storage coordinates of an uploaded recording: the bucket and the object
/// path inside it, taken as the last two path segments of the raw URL the
/// trigger event carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioLocation {
    bucket: String,
    object_path: String,
}

impl AudioLocation {
    pub fn parse(raw_url: &str) -> Result<Self, AudioLocationError> {
        let segments: Vec<&str> = raw_url.split('/').filter(|s| !s.is_empty()).collect();

        if segments.len() < 2 {
            return Err(AudioLocationError::TooFewSegments(raw_url.to_string()));
        }

        let object_path = segments[segments.len() - 1].to_string();
        let bucket = segments[segments.len() - 2].to_string();

        Ok(Self {
            bucket,
            object_path,
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn object_path(&self) -> &str {
        &self.object_path
    }

    /// Bucket-qualified key, suitable for a store rooted above the buckets.
    pub fn as_key(&self) -> String {
        format!("{}/{}", self.bucket, self.object_path)
    }
}

impl fmt::Display for AudioLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.object_path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AudioLocationError {
    #[error("expected at least bucket and object path segments: {0}")]
    TooFewSegments(String),
}
