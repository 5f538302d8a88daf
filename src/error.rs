use thiserror::Error;

/// A single candidate image could not be fetched or decoded.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{url} is not an image (content-type {content_type})")]
    NotAnImage { url: String, content_type: String },

    #[error("unsupported URL scheme in {url}")]
    UnsupportedScheme { url: String },

    #[error("reading {path} failed: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuantizeError {
    #[error("image has no opaque pixels at the sampling stride")]
    NoOpaquePixels,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("malformed hex color '{0}'")]
pub struct HexParseError(pub String);

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Rejects `value` below `min` or above `max`.
pub(crate) fn validate_range(field: &str, value: usize, min: usize, max: usize) -> Result<()> {
    if value < min || value > max {
        return Err(ExtractError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: format!("must be between {min} and {max}"),
        });
    }
    Ok(())
}

pub(crate) fn validate_positive(field: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(ExtractError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}
