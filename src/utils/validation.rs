use crate::utils::error::{KeggError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(KeggError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(KeggError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(KeggError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(KeggError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(KeggError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(KeggError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_endpoint", "https://rest.kegg.jp").is_ok());
        assert!(validate_url("api_endpoint", "http://localhost:8080").is_ok());
        assert!(validate_url("api_endpoint", "").is_err());
        assert!(validate_url("api_endpoint", "not-a-url").is_err());
        assert!(validate_url("api_endpoint", "ftp://rest.kegg.jp").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("base_path", "../databases/kegg/").is_ok());
        assert!(validate_path("base_path", "").is_err());
        assert!(validate_path("base_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("concurrent_requests", 5, 1).is_ok());
        assert!(validate_positive_number("concurrent_requests", 0, 1).is_err());
    }
}
