use article_errors::AppError;

const MAX_URL_LENGTH: usize = 2048;
const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

pub struct InputSanitizer;

impl InputSanitizer {
    /// Returns the trimmed address when it is a plausible `local@domain.tld`.
    pub fn validate_email(email: &str) -> Result<String, AppError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(AppError::InvalidEmail("email must not be empty".to_string()));
        }

        if email.len() > MAX_EMAIL_LENGTH {
            return Err(AppError::InvalidEmail("email is too long".to_string()));
        }

        let (local, domain) = email
            .split_once('@')
            .ok_or_else(|| AppError::InvalidEmail("missing @".to_string()))?;

        if local.is_empty() || local.len() > MAX_LOCAL_PART_LENGTH {
            return Err(AppError::InvalidEmail("invalid local part".to_string()));
        }

        if email.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(AppError::InvalidEmail(
                "email contains whitespace".to_string(),
            ));
        }

        if !Self::is_valid_domain(domain) {
            return Err(AppError::InvalidEmail(format!(
                "'{}' is not a valid domain",
                domain
            )));
        }

        Ok(email.to_string())
    }

    /// Returns the trimmed URL when it is an absolute http(s) URL with a host.
    pub fn validate_url(url: &str) -> Result<String, AppError> {
        let url = url.trim();

        if url.is_empty() {
            return Err(AppError::InvalidUrl("URL must not be empty".to_string()));
        }

        if url.len() > MAX_URL_LENGTH {
            return Err(AppError::InvalidUrl("URL is too long".to_string()));
        }

        let parsed = url::Url::parse(url)
            .map_err(|e| AppError::InvalidUrl(format!("malformed URL ({})", e)))?;

        let scheme = parsed.scheme().to_lowercase();
        if !ALLOWED_SCHEMES.contains(&scheme.as_str()) {
            return Err(AppError::InvalidUrl(
                "only http and https are allowed".to_string(),
            ));
        }

        match parsed.host_str() {
            Some(host) if !host.is_empty() => Ok(url.to_string()),
            _ => Err(AppError::InvalidUrl("URL must have a host".to_string())),
        }
    }

    fn is_valid_domain(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();
        labels.len() >= 2
            && labels.iter().all(|label| {
                !label.is_empty()
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label.chars().all(|c| c.is_alphanumeric() || c == '-')
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert_eq!(
            InputSanitizer::validate_email("  reader@example.com ").unwrap(),
            "reader@example.com"
        );
        assert!(InputSanitizer::validate_email("first.last+tag@mail.example.co.uk").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(InputSanitizer::validate_email("").is_err());
        assert!(InputSanitizer::validate_email("reader").is_err());
        assert!(InputSanitizer::validate_email("@example.com").is_err());
        assert!(InputSanitizer::validate_email("reader@localhost").is_err());
        assert!(InputSanitizer::validate_email("reader@exa mple.com").is_err());
        assert!(InputSanitizer::validate_email("reader@example..com").is_err());
        assert!(InputSanitizer::validate_email("reader@a@example.com").is_err());
    }

    #[test]
    fn test_valid_url() {
        assert_eq!(
            InputSanitizer::validate_url(" https://en.wikipedia.org/wiki/Rust ").unwrap(),
            "https://en.wikipedia.org/wiki/Rust"
        );
        assert!(InputSanitizer::validate_url("http://example.com/path?x=1").is_ok());
    }

    #[test]
    fn test_invalid_url() {
        assert!(InputSanitizer::validate_url("").is_err());
        assert!(InputSanitizer::validate_url("not-a-url").is_err());
        assert!(InputSanitizer::validate_url("ftp://example.com").is_err());
        assert!(InputSanitizer::validate_url("mailto:reader@example.com").is_err());
    }
}
