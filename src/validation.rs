use regex::Regex;
use url::Url;

use crate::errors::AppError;

/// Requirement messages surfaced when a field fails validation.
pub enum ValidationReq {}

impl ValidationReq {
    pub fn twitter_req() -> String {
        "Twitter handle may start with @ and contain 1 to 15 letters, digits or underscores"
            .to_string()
    }

    pub fn avatar_req() -> String {
        "Avatar must be an http or https URL".to_string()
    }
}

/// Empty handles pass; otherwise an optional leading @ followed by 1-15
/// word characters.
pub fn validate_twitter(handle: &str) -> Result<bool, AppError> {
    let re = Regex::new(r"^@?\w{1,15}$")?;
    Ok(handle.is_empty() || re.is_match(handle))
}

/// Empty avatars pass; otherwise the value must parse as an http(s) URL.
pub fn validate_avatar(avatar: &str) -> bool {
    if avatar.is_empty() {
        return true;
    }

    Url::parse(avatar)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twitter_handles() -> Result<(), AppError> {
        assert!(validate_twitter("")?);
        assert!(validate_twitter("ada_lovelace")?);
        assert!(validate_twitter("@ada_lovelace")?);

        assert!(!validate_twitter("@way_too_long_for_twitter")?);
        assert!(!validate_twitter("no spaces")?);
        assert!(!validate_twitter("@")?);
        Ok(())
    }

    #[test]
    fn avatar_urls() {
        assert!(validate_avatar(""));
        assert!(validate_avatar("https://placekitten.com/g/200/200"));
        assert!(validate_avatar("http://example.com/a.png"));

        assert!(!validate_avatar("ftp://example.com/a.png"));
        assert!(!validate_avatar("not a url"));
    }
}
