//! Absolute URL validation.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("URL scheme is not followed by '//'")]
    MissingAuthority,
}

/// Parses `input` as an absolute URL with a non-empty scheme and host.
///
/// Surrounding whitespace is ignored. Relative references, bare paths and
/// host-less URLs such as `mailto:` are rejected, as are inputs whose scheme
/// is not directly followed by `//` (`https:example.com`, `http:/example.com`).
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input,
/// [`UrlValidationError::InvalidFormat`] when parsing fails,
/// [`UrlValidationError::MissingAuthority`] when the scheme is not followed
/// by `//`, and [`UrlValidationError::MissingHost`] when the URL has no host.
pub fn parse_absolute_url(input: &str) -> Result<Url, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(UrlValidationError::MissingHost),
    }

    if !has_authority(trimmed, url.scheme()) {
        return Err(UrlValidationError::MissingAuthority);
    }

    Ok(url)
}

/// Whether `input` spells `<scheme>://` literally. The parsed scheme is
/// lowercase, the input may not be.
fn has_authority(input: &str, scheme: &str) -> bool {
    input
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        && input
            .get(scheme.len()..)
            .is_some_and(|rest| rest.starts_with("://"))
}

/// Returns the string to store and redirect to for a validated URL.
///
/// The submitted spelling is kept when it is already plain printable ASCII;
/// anything else is replaced by the canonical percent-encoded form so it is
/// always a valid `Location` header value.
pub fn redirect_target(input: &str, url: &Url) -> String {
    let trimmed = input.trim();
    if trimmed.bytes().all(|b| b.is_ascii_graphic()) {
        trimmed.to_string()
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(parse_absolute_url("https://example.com").is_ok());
        assert!(parse_absolute_url("http://example.com/path?q=1#frag").is_ok());
    }

    #[test]
    fn test_accepts_other_schemes_with_host() {
        assert!(parse_absolute_url("ftp://files.example.com/a.txt").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(parse_absolute_url(""), Err(UrlValidationError::Empty));
        assert_eq!(parse_absolute_url("   "), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            parse_absolute_url("/relative/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(parse_absolute_url("example.com").is_err());
    }

    #[test]
    fn test_rejects_missing_host() {
        assert_eq!(
            parse_absolute_url("mailto:someone@example.com"),
            Err(UrlValidationError::MissingHost)
        );
        assert!(parse_absolute_url("http://").is_err());
    }

    #[test]
    fn test_rejects_scheme_without_slashes() {
        for input in ["https:example.com", "http:/example.com", "http:\\\\example.com"] {
            assert_eq!(
                parse_absolute_url(input),
                Err(UrlValidationError::MissingAuthority),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_scheme_case_is_ignored() {
        let url = parse_absolute_url("HTTPS://Example.com/x").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(parse_absolute_url("https://exa mple.com").is_err());
        assert!(parse_absolute_url("not a url").is_err());
    }

    #[test]
    fn test_trims_whitespace() {
        let url = parse_absolute_url("  https://example.com/x  ").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(
            redirect_target("  https://example.com/x  ", &url),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_redirect_target_keeps_ascii_spelling() {
        let input = "https://example.com";
        let url = parse_absolute_url(input).unwrap();

        assert_eq!(redirect_target(input, &url), "https://example.com");
    }

    #[test]
    fn test_redirect_target_encodes_non_ascii() {
        let input = "https://example.com/caf\u{e9}";
        let url = parse_absolute_url(input).unwrap();

        assert_eq!(redirect_target(input, &url), "https://example.com/caf%C3%A9");
    }
}
