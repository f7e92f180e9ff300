//! Social platform URL validation
//!
//! A non-blank value must parse as an absolute URL (scheme + host) and match
//! one of the canonical profile-URL shapes in the fixed platform table below.
//! Blank values are valid: absence is permitted, only presence is checked by
//! required/record rules in the engine.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// One supported platform: display name plus the profile-URL shapes it accepts.
struct Platform {
    name: &'static str,
    patterns: Vec<Regex>,
}

impl Platform {
    fn new(name: &'static str, patterns: &[&str]) -> Self {
        Self {
            name,
            patterns: patterns
                .iter()
                .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("bad platform pattern {p}: {e}")))
                .collect(),
        }
    }

    fn matches(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(url))
    }
}

/// Fixed platform table. Order here is the order platform names are
/// enumerated in the no-match error message.
static PLATFORMS: Lazy<Vec<Platform>> = Lazy::new(|| {
    vec![
        Platform::new(
            "TikTok",
            &[
                r"(?i)^https?://(www\.)?tiktok\.com/@[\w.-]+/?$",
                r"(?i)^https?://(vm\.)?tiktok\.com/[\w.-]+/?$",
            ],
        ),
        Platform::new("Instagram", &[r"(?i)^https?://(www\.)?instagram\.com/[\w.-]+/?$"]),
        Platform::new(
            "YouTube",
            &[
                r"(?i)^https?://(www\.)?youtube\.com/(@|c/|channel/|user/)[\w.-]+/?$",
                r"(?i)^https?://(www\.)?youtube\.com/[\w.-]+/?$",
            ],
        ),
        Platform::new(
            "X (Twitter)",
            &[r"(?i)^https?://(www\.)?(x\.com|twitter\.com)/[\w.-]+/?$"],
        ),
        Platform::new(
            "Facebook",
            &[
                r"(?i)^https?://(www\.)?facebook\.com/[\w.-]+/?$",
                r"(?i)^https?://(www\.)?fb\.com/[\w.-]+/?$",
            ],
        ),
        Platform::new("Pinterest", &[r"(?i)^https?://(www\.)?pinterest\.com/[\w.-]+/?$"]),
        Platform::new(
            "Snapchat",
            &[
                r"(?i)^https?://(www\.)?snapchat\.com/add/[\w.-]+/?$",
                r"(?i)^https?://(www\.)?snapchat\.com/u/[\w.-]+/?$",
            ],
        ),
    ]
});

/// Outcome of a social URL check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialUrlOutcome {
    /// Whether the value passed the check
    pub valid: bool,
    /// Matched platform display name, when a match was found
    pub platform: Option<&'static str>,
    /// Error description when invalid
    pub error: Option<String>,
}

impl SocialUrlOutcome {
    fn valid(platform: Option<&'static str>) -> Self {
        Self {
            valid: true,
            platform,
            error: None,
        }
    }

    fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            platform: None,
            error: Some(error.into()),
        }
    }
}

/// Returns the supported platform display names in table order.
pub fn supported_platform_names() -> Vec<&'static str> {
    PLATFORMS.iter().map(|p| p.name).collect()
}

/// Validates a social URL value.
///
/// Blank values are valid. Non-blank values must be well-formed absolute URLs
/// and match at least one supported platform pattern. Matching is
/// case-insensitive and a trailing slash is allowed.
pub fn validate_social_url(value: &str) -> SocialUrlOutcome {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return SocialUrlOutcome::valid(None);
    }

    // Well-formedness first: must parse as an absolute URL with a host.
    match Url::parse(trimmed) {
        Ok(parsed) if parsed.has_host() => {}
        _ => {
            return SocialUrlOutcome::invalid(
                "Please enter a valid URL starting with http:// or https://",
            );
        }
    }

    for platform in PLATFORMS.iter() {
        if platform.matches(trimmed) {
            return SocialUrlOutcome::valid(Some(platform.name));
        }
    }

    SocialUrlOutcome::invalid(format!(
        "URL must be from one of these platforms: {}",
        supported_platform_names().join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_valid() {
        assert!(validate_social_url("").valid);
        assert!(validate_social_url("   ").valid);
        assert_eq!(validate_social_url("").platform, None);
    }

    #[test]
    fn test_tiktok_profile_url() {
        let outcome = validate_social_url("https://www.tiktok.com/@janedoe");
        assert!(outcome.valid);
        assert_eq!(outcome.platform, Some("TikTok"));
    }

    #[test]
    fn test_tiktok_short_link() {
        let outcome = validate_social_url("https://vm.tiktok.com/ZM8abc123");
        assert!(outcome.valid);
        assert_eq!(outcome.platform, Some("TikTok"));
    }

    #[test]
    fn test_case_insensitive_match() {
        let outcome = validate_social_url("HTTPS://WWW.TIKTOK.COM/@JaneDoe");
        assert!(outcome.valid);
        assert_eq!(outcome.platform, Some("TikTok"));
    }

    #[test]
    fn test_trailing_slash_allowed() {
        assert!(validate_social_url("https://www.instagram.com/johnsmith/").valid);
    }

    #[test]
    fn test_youtube_shapes() {
        for url in [
            "https://www.youtube.com/@JaneDoe",
            "https://www.youtube.com/c/JaneDoe",
            "https://www.youtube.com/channel/UC12345",
            "https://www.youtube.com/user/janedoe",
            "https://youtube.com/janedoe",
        ] {
            let outcome = validate_social_url(url);
            assert!(outcome.valid, "{url} should be valid");
            assert_eq!(outcome.platform, Some("YouTube"));
        }
    }

    #[test]
    fn test_x_and_twitter_domains() {
        assert_eq!(
            validate_social_url("https://x.com/janedoe").platform,
            Some("X (Twitter)")
        );
        assert_eq!(
            validate_social_url("https://twitter.com/janedoe").platform,
            Some("X (Twitter)")
        );
    }

    #[test]
    fn test_facebook_and_fb_domains() {
        assert_eq!(
            validate_social_url("https://www.facebook.com/janedoe").platform,
            Some("Facebook")
        );
        assert_eq!(
            validate_social_url("https://fb.com/janedoe").platform,
            Some("Facebook")
        );
    }

    #[test]
    fn test_snapchat_shapes() {
        assert!(validate_social_url("https://www.snapchat.com/add/janedoe").valid);
        assert!(validate_social_url("https://snapchat.com/u/janedoe").valid);
        assert!(!validate_social_url("https://snapchat.com/janedoe").valid);
    }

    #[test]
    fn test_malformed_url_rejected() {
        let outcome = validate_social_url("not a url");
        assert!(!outcome.valid);
        assert!(outcome.error.as_deref().unwrap().contains("valid URL"));
    }

    #[test]
    fn test_schemeless_url_rejected() {
        assert!(!validate_social_url("tiktok.com/@janedoe").valid);
    }

    #[test]
    fn test_hostless_url_rejected() {
        // Parses as a URL but has no host
        assert!(!validate_social_url("mailto:jane@example.com").valid);
    }

    #[test]
    fn test_unsupported_platform_enumerates_names() {
        let outcome = validate_social_url("https://www.linkedin.com/in/janedoe");
        assert!(!outcome.valid);
        let error = outcome.error.unwrap();
        for name in supported_platform_names() {
            assert!(error.contains(name), "message should mention {name}");
        }
    }

    #[test]
    fn test_platform_name_order_is_stable() {
        assert_eq!(
            supported_platform_names(),
            vec![
                "TikTok",
                "Instagram",
                "YouTube",
                "X (Twitter)",
                "Facebook",
                "Pinterest",
                "Snapchat"
            ]
        );
    }
}
