//! Link target classification.
//!
//! Every `link` in the config is either a root-relative site path
//! (`/install`) or an absolute URL (`https://github.com/...`).

use url::Url;

/// A classified link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Root-relative path inside the site, e.g. `/roadmap`.
    Internal(String),
    /// Absolute URL pointing outside the site.
    External(Url),
}

/// Why a target string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    Empty,
    /// `//host/path` is ambiguous between a path and a URL.
    ProtocolRelative,
    /// Relative paths like `install` depend on the current page.
    NotRootRelative,
    UnsupportedScheme(String),
    MissingHost,
    /// `mailto:` without a recipient.
    MissingAddress,
    Whitespace,
}

impl TargetError {
    pub fn message(&self) -> String {
        match self {
            Self::Empty => "link must not be empty".into(),
            Self::ProtocolRelative => "protocol-relative links (`//host`) are not allowed".into(),
            Self::NotRootRelative => {
                "link is neither a root-relative path nor an absolute URL".into()
            }
            Self::UnsupportedScheme(scheme) => {
                format!("scheme '{scheme}' not supported, must be http, https or mailto")
            }
            Self::MissingHost => "URL must have a valid host".into(),
            Self::MissingAddress => "mailto link must name a recipient".into(),
            Self::Whitespace => "link must not contain whitespace".into(),
        }
    }

    pub const fn hint(&self) -> &'static str {
        match self {
            Self::Empty | Self::NotRootRelative | Self::ProtocolRelative => {
                "use a path like \"/install\" or a URL like \"https://example.com\""
            }
            Self::UnsupportedScheme(_) | Self::MissingHost => {
                "use format like https://example.com"
            }
            Self::MissingAddress => "use format like mailto:team@example.com",
            Self::Whitespace => "percent-encode spaces as %20",
        }
    }
}

impl Target {
    /// Classify a raw link string.
    pub fn parse(raw: &str) -> Result<Self, TargetError> {
        if raw.is_empty() {
            return Err(TargetError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(TargetError::Whitespace);
        }
        if raw.starts_with("//") {
            return Err(TargetError::ProtocolRelative);
        }
        if raw.starts_with('/') {
            return Ok(Self::Internal(raw.to_owned()));
        }

        let parsed = Url::parse(raw).map_err(|_| TargetError::NotRootRelative)?;
        match parsed.scheme() {
            "http" | "https" => {
                // `url` turns `https:///x` and `https:x` into host `x`,
                // so the authority is checked on the raw text
                let has_authority = raw
                    .split_once("://")
                    .is_some_and(|(_, rest)| !rest.is_empty() && !rest.starts_with('/'));
                if !has_authority || parsed.host_str().is_none_or(str::is_empty) {
                    return Err(TargetError::MissingHost);
                }
            }
            "mailto" => {
                if parsed.path().is_empty() {
                    return Err(TargetError::MissingAddress);
                }
            }
            other => return Err(TargetError::UnsupportedScheme(other.to_owned())),
        }
        Ok(Self::External(parsed))
    }

    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// Host of an external target (`None` for internal paths and `mailto`).
    pub fn host(&self) -> Option<&str> {
        match self {
            Self::Internal(_) => None,
            Self::External(url) => url.host_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_paths() {
        assert_eq!(Target::parse("/"), Ok(Target::Internal("/".into())));
        assert_eq!(
            Target::parse("/install#linux"),
            Ok(Target::Internal("/install#linux".into()))
        );
        assert!(!Target::parse("/faq").unwrap().is_external());
    }

    #[test]
    fn test_external_urls() {
        let target = Target::parse("https://github.com/openchlsystem/OpenCHS-helpline").unwrap();
        assert!(target.is_external());
        assert_eq!(target.host(), Some("github.com"));

        let mail = Target::parse("mailto:team@example.com").unwrap();
        assert!(mail.is_external());
        assert_eq!(mail.host(), None);
    }

    #[test]
    fn test_rejected_targets() {
        assert_eq!(Target::parse(""), Err(TargetError::Empty));
        assert_eq!(Target::parse("install"), Err(TargetError::NotRootRelative));
        assert_eq!(
            Target::parse("//cdn.example.com/x.js"),
            Err(TargetError::ProtocolRelative)
        );
        assert_eq!(Target::parse("/a page"), Err(TargetError::Whitespace));
        assert_eq!(
            Target::parse("ftp://example.com/file"),
            Err(TargetError::UnsupportedScheme("ftp".into()))
        );
        assert_eq!(Target::parse("mailto:"), Err(TargetError::MissingAddress));
        assert_eq!(Target::parse("https:///x"), Err(TargetError::MissingHost));
        assert_eq!(Target::parse("https:example.com"), Err(TargetError::MissingHost));
        assert!(Target::parse("https://").is_err());
        assert_eq!(
            Target::parse("javascript:alert(1)"),
            Err(TargetError::UnsupportedScheme("javascript".into()))
        );
    }
}
