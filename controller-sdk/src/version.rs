//! Protocol-version compatibility between this SDK and the controller.
//!
//! Every controller response announces the API version it implements. The
//! controller API follows semantic versioning: a minor-version difference is
//! backward compatible and must not fail a call, while a major-version
//! difference means the response body cannot be trusted.

/// The controller API version this SDK is compiled against.
pub const API_VERSION: &str = "2.3";

/// Response header announcing the API version the controller implements.
pub(crate) const API_VERSION_HEADER: &str = "drycc_api_version";

/// Response header announcing the controller's own release version.
pub(crate) const PLATFORM_VERSION_HEADER: &str = "drycc_platform_version";

/// Compatibility tier between a response's announced API version and
/// [`API_VERSION`].
///
/// This is response metadata, not an error: only [`Compatibility::Incompatible`]
/// fails the call (as [`crate::Error::ApiMismatch`]). Minor skew is reported
/// here so callers can observe drift without special-casing an error value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compatibility {
    /// Same version, or the server announced none.
    Compatible,
    /// Same major version, different minor. Safe to keep going.
    MinorSkew { server: String },
    /// Different major version. The response body is unreliable.
    Incompatible { server: String },
}

impl Compatibility {
    /// False only for a major-version mismatch.
    pub fn is_compatible(&self) -> bool {
        !matches!(self, Compatibility::Incompatible { .. })
    }
}

/// Compare a server-announced version against [`API_VERSION`].
pub(crate) fn check(server: Option<&str>) -> Compatibility {
    let Some(server) = server else {
        return Compatibility::Compatible;
    };
    if server == API_VERSION {
        return Compatibility::Compatible;
    }
    if major(server) == major(API_VERSION) {
        Compatibility::MinorSkew {
            server: server.to_string(),
        }
    } else {
        Compatibility::Incompatible {
            server: server.to_string(),
        }
    }
}

fn major(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_version_is_compatible() {
        assert_eq!(check(Some(API_VERSION)), Compatibility::Compatible);
    }

    #[test]
    fn absent_announcement_is_compatible() {
        assert_eq!(check(None), Compatibility::Compatible);
    }

    #[test]
    fn minor_difference_is_skew_not_failure() {
        let got = check(Some("2.9"));
        assert_eq!(
            got,
            Compatibility::MinorSkew {
                server: "2.9".to_string()
            }
        );
        assert!(got.is_compatible());
    }

    #[test]
    fn major_difference_is_incompatible() {
        let got = check(Some("3.0"));
        assert_eq!(
            got,
            Compatibility::Incompatible {
                server: "3.0".to_string()
            }
        );
        assert!(!got.is_compatible());
    }

    #[test]
    fn version_without_a_dot_compares_as_major() {
        assert!(matches!(check(Some("2")), Compatibility::MinorSkew { .. }));
        assert!(matches!(check(Some("fubar")), Compatibility::Incompatible { .. }));
    }
}
