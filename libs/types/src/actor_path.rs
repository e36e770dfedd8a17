//! Hierarchical actor addresses
//!
//! An [`ActorPath`] is the textual address of a message endpoint. The
//! canonical form is `/`-delimited (`/user/orders/42`); the root path is
//! the single character `/`. Parsing and rendering round-trip exactly:
//! `ActorPath::from_string(p.to_string()) == p` for every valid path.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised when parsing or extending an actor path
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActorPathError {
    /// The input string was empty
    #[error("actor path is empty")]
    Empty,

    /// The input did not start with the root `/`
    #[error("actor path '{path}' must start with '/'")]
    MissingRootSlash { path: String },

    /// The input contained an empty segment (`//` or a trailing `/`)
    #[error("actor path '{path}' contains an empty segment")]
    EmptySegment { path: String },

    /// A segment passed to [`ActorPath::child`] was not usable
    #[error("invalid path segment '{segment}': {reason}")]
    InvalidSegment { segment: String, reason: String },
}

/// Hierarchical address of a message endpoint
///
/// Paths are immutable values; [`ActorPath::child`] and
/// [`ActorPath::parent`] return new instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActorPath {
    segments: Vec<String>,
}

impl ActorPath {
    /// The root path, rendered as `/`
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parse a path from its canonical textual form
    ///
    /// Accepts `/` (root) or `/seg/seg/...`. Rejects empty input, input
    /// missing the leading slash, empty segments, and trailing slashes.
    pub fn from_string(path: &str) -> Result<Self, ActorPathError> {
        if path.is_empty() {
            return Err(ActorPathError::Empty);
        }
        if path == "/" {
            return Ok(Self::root());
        }
        let rest = path
            .strip_prefix('/')
            .ok_or_else(|| ActorPathError::MissingRootSlash {
                path: path.to_string(),
            })?;

        let mut segments = Vec::new();
        for segment in rest.split('/') {
            if segment.is_empty() {
                return Err(ActorPathError::EmptySegment {
                    path: path.to_string(),
                });
            }
            segments.push(segment.to_string());
        }

        Ok(Self { segments })
    }

    /// Whether this is the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a segment, producing the child path
    pub fn child(&self, segment: impl Into<String>) -> Result<Self, ActorPathError> {
        let segment = segment.into();
        if segment.is_empty() {
            return Err(ActorPathError::InvalidSegment {
                segment,
                reason: "segment must not be empty".to_string(),
            });
        }
        if segment.contains('/') {
            return Err(ActorPathError::InvalidSegment {
                segment,
                reason: "segment must not contain '/'".to_string(),
            });
        }

        let mut segments = self.segments.clone();
        segments.push(segment);
        Ok(Self { segments })
    }

    /// The parent path, or `None` for the root
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// The final segment, or `None` for the root
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// All segments in order, empty for the root
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ActorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for ActorPath {
    type Err = ActorPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_as_single_slash() {
        assert_eq!(ActorPath::root().to_string(), "/");
        assert!(ActorPath::root().is_root());
    }

    #[test]
    fn parse_and_render_round_trip() {
        for text in ["/", "/user", "/user/orders/42", "/system/guardian"] {
            let path = ActorPath::from_string(text).unwrap();
            assert_eq!(path.to_string(), text);
            assert_eq!(ActorPath::from_string(&path.to_string()).unwrap(), path);
        }
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(ActorPath::from_string(""), Err(ActorPathError::Empty));
    }

    #[test]
    fn parse_rejects_relative_paths() {
        assert!(matches!(
            ActorPath::from_string("user/orders"),
            Err(ActorPathError::MissingRootSlash { .. })
        ));
    }

    #[test]
    fn parse_rejects_empty_segments() {
        for text in ["//", "/user//orders", "/user/"] {
            assert!(
                matches!(
                    ActorPath::from_string(text),
                    Err(ActorPathError::EmptySegment { .. })
                ),
                "expected empty-segment rejection for {text:?}"
            );
        }
    }

    #[test]
    fn child_appends_segment() {
        let path = ActorPath::root().child("user").unwrap().child("api").unwrap();
        assert_eq!(path.to_string(), "/user/api");
        assert_eq!(path.name(), Some("api"));
    }

    #[test]
    fn child_rejects_bad_segments() {
        assert!(ActorPath::root().child("").is_err());
        assert!(ActorPath::root().child("a/b").is_err());
    }

    #[test]
    fn parent_walks_toward_root() {
        let path = ActorPath::from_string("/user/orders/42").unwrap();
        let parent = path.parent().unwrap();
        assert_eq!(parent.to_string(), "/user/orders");
        assert_eq!(parent.parent().unwrap().parent().unwrap(), ActorPath::root());
        assert_eq!(ActorPath::root().parent(), None);
    }

    #[test]
    fn from_str_matches_from_string() {
        let parsed: ActorPath = "/user/api".parse().unwrap();
        assert_eq!(parsed, ActorPath::from_string("/user/api").unwrap());
    }
}
