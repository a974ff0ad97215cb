//! Splitting a scheme-less URL like `example.com/index.html?x=1` into host and path.
use std::fmt;
use std::str;

/// Host and path of the resource to fetch.
///
/// The host is everything before the first `/`, the path is everything from it on. No validation
/// or decoding happens here; a bad host only shows up when it fails to resolve.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Target {
    host: String,
    path: String,
}

impl Target {
    pub fn split(url: &str) -> Self {
        let (host, path) = url.split_at(url.find('/').unwrap_or(url.len()));
        Target {
            host: host.into(),
            path: path.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The path exactly as it appeared in the url. Empty if the url had no `/`.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl str::FromStr for Target {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Target::split(s))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.host, self.path)
    }
}
