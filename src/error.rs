use std::error;
use std::fmt;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: wask [-o OUTPUT_PATH] URL";

/// Every way a fetch can fail. None of these are recoverable: the caller reports the error once
/// and gives up.
#[derive(Debug)]
pub enum Error {
    Usage,
    OutputOpenFailed { path: PathBuf, source: io::Error },
    OutputWriteFailed(io::Error),
    ResolutionFailed { host: String, source: io::Error },
    SocketCreationFailed(io::Error),
    ConnectFailed { addr: SocketAddr, source: io::Error },
    WriteFailed(io::Error),
    ReadFailed(io::Error),
    MalformedHeaderTermination { after: &'static str, found: u8 },
}

pub type Result<R> = std::result::Result<R, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Usage => write!(f, "{}", USAGE),
            Error::OutputOpenFailed { path, source } => {
                write!(f, "can't open {} for writing: {}", path.display(), source)
            }
            Error::OutputWriteFailed(e) => write!(f, "writing output failed: {}", e),
            Error::ResolutionFailed { host, source } => {
                write!(f, "failed to resolve {:?}: {}", host, source)
            }
            Error::SocketCreationFailed(e) => write!(f, "socket creation failed: {}", e),
            Error::ConnectFailed { addr, source } => {
                write!(f, "connect to {} failed: {}", addr, source)
            }
            Error::WriteFailed(e) => write!(f, "write to socket failed: {}", e),
            Error::ReadFailed(e) => write!(f, "read from socket failed: {}", e),
            Error::MalformedHeaderTermination { after, found } => write!(
                f,
                "malformed header termination: no \\n after {:?} (found {:?})",
                after,
                char::from(*found)
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Usage => None,
            Error::OutputOpenFailed { source, .. } => Some(source),
            Error::OutputWriteFailed(e) => Some(e),
            Error::ResolutionFailed { source, .. } => Some(source),
            Error::SocketCreationFailed(e) => Some(e),
            Error::ConnectFailed { source, .. } => Some(source),
            Error::WriteFailed(e) => Some(e),
            Error::ReadFailed(e) => Some(e),
            Error::MalformedHeaderTermination { .. } => None,
        }
    }
}

#[cfg(test)]
mod error_tests {
    use super::Error;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn display_names_failing_step() {
        let e = Error::ReadFailed(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
        assert_eq!(e.to_string(), "read from socket failed: reset");

        let e = Error::OutputOpenFailed {
            path: "/nope/out.html".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            e.to_string(),
            "can't open /nope/out.html for writing: not found"
        );
    }

    #[test]
    fn display_malformed_termination() {
        let e = Error::MalformedHeaderTermination {
            after: "\r",
            found: b'x',
        };
        assert_eq!(
            e.to_string(),
            "malformed header termination: no \\n after \"\\r\" (found 'x')"
        );
    }

    #[test]
    fn display_is_single_line() {
        let e = Error::ResolutionFailed {
            host: "nowhere.invalid".into(),
            source: io::Error::new(io::ErrorKind::Other, "no such host"),
        };
        assert!(!e.to_string().contains('\n'));
    }

    #[test]
    fn source_exposes_io_error() {
        let e = Error::WriteFailed(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        assert!(e.source().is_some());
        assert!(Error::Usage.source().is_none());
    }
}
