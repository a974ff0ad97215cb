//! Where the response body goes.
use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

pub enum Sink {
    Stdout(io::StdoutLock<'static>),
    File(fs::File),
}

impl Sink {
    /// Stdout, or `path` truncated and opened for writing.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(Sink::Stdout(io::stdout().lock())),
            Some(path) => {
                let file = fs::File::create(path).map_err(|source| Error::OutputOpenFailed {
                    path: path.into(),
                    source,
                })?;
                log::debug!("writing body to {}", path.display());
                Ok(Sink::File(file))
            }
        }
    }
}

impl io::Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout(s) => s.write(buf),
            Sink::File(f) => f.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout(s) => s.flush(),
            Sink::File(f) => f.flush(),
        }
    }
}

#[cfg(test)]
mod sink_tests {
    use super::Sink;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "previous content that is longer").unwrap();

        let mut sink = Sink::open(Some(&path)).unwrap();
        sink.write_all(b"new").unwrap();
        sink.flush().unwrap();
        drop(sink);

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn open_failure_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        match Sink::open(Some(&path)) {
            Err(e @ Error::OutputOpenFailed { .. }) => {
                assert!(e.to_string().contains(&path.display().to_string()))
            }
            Err(e) => panic!("unexpected error {:?}", e),
            Ok(_) => panic!("opened a file in a missing directory"),
        }
    }
}
