//! The connection to the server: a byte stream we write the whole request to, then read from until
//! the server closes it.

use crate::error::{Error, Result};
use std::io;

/// Capacity of the buffer each read fills.
pub const CHUNK_SIZE: usize = 1024;

/// Exclusive owner of one connected stream. Dropping it closes the stream.
pub struct Connection<S: io::Read + io::Write> {
    stream: S,
}

impl<S: io::Read + io::Write> Connection<S> {
    pub fn new(stream: S) -> Self {
        Connection { stream }
    }

    /// Write all of `buf`, continuing after short writes, and return how many write calls it
    /// took.
    pub fn write_all(&mut self, mut buf: &[u8]) -> Result<usize> {
        let mut calls = 0;
        while !buf.is_empty() {
            calls += 1;
            match self.stream.write(buf) {
                Ok(0) => {
                    return Err(Error::WriteFailed(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write whole buffer",
                    )))
                }
                Ok(n) => buf = &buf[n..],
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::WriteFailed(e)),
            }
        }
        self.stream.flush().map_err(Error::WriteFailed)?;
        Ok(calls)
    }

    /// Read whatever is available into `buf`. `Ok(0)` means the peer closed the connection.
    pub fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize> {
        loop {
            match self.stream.read(buf) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::ReadFailed(e)),
            }
        }
    }

    pub fn get_ref(&self) -> &S {
        &self.stream
    }
}

impl<S: io::Read + io::Write> Drop for Connection<S> {
    fn drop(&mut self) {
        log::trace!("closing connection");
    }
}
