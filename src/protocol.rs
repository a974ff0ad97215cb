use crate::error::{Error, Result};
use crate::url::Target;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct HttpVersion {
    major: u32,
    minor: u32,
}

impl HttpVersion {
    fn new(major: u32, minor: u32) -> Self {
        HttpVersion { major, minor }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HTTP/{}.{}", self.major, self.minor)
    }
}


#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HttpMethod {
    Get,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
        }
    }
}

/// The one request this client knows how to send.
///
/// HTTP/1.0 keeps the server from using chunked transfer encoding and makes it close the
/// connection after the response, which is how the end of the body is detected.
#[derive(Debug, PartialEq, Eq)]
pub struct HttpRequest {
    method: HttpMethod,
    uri: String,
    version: HttpVersion,
    headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(target: &Target) -> Self {
        let uri = match target.path() {
            "" => "/",
            path => path,
        };
        let mut request = HttpRequest {
            method: HttpMethod::Get,
            uri: uri.into(),
            version: HttpVersion::new(1, 0),
            headers: vec![],
        };
        request.add_header("Host", target.host());
        request.add_header("Accept", "*/*");
        request
    }

    fn add_header<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.headers.push((key.into(), value.into()));
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}\r\n", self.method, self.uri, self.version)?;
        for (key, value) in &self.headers {
            write!(f, "{}: {}\r\n", key, value)?;
        }
        write!(f, "\r\n")?;
        Ok(())
    }
}


/// Where the scanner is in the search for the blank line ending the response head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    Head,
    SawCr,
    SawLf,
    SawCrLfCr,
    Body,
}

impl ParserState {
    /// Advance by one byte of the response head.
    ///
    /// A lone `\n` is accepted wherever `\r\n` is, for servers that skip the `\r`. A `\r` not
    /// followed by `\n` is an error. `Body` is terminal.
    pub fn next(self, byte: u8) -> Result<ParserState> {
        use ParserState::*;
        Ok(match (self, byte) {
            (Body, _) => Body,
            (Head, b'\r') => SawCr,
            (Head, b'\n') => SawLf,
            (Head, _) => Head,
            (SawCr, b'\n') => SawLf,
            (SawCr, found) => {
                return Err(Error::MalformedHeaderTermination { after: "\r", found })
            }
            (SawLf, b'\r') => SawCrLfCr,
            (SawLf, b'\n') => Body,
            (SawLf, _) => Head,
            (SawCrLfCr, b'\n') => Body,
            (SawCrLfCr, found) => {
                return Err(Error::MalformedHeaderTermination {
                    after: "\r\n\r",
                    found,
                })
            }
        })
    }
}

/// Streaming splitter of a close-delimited HTTP/1.0 response.
///
/// Feed it every chunk read from the connection, in order. It swallows the status line and
/// headers and hands back the part of each chunk that belongs to the body. The head/body boundary
/// may fall anywhere, including across chunks; state is carried one byte at a time so nothing is
/// ever buffered.
#[derive(Debug)]
pub struct ResponseParser {
    state: ParserState,
    head_len: u64,
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseParser {
    pub fn new() -> Self {
        ResponseParser {
            state: ParserState::Head,
            head_len: 0,
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn in_body(&self) -> bool {
        self.state == ParserState::Body
    }

    /// Number of bytes consumed as response head so far, boundary included.
    pub fn head_len(&self) -> u64 {
        self.head_len
    }

    /// Consume one chunk, returning the slice of it that is body.
    ///
    /// On error nothing from `chunk` should be written anywhere.
    pub fn feed<'a>(&mut self, chunk: &'a [u8]) -> Result<&'a [u8]> {
        if self.in_body() {
            return Ok(chunk);
        }

        for (i, &byte) in chunk.iter().enumerate() {
            self.state = self.state.next(byte)?;
            if self.in_body() {
                self.head_len += i as u64 + 1;
                log::debug!("end of response head after {} bytes", self.head_len);
                return Ok(&chunk[i + 1..]);
            }
        }

        self.head_len += chunk.len() as u64;
        Ok(&[])
    }
}
