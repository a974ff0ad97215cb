//! Fetching a url: resolve, connect, send the request, then stream the body into a sink.
//!
//! ```no_run
//! use std::io;
//!
//! use wask::error::Result;
//! use wask::url::Target;
//!
//! fn main() -> Result<()> {
//!     let target = Target::split("example.com/index.html");
//!     let body_len = wask::client::get(&target, &mut io::stdout())?;
//!     eprintln!("{} bytes", body_len);
//!     Ok(())
//! }
//! ```
use crate::error::{Error, Result};
use crate::io::{Connection, CHUNK_SIZE};
use crate::protocol::{HttpRequest, ResponseParser};
use crate::url::Target;
use std::io;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};

/// The only port requests are sent to.
pub const DEFAULT_PORT: u16 = 80;

/// Resolves host names and opens streams to the resulting addresses.
pub trait StreamConnector {
    type Stream: io::Read + io::Write;
    fn to_stream_addr(&self, host: &str) -> Result<SocketAddr>;
    fn connect(&self, addr: SocketAddr) -> Result<Self::Stream>;
}

/// Plain TCP to port 80, using the system resolver.
pub struct TcpConnector;

impl StreamConnector for TcpConnector {
    type Stream = TcpStream;

    fn to_stream_addr(&self, host: &str) -> Result<SocketAddr> {
        let err = |source: io::Error| Error::ResolutionFailed {
            host: host.into(),
            source,
        };
        (host, DEFAULT_PORT)
            .to_socket_addrs()
            .map_err(err)?
            .find(SocketAddr::is_ipv4)
            .ok_or_else(|| {
                err(io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    "no IPv4 address",
                ))
            })
    }

    fn connect(&self, addr: SocketAddr) -> Result<TcpStream> {
        TcpStream::connect(addr).map_err(|e| connect_error(addr, e))
    }
}

// std creates and connects the socket in one call, so tell the two apart by error kind.
fn connect_error(addr: SocketAddr, source: io::Error) -> Error {
    match source.kind() {
        io::ErrorKind::OutOfMemory | io::ErrorKind::Unsupported => {
            Error::SocketCreationFailed(source)
        }
        _ => Error::ConnectFailed { addr, source },
    }
}

/// Fetch `target` over TCP port 80 and write its body to `sink`.
pub fn get<W: io::Write>(target: &Target, sink: &mut W) -> Result<u64> {
    fetch(&TcpConnector, target, sink)
}

/// Fetch `target` through `connector` and write its body to `sink`, returning the body length.
///
/// The response ends when the server closes the connection. A response that ends before its head
/// is complete has an empty body.
pub fn fetch<C: StreamConnector, W: io::Write>(
    connector: &C,
    target: &Target,
    sink: &mut W,
) -> Result<u64> {
    let request = HttpRequest::get(target);

    let addr = connector.to_stream_addr(target.host())?;
    log::debug!("resolved {} to {}", target.host(), addr);

    let mut connection = Connection::new(connector.connect(addr)?);
    log::debug!("connected to {}", addr);

    let request = request.to_bytes();
    let calls = connection.write_all(&request)?;
    log::debug!("sent {} request bytes in {} writes", request.len(), calls);

    let mut parser = ResponseParser::new();
    let mut chunk = [0; CHUNK_SIZE];
    let mut body_len = 0;
    loop {
        let n = connection.read_chunk(&mut chunk)?;
        if n == 0 {
            break;
        }
        log::trace!("read {} bytes", n);

        let body = parser.feed(&chunk[..n])?;
        if !body.is_empty() {
            sink.write_all(body).map_err(Error::OutputWriteFailed)?;
            sink.flush().map_err(Error::OutputWriteFailed)?;
            body_len += body.len() as u64;
        }
    }
    sink.flush().map_err(Error::OutputWriteFailed)?;

    if !parser.in_body() {
        log::debug!(
            "connection closed after {} bytes of response head",
            parser.head_len()
        );
    }
    log::info!("{}: {} body bytes", target, body_len);
    Ok(body_len)
}
