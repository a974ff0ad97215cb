//! A one-shot HTTP server for tests. It reads a request head, then replies with canned bytes in
//! separate writes and closes the connection, the way an HTTP/1.0 server ends a response.
use std::io::{self, Read, Write};
use std::net;
use std::thread;
use std::time::Duration;

pub struct StubServer {
    listener: net::TcpListener,
}

impl StubServer {
    pub fn bind() -> io::Result<(u16, Self)> {
        let listener = net::TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        Ok((port, StubServer { listener }))
    }

    /// Accept one connection and answer it with `pieces`, one write each. Returns the request
    /// head that was received.
    pub fn serve_one(&self, pieces: Vec<Vec<u8>>) -> io::Result<Vec<u8>> {
        let (mut stream, _) = self.listener.accept()?;
        let request = read_request_head(&mut stream)?;

        for piece in pieces {
            stream.write_all(&piece)?;
            stream.flush()?;
            // Give the client a chance to see each piece as its own read.
            thread::sleep(Duration::from_millis(20));
        }
        Ok(request)
    }

    /// Run `serve_one` on its own thread.
    pub fn spawn(self, pieces: Vec<Vec<u8>>) -> thread::JoinHandle<io::Result<Vec<u8>>> {
        thread::spawn(move || self.serve_one(pieces))
    }
}

fn read_request_head<R: Read>(stream: &mut R) -> io::Result<Vec<u8>> {
    let mut head = vec![];
    let mut byte = [0; 1];
    while !head.ends_with(b"\r\n\r\n") {
        if stream.read(&mut byte)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "client closed before finishing the request",
            ));
        }
        head.push(byte[0]);
    }
    Ok(head)
}

#[cfg(test)]
mod stub_server_tests {
    use super::read_request_head;

    #[test]
    fn reads_up_to_blank_line() {
        let mut input = &b"GET / HTTP/1.0\r\nHost: a\r\n\r\nleftover"[..];
        let head = read_request_head(&mut input).unwrap();
        assert_eq!(head, b"GET / HTTP/1.0\r\nHost: a\r\n\r\n");
        assert_eq!(input, b"leftover");
    }

    #[test]
    fn fails_on_truncated_request() {
        let mut input = &b"GET / HTTP/1.0\r\n"[..];
        assert!(read_request_head(&mut input).is_err());
    }
}
