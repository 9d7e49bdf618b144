//! Minimal HTTP/1.1 log download
//!
//! The fetcher issues one fixed-shape GET over a plain TCP stream and
//! hands back the response body as a line-oriented reader. It is
//! deliberately narrow: no TLS, no redirects, no chunked decoding. The
//! server is asked for `Connection: Close`, so the body ends when the
//! peer closes the socket.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;
use thiserror::Error;

use crate::config::FetchConfig;
use crate::input::UrlParts;

/// Errors that can occur while downloading the log
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    #[error("Failed to resolve {host}: {source}")]
    Resolve {
        host: String,
        source: std::io::Error,
    },

    #[error("Failed to connect to {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Downloads a log file with a minimal hand-rolled HTTP GET
pub struct HttpFetcher {
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher with the configured timeouts
    pub fn new(config: &FetchConfig) -> Self {
        HttpFetcher {
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            read_timeout: Duration::from_secs(config.read_timeout_secs),
        }
    }

    /// Fetch the resource and return a reader positioned at the body.
    ///
    /// Connects to `host:port`, writes the GET request, then reads and
    /// discards response header lines up to the first blank line. The
    /// socket is owned by the returned [`BodyReader`] and closes when
    /// it drops, on every exit path.
    pub fn fetch(&self, url: &UrlParts) -> Result<BodyReader, FetchError> {
        let port: u16 = url
            .port
            .parse()
            .map_err(|_| FetchError::InvalidPort(url.port.clone()))?;

        let mut stream = self.connect(&url.host, port)?;
        stream.set_read_timeout(Some(self.read_timeout))?;
        log::info!("Connected to {}:{}", url.host, port);

        let request = format!(
            "GET {} HTTP/1.1\r\nHost: {}\r\nConnection: Close\r\n\r\n",
            url.path, url.host
        );
        stream.write_all(request.as_bytes())?;

        let mut reader = BufReader::new(stream);
        skip_headers(&mut reader)?;

        Ok(BodyReader { inner: reader })
    }

    fn connect(&self, host: &str, port: u16) -> Result<TcpStream, FetchError> {
        let addrs = (host, port)
            .to_socket_addrs()
            .map_err(|source| FetchError::Resolve {
                host: host.to_string(),
                source,
            })?;

        let mut last_err = None;
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, self.connect_timeout) {
                Ok(stream) => return Ok(stream),
                Err(e) => {
                    log::debug!("Connect to {} failed: {}", addr, e);
                    last_err = Some(e);
                }
            }
        }

        Err(FetchError::Connect {
            host: host.to_string(),
            port,
            source: last_err.unwrap_or_else(|| {
                io::Error::new(io::ErrorKind::AddrNotAvailable, "no addresses resolved")
            }),
        })
    }
}

/// Read and discard header lines until the blank line ending the headers.
fn skip_headers(reader: &mut BufReader<TcpStream>) -> io::Result<()> {
    let mut header = String::new();
    loop {
        header.clear();
        let bytes_read = reader.read_line(&mut header)?;
        if bytes_read == 0 {
            // Peer closed before the header terminator; treat as empty body.
            log::warn!("Response ended inside the headers");
            return Ok(());
        }
        let trimmed = header.trim_end_matches(|c| c == '\r' || c == '\n');
        if trimmed.is_empty() {
            return Ok(());
        }
        log::debug!("Header: {}", trimmed);
    }
}

/// Response body as a line-oriented stream.
///
/// Owns the connection; not restartable. Consume it once, in order.
pub struct BodyReader {
    inner: BufReader<TcpStream>,
}

impl Read for BodyReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for BodyReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a loopback port, returning the
    /// port and a handle that yields the raw request bytes received.
    fn spawn_one_shot_server(response: &'static str) -> (u16, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).unwrap();
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") || n == 0 {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).unwrap();
            String::from_utf8(request).unwrap()
        });
        (port, handle)
    }

    fn test_fetcher() -> HttpFetcher {
        HttpFetcher::new(&FetchConfig {
            connect_timeout_secs: 5,
            read_timeout_secs: 5,
        })
    }

    #[test]
    fn test_request_shape_and_body_lines() {
        let (port, handle) = spawn_one_shot_server(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nline one\nline two\n",
        );
        let url = UrlParts {
            host: "127.0.0.1".to_string(),
            port: port.to_string(),
            path: "/logs/auth.txt".to_string(),
        };

        let body = test_fetcher().fetch(&url).unwrap();
        let lines: Vec<String> = body.lines().map(Result::unwrap).collect();
        assert_eq!(lines, vec!["line one", "line two"]);

        let request = handle.join().unwrap();
        assert_eq!(
            request,
            "GET /logs/auth.txt HTTP/1.1\r\nHost: 127.0.0.1\r\nConnection: Close\r\n\r\n"
        );
    }

    #[test]
    fn test_headers_skipped_up_to_blank_line() {
        let (port, _handle) = spawn_one_shot_server(
            "HTTP/1.1 200 OK\r\nServer: test\r\nX-Extra: 1\r\n\r\nbody\r\n",
        );
        let url = UrlParts {
            host: "127.0.0.1".to_string(),
            port: port.to_string(),
            path: "/".to_string(),
        };

        let body = test_fetcher().fetch(&url).unwrap();
        let lines: Vec<String> = body.lines().map(Result::unwrap).collect();
        assert_eq!(lines, vec!["body"]);
    }

    #[test]
    fn test_connect_refused_is_an_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url = UrlParts {
            host: "127.0.0.1".to_string(),
            port: port.to_string(),
            path: "/".to_string(),
        };
        assert!(matches!(
            test_fetcher().fetch(&url),
            Err(FetchError::Connect { .. })
        ));
    }

    #[test]
    fn test_bad_port_is_an_error() {
        let url = UrlParts {
            host: "127.0.0.1".to_string(),
            port: "not-a-port".to_string(),
            path: "/".to_string(),
        };
        assert!(matches!(
            test_fetcher().fetch(&url),
            Err(FetchError::InvalidPort(_))
        ));
    }
}
