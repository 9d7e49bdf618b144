use thiserror::Error;

/// Errors that can occur while splitting a URL
#[derive(Error, Debug)]
pub enum UrlError {
    #[error("Malformed URL (no \"//\" scheme separator): {0}")]
    MissingSeparator(String),
}

/// Host, port, and path split out of a URL.
///
/// Only the narrow grammar the fetcher needs: everything after the
/// `//` scheme separator up to the first `:` or `/` is the host, an
/// optional `:port` before the first `/`, and the path from the first
/// `/` onward. No query-string or userinfo handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub host: String,
    pub port: String,
    pub path: String,
}

impl UrlParts {
    /// Split a URL into host, port (default "80"), and path (default "/").
    pub fn parse(url: &str) -> Result<Self, UrlError> {
        let rest = match url.find("//") {
            Some(pos) => &url[pos + 2..],
            None => return Err(UrlError::MissingSeparator(url.to_string())),
        };

        let host_end = rest.find(|c| c == ':' || c == '/').unwrap_or(rest.len());
        let host = rest[..host_end].to_string();

        let after_host = &rest[host_end..];
        let (port, path_part) = match after_host.strip_prefix(':') {
            Some(port_and_path) => {
                let port_end = port_and_path.find('/').unwrap_or(port_and_path.len());
                (
                    port_and_path[..port_end].to_string(),
                    &port_and_path[port_end..],
                )
            }
            None => ("80".to_string(), after_host),
        };

        let path = if path_part.is_empty() {
            "/".to_string()
        } else {
            path_part.to_string()
        };

        Ok(UrlParts { host, port, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_port_and_path() {
        let parts = UrlParts::parse("http://host.example.com:8080/logs/a.txt").unwrap();
        assert_eq!(parts.host, "host.example.com");
        assert_eq!(parts.port, "8080");
        assert_eq!(parts.path, "/logs/a.txt");
    }

    #[test]
    fn test_default_port() {
        let parts = UrlParts::parse("http://host.example.com/a.txt").unwrap();
        assert_eq!(parts.host, "host.example.com");
        assert_eq!(parts.port, "80");
        assert_eq!(parts.path, "/a.txt");
    }

    #[test]
    fn test_bare_host_defaults() {
        let parts = UrlParts::parse("http://h").unwrap();
        assert_eq!(parts.host, "h");
        assert_eq!(parts.port, "80");
        assert_eq!(parts.path, "/");
    }

    #[test]
    fn test_port_without_path() {
        let parts = UrlParts::parse("http://h:9090").unwrap();
        assert_eq!(parts.host, "h");
        assert_eq!(parts.port, "9090");
        assert_eq!(parts.path, "/");
    }

    #[test]
    fn test_missing_separator_is_fatal() {
        assert!(UrlParts::parse("host.example.com/a.txt").is_err());
    }
}
