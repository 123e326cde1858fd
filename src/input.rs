//! Workload files: `num_pages num_frames num_requests` followed by the
//! reference string, all whitespace separated.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

const BOM: char = '\u{feff}';

/// Everything a simulation run needs from its input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    /// Size of the virtual address space in pages. Informational only.
    pub num_pages: usize,
    pub num_frames: usize,
    pub requests: Vec<u32>,
}

impl Workload {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        return Self::parse(&text);
    }

    /// Parses a workload, tolerating a leading byte-order mark.
    ///
    /// Anything after the last expected request is ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.strip_prefix(BOM).unwrap_or(text);
        let mut tokens = Tokens {
            inner: text.split_ascii_whitespace(),
            position: 0,
        };

        let num_pages: usize = tokens.next("number of pages")?;
        let num_frames: usize = tokens.next("number of frames")?;
        let num_requests: usize = tokens.next("number of requests")?;

        if num_frames == 0 {
            return Err(Error::NoFrames);
        }

        // the header count is untrusted until the tokens are actually there
        let mut requests = Vec::new();
        for i in 0..num_requests {
            let expected = format!("request {} of {}", i + 1, num_requests);
            requests.push(tokens.next(&expected)?);
        }

        return Ok(Self {
            num_pages,
            num_frames,
            requests,
        });
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} {}",
            self.num_pages,
            self.num_frames,
            self.requests.len()
        )?;
        let line = self
            .requests
            .iter()
            .map(|page| page.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        return writeln!(f, "{}", line);
    }
}

struct Tokens<'a> {
    inner: std::str::SplitAsciiWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn next<T: FromStr>(&mut self, expected: &str) -> Result<T> {
        let token = self.inner.next().ok_or_else(|| Error::UnexpectedEof {
            expected: expected.to_string(),
        })?;
        self.position += 1;

        return token.parse().map_err(|_| Error::InvalidToken {
            token: token.to_string(),
            position: self.position,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let workload = Workload::parse("8 3 5\n1 2 3 1 4\n").unwrap();
        assert_eq!(workload.num_pages, 8);
        assert_eq!(workload.num_frames, 3);
        assert_eq!(workload.requests, vec![1, 2, 3, 1, 4]);
    }

    #[test]
    fn test_parse_skips_bom() {
        let workload = Workload::parse("\u{feff}5 2 3 0 1 0").unwrap();
        assert_eq!(workload.num_pages, 5);
        assert_eq!(workload.requests, vec![0, 1, 0]);
    }

    #[test]
    fn test_parse_mixed_whitespace() {
        let workload = Workload::parse("  4\t2\r\n3\n\n7\n 8 \t9").unwrap();
        assert_eq!(workload.num_frames, 2);
        assert_eq!(workload.requests, vec![7, 8, 9]);
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        let workload = Workload::parse("4 2 2 1 2 3 4 junk").unwrap();
        assert_eq!(workload.requests, vec![1, 2]);
    }

    #[test]
    fn test_parse_zero_requests() {
        let workload = Workload::parse("4 2 0").unwrap();
        assert!(workload.requests.is_empty());
    }

    #[test]
    fn test_parse_missing_header() {
        match Workload::parse("4 2") {
            Err(Error::UnexpectedEof { expected }) => assert_eq!(expected, "number of requests"),
            other => panic!("Expected UnexpectedEof, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_requests() {
        match Workload::parse("4 2 5 1 2") {
            Err(Error::UnexpectedEof { expected }) => assert_eq!(expected, "request 3 of 5"),
            other => panic!("Expected UnexpectedEof, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_huge_request_count_is_short_input() {
        match Workload::parse("4 2 1000000000000000000 1 2") {
            Err(Error::UnexpectedEof { expected }) => {
                assert_eq!(expected, "request 3 of 1000000000000000000")
            }
            other => panic!("Expected UnexpectedEof, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_negative_and_garbage() {
        match Workload::parse("4 -2 1 1") {
            Err(Error::InvalidToken { token, position }) => {
                assert_eq!(token, "-2");
                assert_eq!(position, 2);
            }
            other => panic!("Expected InvalidToken, got {:?}", other),
        }

        assert!(matches!(
            Workload::parse("4 2 2 1 x"),
            Err(Error::InvalidToken { position: 5, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_zero_frames() {
        assert!(matches!(Workload::parse("4 0 1 1"), Err(Error::NoFrames)));
    }

    #[test]
    fn test_bom_only_in_front() {
        assert!(matches!(
            Workload::parse("4 2 1 \u{feff}1"),
            Err(Error::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_display_reparses() {
        let workload = Workload {
            num_pages: 6,
            num_frames: 3,
            requests: vec![5, 0, 5, 2],
        };
        assert_eq!(workload.to_string(), "6 3 4\n5 0 5 2\n");
        assert_eq!(Workload::parse(&workload.to_string()).unwrap(), workload);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Workload::read(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
