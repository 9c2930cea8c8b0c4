use memchr::memchr;

pub fn trim_ascii_whitespace(b: &[u8]) -> Option<&[u8]> {
    let start = b.iter().position(|&c| !c.is_ascii_whitespace())?;
    let end = b.iter().rposition(|&c| !c.is_ascii_whitespace())?;
    Some(&b[start..=end])
}

/// Strip every trailing `\n`. A `\r` is left in place.
pub fn trim_newline(mut b: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n'] = b {
        b = rest;
    }
    b
}

/// Parse a signed decimal integer, ignoring surrounding whitespace.
pub fn parse_int(b: &[u8]) -> Option<i64> {
    let b = trim_ascii_whitespace(b)?;
    std::str::from_utf8(b).ok()?.parse().ok()
}

/// Iterator over the tab-separated fields of a line.
///
/// An empty line still yields one empty field, and a trailing tab yields a
/// trailing empty field.
pub struct TabFields<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> TabFields<'a> {
    pub fn new(line: &'a [u8]) -> Self {
        Self { rest: Some(line) }
    }
}

impl<'a> Iterator for TabFields<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let rest = self.rest?;

        match memchr(b'\t', rest) {
            Some(i) => {
                self.rest = Some(&rest[i + 1..]);
                Some(&rest[..i])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_empty_fields() {
        let fields = TabFields::new(b"a\t\tb\t").collect::<Vec<_>>();
        assert_eq!(fields, vec![&b"a"[..], b"", b"b", b""]);
    }

    #[test]
    fn empty_line_is_one_field() {
        assert_eq!(TabFields::new(b"").count(), 1);
    }

    #[test]
    fn newline_trimming() {
        assert_eq!(trim_newline(b"abc\n"), b"abc");
        assert_eq!(trim_newline(b"abc\r\n"), b"abc\r");
        assert_eq!(trim_newline(b"abc"), b"abc");
        assert_eq!(trim_newline(b"\n\n"), b"");
    }

    #[test]
    fn integers() {
        assert_eq!(parse_int(b"-1"), Some(-1));
        assert_eq!(parse_int(b" 3 "), Some(3));
        assert_eq!(parse_int(b"+0"), Some(0));
        assert_eq!(parse_int(b"x1"), None);
        assert_eq!(parse_int(b""), None);
    }
}
