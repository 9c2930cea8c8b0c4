use std::fmt;

use crate::errors::*;
use crate::record::TrimmedRead;

pub use Anchor::*;

/// Where a detected adapter sits within its read.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Anchor {
    /// Nothing to the left of the adapter.
    LeftEnd,
    /// Nothing to the right of the adapter.
    RightEnd,
    /// Bases on both sides.
    Interior,
}

impl Anchor {
    /// Classify by the flanking sequences. A read that is all adapter counts as
    /// left anchored.
    pub fn of(seq_left: &[u8], seq_right: &[u8]) -> Self {
        if seq_left.is_empty() {
            LeftEnd
        } else if seq_right.is_empty() {
            RightEnd
        } else {
            Interior
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LeftEnd => write!(f, "left end"),
            RightEnd => write!(f, "right end"),
            Interior => write!(f, "interior"),
        }
    }
}

/// The adapter sequence substituted into every trimmed read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdapterReplacement {
    adapter: Vec<u8>,
}

impl AdapterReplacement {
    pub fn new(adapter: impl AsRef<[u8]>) -> Self {
        Self {
            adapter: adapter.as_ref().to_owned(),
        }
    }

    pub fn adapter(&self) -> &[u8] {
        &self.adapter
    }

    pub fn len(&self) -> usize {
        self.adapter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapter.is_empty()
    }

    /// Compute the new adapter sequence and quality for a detected adapter.
    ///
    /// For anchored adapters the new sequence is cut to at most the detected length,
    /// keeping the end next to the anchor, and the existing quality string is cut the
    /// same way. Interior adapters get the whole new sequence. Their quality is the
    /// existing one cut to the new length, or padded with its last character by
    /// `new length - detected length` when the new adapter is longer.
    pub fn replace(
        &self,
        seq_adapt: &[u8],
        qual_adapt: &[u8],
        anchor: Anchor,
    ) -> std::result::Result<(Vec<u8>, Vec<u8>), RecordError> {
        let new_len = self.adapter.len();
        let top = seq_adapt.len().min(new_len);

        let res = match anchor {
            LeftEnd => (
                self.adapter[new_len - top..].to_owned(),
                qual_adapt[qual_adapt.len().saturating_sub(top)..].to_owned(),
            ),
            RightEnd => (
                self.adapter[..top].to_owned(),
                qual_adapt[..top.min(qual_adapt.len())].to_owned(),
            ),
            Interior => {
                let &last = qual_adapt.last().ok_or(RecordError::EmptyAdapterQuality)?;
                // padding is counted against the detected sequence length, not the
                // length of the quality that was kept
                let pad = new_len.saturating_sub(seq_adapt.len());

                let mut qual = Vec::with_capacity(new_len.max(qual_adapt.len()) + pad);
                qual.extend_from_slice(&qual_adapt[..new_len.min(qual_adapt.len())]);
                qual.resize(qual.len() + pad, last);

                (self.adapter.clone(), qual)
            }
        };

        Ok(res)
    }

    /// Replace the adapter of a trimmed read in place.
    pub fn apply(&self, read: &mut TrimmedRead) -> std::result::Result<Anchor, RecordError> {
        let anchor = read.anchor();
        let (seq, qual) = self.replace(&read.seq_adapt, &read.qual_adapt, anchor)?;
        read.seq_adapt = seq;
        read.qual_adapt = qual;
        Ok(anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replaced(adapter: &str, seq: &str, qual: &str, anchor: Anchor) -> (String, String) {
        let (s, q) = AdapterReplacement::new(adapter)
            .replace(seq.as_bytes(), qual.as_bytes(), anchor)
            .unwrap();
        (utf8(&s), utf8(&q))
    }

    #[test]
    fn classify() {
        assert_eq!(Anchor::of(b"", b"GG"), LeftEnd);
        assert_eq!(Anchor::of(b"AA", b""), RightEnd);
        assert_eq!(Anchor::of(b"AA", b"GG"), Interior);
        assert_eq!(Anchor::of(b"", b""), LeftEnd);
    }

    #[test]
    fn left_end_keeps_tail() {
        assert_eq!(
            replaced("TTTT", "ACGTAC", "!!!!!!", LeftEnd),
            ("TTTT".to_owned(), "!!!!".to_owned())
        );
        assert_eq!(
            replaced("ABCDEF", "XYZ", "123", LeftEnd),
            ("DEF".to_owned(), "123".to_owned())
        );
        assert_eq!(
            replaced("ABC", "WXYZ", "1234", LeftEnd),
            ("ABC".to_owned(), "234".to_owned())
        );
    }

    #[test]
    fn right_end_keeps_head() {
        assert_eq!(
            replaced("TTTT", "ACGTAC", "!!!!!!", RightEnd),
            ("TTTT".to_owned(), "!!!!".to_owned())
        );
        assert_eq!(
            replaced("ABCDEF", "XYZ", "123", RightEnd),
            ("ABC".to_owned(), "123".to_owned())
        );
        assert_eq!(
            replaced("ABC", "WXYZ", "1234", RightEnd),
            ("ABC".to_owned(), "123".to_owned())
        );
    }

    #[test]
    fn interior_shorter_adapter() {
        assert_eq!(
            replaced("TT", "ACGTAC", "!!!!!!", Interior),
            ("TT".to_owned(), "!!".to_owned())
        );
    }

    #[test]
    fn interior_longer_adapter() {
        assert_eq!(
            replaced("TTTTTTTT", "ACGTAC", "!!!!!!", Interior),
            ("TTTTTTTT".to_owned(), "!!!!!!!!".to_owned())
        );
        assert_eq!(
            replaced("TTTTT", "ACG", "123", Interior),
            ("TTTTT".to_owned(), "12333".to_owned())
        );
    }

    #[test]
    fn interior_pad_uses_sequence_length() {
        // quality shorter than the detected sequence still pads by the sequence difference
        assert_eq!(
            replaced("TTTTT", "ACGT", "12", Interior),
            ("TTTTT".to_owned(), "122".to_owned())
        );
    }

    #[test]
    fn zero_length_take() {
        assert_eq!(
            replaced("TTTT", "", "", LeftEnd),
            (String::new(), String::new())
        );
        assert_eq!(
            replaced("", "ACG", "!!!", RightEnd),
            (String::new(), String::new())
        );
    }

    #[test]
    fn lengths_are_bytes() {
        let replacement = AdapterReplacement::new("é");
        assert_eq!(replacement.len(), 2);

        // two bytes of adapter against one detected base pads the quality by one
        let (seq, qual) = replacement.replace(b"A", b"!", Interior).unwrap();
        assert_eq!(seq, "é".as_bytes());
        assert_eq!(qual, b"!!");

        // an anchored take can end inside a multi-byte character
        let (seq, qual) = AdapterReplacement::new("éT")
            .replace(b"A", b"!", RightEnd)
            .unwrap();
        assert_eq!(seq, [0xC3u8]);
        assert_eq!(qual, b"!");

        let (seq, qual) = AdapterReplacement::new("Té")
            .replace(b"A", b"!", LeftEnd)
            .unwrap();
        assert_eq!(seq, [0xA9u8]);
        assert_eq!(qual, b"!");
    }

    #[test]
    fn interior_without_quality() {
        assert_eq!(
            AdapterReplacement::new("TT").replace(b"AC", b"", Interior),
            Err(RecordError::EmptyAdapterQuality)
        );
    }

    #[test]
    fn apply_in_place() {
        let mut read = TrimmedRead {
            name: b"r".to_vec(),
            seq_left: b"AA".to_vec(),
            seq_adapt: b"ACGTAC".to_vec(),
            seq_right: b"GG".to_vec(),
            qual_left: b"##".to_vec(),
            qual_adapt: b"!!!!!!".to_vec(),
            qual_right: b"$$".to_vec(),
        };
        let anchor = AdapterReplacement::new("TT").apply(&mut read).unwrap();
        assert_eq!(anchor, Interior);
        assert_eq!(read.seq_adapt, b"TT");
        assert_eq!(read.qual_adapt, b"!!");
        assert_eq!(read.seq_left, b"AA");
        assert_eq!(read.qual_right, b"$$");
    }
}
