use std::fmt;

use crate::adapter::Anchor;
use crate::errors::*;
use crate::fastq::FastqRecord;
use crate::parse_utils::*;

/// One line of a read info file, decoded by the sign of its error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoRecord {
    /// Negative error code: no adapter was found.
    Clean(CleanRead),
    /// Non-negative error code: the read is split around a detected adapter.
    Trimmed(TrimmedRead),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanRead {
    pub name: Vec<u8>,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedRead {
    pub name: Vec<u8>,
    pub seq_left: Vec<u8>,
    pub seq_adapt: Vec<u8>,
    pub seq_right: Vec<u8>,
    pub qual_left: Vec<u8>,
    pub qual_adapt: Vec<u8>,
    pub qual_right: Vec<u8>,
}

// name and error code come first
const CLEAN_FIELDS: usize = 2 + 2;
const TRIMMED_FIELDS: usize = 2 + 9;

impl InfoRecord {
    /// Decode one tab-separated line. A trailing newline is ignored, as are any
    /// fields past the ones the record kind needs.
    pub fn from_line(line: &[u8]) -> std::result::Result<Self, RecordError> {
        let fields = TabFields::new(trim_newline(line)).collect::<Vec<_>>();

        let error_code = match fields.get(1) {
            Some(&f) => parse_int(f).ok_or_else(|| RecordError::InvalidErrorCode(utf8(f)))?,
            None => {
                return Err(RecordError::MissingFields {
                    kind: "info",
                    expected: 2,
                    found: fields.len(),
                })
            }
        };

        if error_code < 0 {
            let [name, _, seq, qual, ..] = fields[..] else {
                return Err(RecordError::MissingFields {
                    kind: "clean",
                    expected: CLEAN_FIELDS,
                    found: fields.len(),
                });
            };

            Ok(InfoRecord::Clean(CleanRead {
                name: name.to_owned(),
                seq: seq.to_owned(),
                qual: qual.to_owned(),
            }))
        } else {
            // start, end and the adapter name are not needed
            let [
                name,
                _,
                _,
                _,
                seq_left,
                seq_adapt,
                seq_right,
                _,
                qual_left,
                qual_adapt,
                qual_right,
                ..,
            ] = fields[..]
            else {
                return Err(RecordError::MissingFields {
                    kind: "trimmed",
                    expected: TRIMMED_FIELDS,
                    found: fields.len(),
                });
            };

            Ok(InfoRecord::Trimmed(TrimmedRead {
                name: name.to_owned(),
                seq_left: seq_left.to_owned(),
                seq_adapt: seq_adapt.to_owned(),
                seq_right: seq_right.to_owned(),
                qual_left: qual_left.to_owned(),
                qual_adapt: qual_adapt.to_owned(),
                qual_right: qual_right.to_owned(),
            }))
        }
    }

    /// Where the adapter sits in the read, or `None` for clean reads.
    pub fn anchor(&self) -> Option<Anchor> {
        match self {
            InfoRecord::Clean(_) => None,
            InfoRecord::Trimmed(r) => Some(r.anchor()),
        }
    }

    pub fn to_fastq(&self) -> FastqRecord<'_> {
        match self {
            InfoRecord::Clean(r) => FastqRecord {
                name: &r.name,
                seq: [&r.seq[..], &b""[..], &b""[..]],
                qual: [&r.qual[..], &b""[..], &b""[..]],
            },
            InfoRecord::Trimmed(r) => FastqRecord {
                name: &r.name,
                seq: [&r.seq_left[..], &r.seq_adapt[..], &r.seq_right[..]],
                qual: [&r.qual_left[..], &r.qual_adapt[..], &r.qual_right[..]],
            },
        }
    }
}

impl TrimmedRead {
    pub fn anchor(&self) -> Anchor {
        Anchor::of(&self.seq_left, &self.seq_right)
    }
}

impl fmt::Display for InfoRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InfoRecord::Clean(r) => {
                writeln!(f, "name  {}", utf8(&r.name))?;
                writeln!(f, "seq   {}", utf8(&r.seq))?;
                writeln!(f, "qual  {}", utf8(&r.qual))
            }
            InfoRecord::Trimmed(r) => {
                writeln!(f, "name  {}", utf8(&r.name))?;
                writeln!(f, "*     {}", r.anchor())?;
                writeln!(
                    f,
                    "seq   {}|{}|{}",
                    utf8(&r.seq_left),
                    utf8(&r.seq_adapt),
                    utf8(&r.seq_right)
                )?;
                writeln!(
                    f,
                    "qual  {}|{}|{}",
                    utf8(&r.qual_left),
                    utf8(&r.qual_adapt),
                    utf8(&r.qual_right)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_line() {
        let record = InfoRecord::from_line(b"r1\t-1\tACGT\tIIII\textra\n").unwrap();
        assert_eq!(
            record,
            InfoRecord::Clean(CleanRead {
                name: b"r1".to_vec(),
                seq: b"ACGT".to_vec(),
                qual: b"IIII".to_vec(),
            })
        );
        assert_eq!(record.anchor(), None);
    }

    #[test]
    fn trimmed_line() {
        let line = b"r2\t0\t2\t8\tAA\tACGTAC\tGG\tadapter1\t##\t!!!!!!\t$$\tx\ty\n";
        let InfoRecord::Trimmed(read) = InfoRecord::from_line(line).unwrap() else {
            panic!("expected a trimmed read");
        };
        assert_eq!(read.name, b"r2");
        assert_eq!(read.seq_left, b"AA");
        assert_eq!(read.seq_adapt, b"ACGTAC");
        assert_eq!(read.seq_right, b"GG");
        assert_eq!(read.qual_left, b"##");
        assert_eq!(read.qual_adapt, b"!!!!!!");
        assert_eq!(read.qual_right, b"$$");
        assert_eq!(read.anchor(), Anchor::Interior);
    }

    #[test]
    fn zero_error_code_is_trimmed() {
        let line = b"r\t0\t0\t3\t\tACG\tTT\ta\t\t!!!\t##";
        assert!(matches!(
            InfoRecord::from_line(line),
            Ok(InfoRecord::Trimmed(_))
        ));
    }

    #[test]
    fn fastq_pieces() {
        let line = b"r\t1\t0\t3\t\tACG\tTT\ta\t\t!!!\t##";
        let record = InfoRecord::from_line(line).unwrap();
        let fastq = record.to_fastq();
        assert_eq!(fastq.name, b"r");
        assert_eq!(fastq.seq(), b"ACGTT");
        assert_eq!(fastq.qual(), b"!!!##");
        assert_eq!(record.anchor(), Some(Anchor::LeftEnd));
    }

    #[test]
    fn missing_fields() {
        assert_eq!(
            InfoRecord::from_line(b"r\t-1\tACGT\n"),
            Err(RecordError::MissingFields {
                kind: "clean",
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            InfoRecord::from_line(b"r\t2\t0\t3\tA\tC\tG\ta\t#\t!"),
            Err(RecordError::MissingFields {
                kind: "trimmed",
                expected: 11,
                found: 10
            })
        );
        assert!(matches!(
            InfoRecord::from_line(b"\n"),
            Err(RecordError::MissingFields { found: 1, .. })
        ));
    }

    #[test]
    fn bad_error_code() {
        assert_eq!(
            InfoRecord::from_line(b"r\tminus\tACGT\tIIII"),
            Err(RecordError::InvalidErrorCode("minus".to_owned()))
        );
    }
}
