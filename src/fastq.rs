use flate2::{write::GzEncoder, Compression};
use log::debug;

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::errors::*;

/// Where the input records come from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    File(String),
    Stdin,
    Bytes,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Origin::*;
        match self {
            File(file) => write!(f, "\"{}\"", file),
            Stdin => write!(f, "stdin"),
            Bytes => write!(f, "bytes"),
        }
    }
}

/// A fastq record borrowed from an info record.
///
/// The sequence and quality are kept as ordered pieces so that a read split around
/// its adapter can be written without joining it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastqRecord<'a> {
    pub name: &'a [u8],
    pub seq: [&'a [u8]; 3],
    pub qual: [&'a [u8]; 3],
}

impl FastqRecord<'_> {
    pub fn seq(&self) -> Vec<u8> {
        self.seq.concat()
    }

    pub fn qual(&self) -> Vec<u8> {
        self.qual.concat()
    }
}

pub fn write_fastq_record(writer: &mut (dyn Write + '_), record: FastqRecord) -> io::Result<()> {
    writer.write_all(b"@")?;
    writer.write_all(record.name)?;
    writer.write_all(b"\n")?;
    for s in record.seq {
        writer.write_all(s)?;
    }
    writer.write_all(b"\n+\n")?;
    for q in record.qual {
        writer.write_all(q)?;
    }
    writer.write_all(b"\n")
}

/// Destination for fastq records.
///
/// Gzip output is kept as its own variant so the stream can be finished, and any error
/// writing the trailer reported, before the writer is dropped.
pub enum FastqOutput<'w> {
    Plain(Box<dyn Write + 'w>),
    Gzip(BufWriter<GzEncoder<File>>),
}

impl<'w> FastqOutput<'w> {
    pub fn from_writer(writer: impl Write + 'w) -> Self {
        FastqOutput::Plain(Box::new(writer))
    }

    /// Flush everything and write the gzip trailer if there is one.
    pub fn finish(&mut self) -> io::Result<()> {
        match self {
            FastqOutput::Plain(w) => w.flush(),
            FastqOutput::Gzip(w) => {
                w.flush()?;
                w.get_mut().try_finish()
            }
        }
    }
}

impl Write for FastqOutput<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FastqOutput::Plain(w) => w.write(buf),
            FastqOutput::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FastqOutput::Plain(w) => w.flush(),
            FastqOutput::Gzip(w) => w.flush(),
        }
    }
}

/// Open the fastq output. `None` or `-` writes to stdout and paths ending in `.gz`
/// are gzip compressed.
pub fn open_output(path: Option<&str>) -> Result<FastqOutput<'static>> {
    match path {
        None | Some("-") => {
            debug!("Writing fastq records to stdout");
            Ok(FastqOutput::from_writer(BufWriter::new(io::stdout().lock())))
        }
        Some(file) => {
            debug!("Writing fastq records to \"{}\"", file);

            if let Some(parent) = std::path::Path::new(file).parent() {
                std::fs::create_dir_all(parent).map_err(|e| Error::FileIo {
                    file: file.to_owned(),
                    source: Box::new(e),
                })?;
            }

            let f = File::create(file).map_err(|e| Error::FileIo {
                file: file.to_owned(),
                source: Box::new(e),
            })?;

            if file.ends_with(".gz") {
                Ok(FastqOutput::Gzip(BufWriter::new(GzEncoder::new(
                    f,
                    Compression::default(),
                ))))
            } else {
                Ok(FastqOutput::from_writer(BufWriter::new(f)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_line_block() {
        let mut out = Vec::new();
        let record = FastqRecord {
            name: b"read1",
            seq: [&b"AA"[..], b"TT", b"GG"],
            qual: [&b"##"[..], b"!!", b"##"],
        };
        write_fastq_record(&mut out, record).unwrap();
        assert_eq!(out, b"@read1\nAATTGG\n+\n##!!##\n");
    }

    #[test]
    fn gzip_output_complete_after_finish() {
        use flate2::read::MultiGzDecoder;
        use std::io::Read;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reads.fastq.gz");
        let path = path.to_str().unwrap();

        let mut output = open_output(Some(path)).unwrap();
        assert!(matches!(output, FastqOutput::Gzip(_)));
        let record = FastqRecord {
            name: b"r",
            seq: [&b"AC"[..], b"", b""],
            qual: [&b"II"[..], b"", b""],
        };
        write_fastq_record(&mut output, record).unwrap();
        output.finish().unwrap();

        // read back while the writer is still alive, so nothing relies on drop
        let mut fastq = Vec::new();
        MultiGzDecoder::new(File::open(path).unwrap())
            .read_to_end(&mut fastq)
            .unwrap();
        assert_eq!(fastq, b"@r\nAC\n+\nII\n");
        drop(output);
    }
}
