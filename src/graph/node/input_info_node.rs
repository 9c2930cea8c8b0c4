use flate2::read::MultiGzDecoder;
use log::debug;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::errors::*;
use crate::fastq::Origin;
use crate::graph::*;

pub struct InputInfoNode<'reader> {
    reader: Box<dyn BufRead + 'reader>,
    origin: Origin,
    line: usize,
    buf: Vec<u8>,
}

impl<'reader> InputInfoNode<'reader> {
    const NAME: &'static str = "InputInfoNode";

    /// Stream records from a tab-separated info file. Files ending in `.gz` are
    /// decompressed.
    pub fn new(file: impl AsRef<str>) -> Result<Self> {
        let file = file.as_ref();
        debug!("Reading info records from \"{}\"", file);

        let f = File::open(file).map_err(|e| Error::FileIo {
            file: file.to_owned(),
            source: Box::new(e),
        })?;

        let reader: Box<dyn BufRead> = if file.ends_with(".gz") {
            Box::new(BufReader::new(MultiGzDecoder::new(f)))
        } else {
            Box::new(BufReader::new(f))
        };

        Ok(Self::from_reader(reader, Origin::File(file.to_owned())))
    }

    /// Stream records from stdin.
    pub fn stdin() -> Self {
        debug!("Reading info records from stdin");
        Self::from_reader(Box::new(io::stdin().lock()), Origin::Stdin)
    }

    /// Stream records from a byte slice.
    pub fn from_bytes(bytes: &'reader [u8]) -> Self {
        Self::from_reader(Box::new(bytes), Origin::Bytes)
    }

    pub fn from_reader(reader: Box<dyn BufRead + 'reader>, origin: Origin) -> Self {
        Self {
            reader,
            origin,
            line: 0,
            buf: Vec::new(),
        }
    }

    fn io_error(&self, e: io::Error) -> Error {
        match &self.origin {
            Origin::File(file) => Error::FileIo {
                file: file.clone(),
                source: Box::new(e),
            },
            _ => Error::StdIo(Box::new(e)),
        }
    }
}

impl GraphNode for InputInfoNode<'_> {
    fn run(&mut self, record: Option<InfoRecord>) -> Result<(Option<InfoRecord>, bool)> {
        assert!(record.is_none(), "Expected no input records for {}", Self::NAME);

        self.buf.clear();
        let n = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| self.io_error(e))?;

        if n == 0 {
            return Ok((None, true));
        }

        self.line += 1;

        let record = InfoRecord::from_line(&self.buf).map_err(|e| Error::ParseRecord {
            origin: self.origin.clone(),
            line: self.line,
            source: Box::new(e),
        })?;

        Ok((Some(record), false))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
