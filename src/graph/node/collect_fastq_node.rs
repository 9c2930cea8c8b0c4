use std::io::{self, Write};

use crate::fastq::*;
use crate::graph::*;

pub struct CollectFastqNode<'w> {
    writer: FastqOutput<'w>,
    file: Option<String>,
}

impl<'w> CollectFastqNode<'w> {
    const NAME: &'static str = "CollectFastqNode";

    /// Write every record as fastq to a file, or to stdout for `None` or `-`.
    pub fn new(file: Option<&str>) -> Result<Self> {
        let writer = open_output(file)?;
        let file = file.filter(|&f| f != "-").map(|f| f.to_owned());
        Ok(Self { writer, file })
    }

    /// Write every record as fastq to an arbitrary writer.
    pub fn from_writer(writer: impl Write + 'w) -> Self {
        Self {
            writer: FastqOutput::from_writer(writer),
            file: None,
        }
    }

    fn io_error(&self, e: io::Error) -> Error {
        match &self.file {
            Some(file) => Error::FileIo {
                file: file.clone(),
                source: Box::new(e),
            },
            None => Error::StdIo(Box::new(e)),
        }
    }
}

impl GraphNode for CollectFastqNode<'_> {
    fn run(&mut self, record: Option<InfoRecord>) -> Result<(Option<InfoRecord>, bool)> {
        let Some(record) = record else { panic!("Expected some record!") };

        write_fastq_record(&mut self.writer, record.to_fastq()).map_err(|e| self.io_error(e))?;

        Ok((Some(record), false))
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.finish().map_err(|e| self.io_error(e))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
