use log::trace;

use crate::adapter::AdapterReplacement;
use crate::graph::*;

pub struct ReplaceAdapterNode {
    replacement: AdapterReplacement,
    idx: usize,
}

impl ReplaceAdapterNode {
    const NAME: &'static str = "ReplaceAdapterNode";

    /// Substitute `replacement` for the detected adapter of every trimmed record.
    ///
    /// Clean records pass through untouched.
    pub fn new(replacement: AdapterReplacement) -> Self {
        Self {
            replacement,
            idx: 0,
        }
    }
}

impl GraphNode for ReplaceAdapterNode {
    fn run(&mut self, record: Option<InfoRecord>) -> Result<(Option<InfoRecord>, bool)> {
        let Some(mut record) = record else { panic!("Expected some record!") };
        self.idx += 1;

        let InfoRecord::Trimmed(read) = &mut record else {
            return Ok((Some(record), false));
        };

        let anchor = self
            .replacement
            .apply(read)
            .map_err(|e| Error::ReplaceAdapter {
                read: utf8(&read.name),
                idx: self.idx,
                source: e,
            })?;
        trace!("Replaced {} adapter:\n{}", anchor, record);

        Ok((Some(record), false))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
