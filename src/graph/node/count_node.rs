use crate::adapter::Anchor;
use crate::graph::*;

/// Number of records seen of each kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecordCounts {
    pub clean: usize,
    pub left_end: usize,
    pub right_end: usize,
    pub interior: usize,
}

impl RecordCounts {
    pub fn total(&self) -> usize {
        self.clean + self.left_end + self.right_end + self.interior
    }

    pub fn add(&mut self, record: &InfoRecord) {
        match record.anchor() {
            None => self.clean += 1,
            Some(Anchor::LeftEnd) => self.left_end += 1,
            Some(Anchor::RightEnd) => self.right_end += 1,
            Some(Anchor::Interior) => self.interior += 1,
        }
    }
}

pub struct CountNode<F: FnMut(&RecordCounts)> {
    counts: RecordCounts,
    func: F,
}

impl<F: FnMut(&RecordCounts)> CountNode<F> {
    const NAME: &'static str = "CountNode";

    /// Tally records by kind and hand the totals to `func` when the graph finishes.
    pub fn new(func: F) -> Self {
        Self {
            counts: RecordCounts::default(),
            func,
        }
    }
}

impl<F: FnMut(&RecordCounts)> GraphNode for CountNode<F> {
    fn run(&mut self, record: Option<InfoRecord>) -> Result<(Option<InfoRecord>, bool)> {
        let Some(record) = record else { panic!("Expected some record!") };
        self.counts.add(&record);
        Ok((Some(record), false))
    }

    fn finish(&mut self) -> Result<()> {
        (self.func)(&self.counts);
        Ok(())
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
