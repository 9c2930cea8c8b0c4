use crate::errors::*;
use crate::record::*;

pub mod node;

/// Chain of record operations, where each operation is a node.
///
/// Records are pulled from the first node one at a time and pushed through the rest
/// of the chain before the next one is read.
pub struct Graph<'a> {
    nodes: Vec<Box<dyn GraphNode + 'a>>,
}

pub trait GraphNode {
    /// Process one record. Source nodes receive `None` and produce records.
    ///
    /// The returned boolean is whether the graph is done executing.
    fn run(&mut self, record: Option<InfoRecord>) -> Result<(Option<InfoRecord>, bool)>;

    /// Called once after the last record.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str;
}

impl<'a> Graph<'a> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a record operation node to the end of the graph.
    pub fn add<G: GraphNode + 'a>(&mut self, node: G) -> &mut Self {
        self.nodes.push(Box::new(node));
        self
    }

    /// Run the graph until all records are processed, then finish every node.
    pub fn run(mut self) -> Result<()> {
        loop {
            let (_, done) = self.run_one(None)?;
            if done {
                break;
            }
        }

        self.nodes.iter_mut().try_for_each(|node| {
            log::trace!("Finishing {}", node.name());
            node.finish()
        })
    }

    /// Run a single record through the graph.
    ///
    /// Returns an additional boolean indicating whether the graph is done executing.
    pub fn run_one(&mut self, mut curr: Option<InfoRecord>) -> Result<(Option<InfoRecord>, bool)> {
        for node in &mut self.nodes {
            let (c, done) = node.run(curr)?;
            curr = c;

            if done {
                return Ok((curr, done));
            }
            if curr.is_none() {
                break;
            }
        }

        Ok((curr, false))
    }
}

impl Default for Graph<'_> {
    fn default() -> Self {
        Self::new()
    }
}
