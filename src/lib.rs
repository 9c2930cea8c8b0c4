//! Convert read info records into fastq reads with a substituted adapter.
//!
//! # Overview
//! Adapter detection tools can report every read as one tab-separated line. A read
//! without an adapter has a negative error code, followed by its sequence and quality:
//! ```text
//! read1   -1   ACGTACGTAA   IIIIIIIIII
//! ```
//! A read with an adapter has a non-negative error code, the adapter coordinates,
//! the sequence split into left flank, adapter and right flank, the adapter name and
//! the matching quality pieces:
//! ```text
//! read2   0   2   8   AA   ACGTAC   GG   adapter1   ##   !!!!!!   $$
//! ```
//!
//! Each line becomes exactly one fastq record, in input order. Clean reads are copied
//! as they are. For reads with an adapter, the detected adapter is swapped for a
//! caller supplied one (see [`AdapterReplacement::replace`] for the exact rules):
//! ```text
//! @read2
//! AATTGG
//! +
//! ##!!$$
//! ```
//!
//! ## Graph API
//! Records flow through a [`Graph`] of nodes, one record at a time:
//! ```no_run
//! use info2fastq::*;
//!
//! let mut graph = Graph::new();
//! graph
//!     .add(InputInfoNode::stdin())
//!     .add(ReplaceAdapterNode::new(AdapterReplacement::new("AGATCGGAAGAGC")))
//!     .add(CollectFastqNode::new(None)?);
//! graph.run()?;
//! # Ok::<(), info2fastq::Error>(())
//! ```
//!
//! The first malformed line stops the run with an [`Error`]. Records written before
//! it stay written.

pub mod adapter;
pub mod errors;
pub mod fastq;
pub mod graph;
pub mod record;

mod parse_utils;

// commonly used functions and types

pub use crate::adapter::*;
pub use crate::errors::*;
pub use crate::fastq::*;
pub use crate::graph::node::*;
pub use crate::graph::*;
pub use crate::record::*;
