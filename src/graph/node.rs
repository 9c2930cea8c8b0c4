/// Graph nodes that process info records.

pub mod input_info_node;
pub use input_info_node::*;

pub mod replace_adapter_node;
pub use replace_adapter_node::*;

pub mod count_node;
pub use count_node::*;

pub mod collect_fastq_node;
pub use collect_fastq_node::*;
