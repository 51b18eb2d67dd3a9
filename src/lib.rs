#![doc = include_str!("../README.md")]

mod dwell;
mod error;
mod graph;
mod huffman;
mod reader;
mod routing;
mod trees;

pub use dwell::{DEFAULT_DWELL_TIME, DwellTimes};
pub use error::{CodeFormatError, GraphFormatError, LoadError, NodeOutOfRange, TreeFormatError};
pub use graph::{Graph, Node, NodeId};
pub use huffman::CodeTable;
pub use reader::{load_graph, read_graph};
pub use routing::{ArrivalTimes, Route, earliest_arrivals};
pub use trees::{Tree, trees_equal};
