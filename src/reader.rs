use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{GraphFormatError, LoadError};
use crate::{DwellTimes, Graph, NodeId};

/// Reads a graph description from a file.
///
/// See [`read_graph`] for the format. Errors carry the file path so they can
/// be reported to the user as-is.
pub fn load_graph(path: impl AsRef<Path>, dwell: &DwellTimes) -> Result<Graph, LoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    read_graph(BufReader::new(file), dwell).map_err(|source| LoadError::Format {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a graph description:
///
/// - line 1: node count `n` (nodes are implicitly `0..n`),
/// - line 2: edge count `m`,
/// - every following non-empty line: `from to travel_time`.
///
/// The edge count is informational: the reader accepts fewer or more edge
/// lines than announced and only logs the mismatch. Malformed lines, edge
/// endpoints outside `[0, n)` and non-finite travel times are fatal.
/// Negative travel times load, but earliest-arrival correctness is not
/// guaranteed on such graphs, so they are logged as warnings.
pub fn read_graph(input: impl BufRead, dwell: &DwellTimes) -> Result<Graph, GraphFormatError> {
    let mut lines = input.lines();

    let node_count = read_count(&mut lines, "node", 1)?;
    let edge_count = read_count(&mut lines, "edge", 2)?;

    let mut graph = Graph::new(node_count, dwell);

    for (index, line) in lines.enumerate() {
        let line = line?;
        let content = line.trim();
        if content.is_empty() {
            continue;
        }

        let number = index + 3;
        let (from, to, travel_time) = parse_edge(content, number)?;

        if travel_time < 0.0 {
            warn!(
                "line {number}: negative travel time {travel_time}: \
                 earliest-arrival correctness is not guaranteed"
            );
        }

        graph
            .insert_edge(from, to, travel_time)
            .map_err(|source| GraphFormatError::EdgeEndpoint { line: number, source })?;
    }

    if graph.edge_count() != edge_count {
        warn!(
            "edge count mismatch: header announces {edge_count}, found {}",
            graph.edge_count()
        );
    }

    debug!(
        "Read graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

fn read_count(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    what: &'static str,
    line: usize,
) -> Result<usize, GraphFormatError> {
    let content = lines
        .next()
        .transpose()?
        .ok_or(GraphFormatError::MissingCount { what, line })?;
    let content = content.trim();

    content
        .parse()
        .map_err(|_| GraphFormatError::InvalidCount {
            what,
            line,
            content: content.to_owned(),
        })
}

fn parse_edge(content: &str, line: usize) -> Result<(NodeId, NodeId, f64), GraphFormatError> {
    let malformed = || GraphFormatError::MalformedEdge {
        line,
        content: content.to_owned(),
    };

    let mut tokens = content.split_whitespace();
    let from = tokens.next().ok_or_else(malformed)?;
    let to = tokens.next().ok_or_else(malformed)?;
    let travel_time = tokens.next().ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed());
    }

    let from = from.parse().map_err(|_| malformed())?;
    let to = to.parse().map_err(|_| malformed())?;
    let travel_time: f64 = travel_time.parse().map_err(|_| malformed())?;

    if !travel_time.is_finite() {
        return Err(GraphFormatError::NonFiniteTravelTime {
            line,
            content: content.to_owned(),
        });
    }

    Ok((from, to, travel_time))
}
