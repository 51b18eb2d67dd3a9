use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use crate::NodeId;

/// An edge endpoint that does not refer to a node of the graph.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("node {id} is out of range for a graph of {node_count} nodes")]
pub struct NodeOutOfRange {
    pub id: NodeId,
    pub node_count: usize,
}

/// Errors produced while parsing a textual graph description.
#[derive(Error, Debug, PartialEq)]
pub enum GraphFormatError {
    #[error("line {line}: missing {what} count")]
    MissingCount { what: &'static str, line: usize },
    #[error("line {line}: invalid {what} count `{content}`")]
    InvalidCount {
        what: &'static str,
        line: usize,
        content: String,
    },
    #[error("line {line}: expected `from to travel_time`, got `{content}`")]
    MalformedEdge { line: usize, content: String },
    #[error("line {line}: travel time `{content}` is not a finite number")]
    NonFiniteTravelTime { line: usize, content: String },
    #[error("line {line}: {source}")]
    EdgeEndpoint {
        line: usize,
        #[source]
        source: NodeOutOfRange,
    },
    #[error("I/O error: {0:?}")]
    Io(ErrorKind),
}

/// Errors produced while loading a graph description from a file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open `{path}`")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`{path}`")]
    Format {
        path: PathBuf,
        #[source]
        source: GraphFormatError,
    },
}

/// Errors produced while parsing a tree description.
#[derive(Error, Debug, PartialEq)]
pub enum TreeFormatError {
    #[error("line {line}: expected `parent,child`, got `{content}`")]
    MalformedPair { line: usize, content: String },
    #[error("line {line}: invalid label `{token}`")]
    InvalidLabel { line: usize, token: String },
    #[error("no root: every label appears as a child")]
    MissingRoot,
    #[error("multiple roots: {0:?}")]
    MultipleRoots(Vec<i64>),
    #[error("unbalanced bracket at position {0}")]
    UnbalancedBracket(usize),
    #[error("expected label after `[` at position {0}")]
    MissingLabel(usize),
    #[error("unexpected character `{character}` at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("empty tree description")]
    Empty,
    #[error("I/O error: {0:?}")]
    Io(ErrorKind),
}

/// Errors produced while decoding a bit string against a code table.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CodeFormatError {
    #[error("expected a binary digit at position {position}, got `{character}`")]
    NonBinaryDigit { position: usize, character: char },
}

impl From<std::io::Error> for GraphFormatError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.kind())
    }
}

impl From<std::io::Error> for TreeFormatError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.kind())
    }
}
