//! GraphPoet: builds a word-adjacency graph and bridges input text through it

use super::bridge::{best_bridge, Bridge};
use super::tokenize::{corpus_words, input_tokens, is_word};
use crate::graph::WeightedGraph;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while building a poet
#[derive(Debug, Error)]
pub enum PoetError {
    #[error("Cannot read corpus {}: {source}", .path.display())]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for poet operations
pub type PoetResult<T> = Result<T, PoetError>;

/// Generates poems from a word-adjacency graph
///
/// Vertices are lower-cased corpus words. An edge `w1 → w2` with weight `n`
/// means `w1` was immediately followed by `w2` exactly `n` times in the
/// corpus. The graph is fixed once the poet is built.
#[derive(Debug, Clone, Default)]
pub struct GraphPoet {
    graph: WeightedGraph<String>,
}

impl GraphPoet {
    /// Build a poet from corpus lines
    ///
    /// Lines are joined with a single space, so a word at the end of one line
    /// is adjacent to the first word of the next.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                corpus.push(' ');
            }
            corpus.push_str(line.as_ref());
        }

        let words = corpus_words(&corpus);
        let mut graph = WeightedGraph::new();
        for word in &words {
            graph.add_vertex(word.clone());
        }
        for pair in words.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            let count = graph.weight(current, next).saturating_add(1);
            graph.set_edge(current.clone(), next.clone(), count);
        }

        debug!(
            words = words.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "Built word-adjacency graph"
        );
        Self { graph }
    }

    /// Build a poet from a line-oriented UTF-8 reader
    ///
    /// Fails without building anything if any line cannot be read.
    pub fn from_reader<R: BufRead>(reader: R) -> PoetResult<Self> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_lines(lines))
    }

    /// Build a poet from a corpus file
    pub fn from_path(path: impl AsRef<Path>) -> PoetResult<Self> {
        let path = path.as_ref();
        let corpus_read = |source| PoetError::CorpusRead {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(corpus_read)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(corpus_read)?;

        debug!(path = %path.display(), lines = lines.len(), "Read corpus");
        Ok(Self::from_lines(lines))
    }

    /// The word-adjacency graph
    pub fn graph(&self) -> &WeightedGraph<String> {
        &self.graph
    }

    /// Best bridge word from `word1` to `word2` (both already lower-cased)
    pub fn bridge(&self, word1: &str, word2: &str) -> Option<Bridge<'_>> {
        best_bridge(&self.graph, word1, word2)
    }

    /// Insert bridge words into `input`
    ///
    /// The input is split on whitespace and re-joined with single spaces.
    /// Between each adjacent pair of tokens that are both plain words, the
    /// best bridge word (if any) is inserted in lower case. Tokens carrying
    /// punctuation are kept verbatim but never bridged.
    pub fn poem(&self, input: &str) -> String {
        let tokens = input_tokens(input);
        let Some(last) = tokens.last() else {
            return String::new();
        };

        let mut poem = String::with_capacity(input.len());
        for pair in tokens.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            poem.push_str(current);
            poem.push(' ');

            let word1 = current.to_lowercase();
            let word2 = next.to_lowercase();
            if !is_word(&word1) || !is_word(&word2) {
                continue;
            }
            if let Some(bridge) = self.bridge(&word1, &word2) {
                debug!(from = %word1, to = %word2, bridge = bridge.word, score = bridge.score, "Bridged");
                poem.push_str(bridge.word);
                poem.push(' ');
            }
        }
        poem.push_str(last);
        poem
    }
}
