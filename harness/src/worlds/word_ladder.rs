//! `WordLadder`: words connected by single-letter substitutions.
//!
//! Only the dictionary is stored; edges are computed on demand by trying
//! every alphabet letter in every position.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use log::debug;
use pathfinder_search::contract::Graph;
use pathfinder_search::edge::Edge;
use pathfinder_search::error::SearchError;
use rand::RngCore;

use crate::contract::{content_lines, read_text, GraphSummary, LoadError};

#[derive(Debug, Clone, Default)]
pub struct WordLadder {
    dictionary: HashSet<String>,
    alphabet: BTreeSet<char>,
}

impl WordLadder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dictionary file, one word per line.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the file is unreadable.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let ladder = Self::from_text(&read_text(path)?);
        debug!(
            "loaded {} words over {} letters from {}",
            ladder.dictionary.len(),
            ladder.alphabet.len(),
            path.display()
        );
        Ok(ladder)
    }

    /// Build a dictionary from text. Comment lines start with `#`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut ladder = Self::new();
        for (_, word) in content_lines(text) {
            ladder.add_word(word);
        }
        ladder
    }

    /// Add `word` in lower case. Words with non-letters are ignored.
    /// Returns whether the word was accepted.
    pub fn add_word(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return false;
        }
        let word = word.to_lowercase();
        self.alphabet.extend(word.chars());
        self.dictionary.insert(word);
        true
    }

    /// Letters seen in the dictionary, sorted.
    #[must_use]
    pub fn alphabet(&self) -> String {
        self.alphabet.iter().collect()
    }
}

impl Graph for WordLadder {
    type Vertex = String;

    fn vertices(&self) -> Result<HashSet<String>, SearchError> {
        Ok(self.dictionary.clone())
    }

    fn outgoing_edges(&self, v: &String) -> Vec<Edge<String>> {
        let mut chars: Vec<char> = v.chars().collect();
        let mut edges = Vec::new();
        for i in 0..chars.len() {
            let original = chars[i];
            for &c in &self.alphabet {
                if c == original {
                    continue;
                }
                chars[i] = c;
                let candidate: String = chars.iter().collect();
                if self.dictionary.contains(&candidate) {
                    edges.push(Edge::new(v.clone(), candidate));
                }
            }
            chars[i] = original;
        }
        edges
    }

    fn is_weighted(&self) -> bool {
        false
    }

    /// Number of positions where the words differ. Ladders never change
    /// length, so words of different lengths are infinitely far apart.
    #[allow(clippy::cast_precision_loss)]
    fn guess_cost(&self, v: &String, w: &String) -> f64 {
        if v.chars().count() != w.chars().count() {
            return f64::INFINITY;
        }
        v.chars().zip(w.chars()).filter(|(a, b)| a != b).count() as f64
    }

    fn parse_vertex(&self, s: &str) -> Result<String, SearchError> {
        let word = s.trim().to_lowercase();
        if self.dictionary.contains(&word) {
            Ok(word)
        } else {
            Err(SearchError::parse(s, "unknown word"))
        }
    }

    fn num_vertices(&self) -> Result<usize, SearchError> {
        Ok(self.dictionary.len())
    }
}

impl GraphSummary for WordLadder {
    fn summary(&self, rng: &mut dyn RngCore) -> String {
        let mut out = format!(
            "Word ladder graph with {} words.\nAlphabet: {}\n\nRandom example words with ladder steps:\n",
            self.dictionary.len(),
            self.alphabet(),
        );
        if let Ok(examples) = self.example_outgoing_edges(8, rng) {
            out.push_str(&examples);
        }
        out
    }
}
