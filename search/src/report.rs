//! Machine-readable search reports and their content digest.
//!
//! The report is a JSON object with sorted keys and compact separators
//! (`serde_json`'s default map is ordered), so equal results always produce
//! equal bytes and therefore equal digests.

use sha2::{Digest, Sha256};

use crate::contract::Graph;
use crate::edge::Edge;
use crate::result::SearchResult;

/// Domain prefix for search report digests.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"PATHFINDER::SEARCH_REPORT::V1\0";

impl<G: Graph + ?Sized> SearchResult<'_, G> {
    /// The report as a `serde_json::Value`. Vertices are rendered with
    /// `Display`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cost": self.cost,
            "goal": self.goal.to_string(),
            "iterations": self.iterations,
            "path": self.path.as_ref().map(|p| p.iter().map(edge_to_json).collect::<Vec<_>>()),
            "start": self.start.to_string(),
            "success": self.success,
        })
    }

    /// Canonical report bytes: sorted keys, no whitespace.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }

    /// `"sha256:<hex>"` digest of the canonical report bytes.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if serialization fails.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = self.to_canonical_json_bytes()?;
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_SEARCH_REPORT);
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}

fn edge_to_json<V: std::fmt::Display>(e: &Edge<V>) -> serde_json::Value {
    serde_json::json!({
        "end": e.end().to_string(),
        "start": e.start().to_string(),
        "weight": e.weight(),
    })
}
