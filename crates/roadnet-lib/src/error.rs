use thiserror::Error;

/// Convenient result alias for the roadnet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every variant is a local, recoverable condition; callers decide whether to
/// surface it or retry with adjusted input. An unreachable destination is not
/// an error (see [`crate::search::PathResult`]).
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when inserting a node or edge whose id is already taken.
    #[error("duplicate id: {id}")]
    DuplicateId { id: String },

    /// Raised when an edge names a node that does not exist in the store.
    #[error("edge {edge} references unknown node {node}")]
    InvalidReference { edge: String, node: String },

    /// Raised when the target of a mutation is absent from the store.
    #[error("no edge found with id {id}")]
    NotFound { id: String },

    /// Raised when a search endpoint is not part of the graph.
    #[error("unknown node: {id}{}", format_suggestions(.suggestions))]
    UnknownNode {
        id: String,
        suggestions: Vec<String>,
    },

    /// Raised when a nearest-node lookup runs against an empty node set.
    #[error("cannot resolve nearest node: the graph has no nodes")]
    EmptyGraph,

    /// Raised when a search exceeds its caller-supplied deadline.
    #[error("search cancelled: deadline exceeded")]
    Cancelled,
}

/// Threshold above which a candidate counts as a plausible near-miss.
const SUGGESTION_THRESHOLD: f64 = 0.78;

/// Maximum number of suggestions attached to an [`Error::UnknownNode`].
const MAX_SUGGESTIONS: usize = 3;

/// Build an [`Error::UnknownNode`] with did-you-mean candidates ranked by
/// string similarity against the known identifiers and names.
pub(crate) fn unknown_node<'a>(
    id: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Error {
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| (strsim::jaro_winkler(id, candidate), candidate))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.dedup_by(|a, b| a.1 == b.1);

    Error::UnknownNode {
        id: id.to_string(),
        suggestions: scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, candidate)| candidate.to_string())
            .collect(),
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_node_ranks_close_candidates_first() {
        let error = unknown_node("centrl", ["central", "ring-1-3", "centre"]);
        let Error::UnknownNode { id, suggestions } = error else {
            panic!("expected UnknownNode");
        };
        assert_eq!(id, "centrl");
        assert_eq!(suggestions.first().map(String::as_str), Some("central"));
        assert!(!suggestions.contains(&"ring-1-3".to_string()));
    }

    #[test]
    fn unknown_node_without_candidates_has_plain_message() {
        let error = unknown_node("nowhere", []);
        assert_eq!(format!("{error}"), "unknown node: nowhere");
    }
}
