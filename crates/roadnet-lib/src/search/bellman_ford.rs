use crate::error::{Error, Result};
use crate::model::NodeId;
use crate::store::GraphSnapshot;

use super::{endpoints, reconstruct, Algorithm, PathResult, SearchOptions};

/// Edge-relaxation search: every non-blocked edge is relaxed in insertion
/// order for up to `|V| - 1` passes, stopping early once a full pass improves
/// nothing. No priority structure, so the algorithm tolerates weights that
/// shift between passes. Weights here are never negative; the value of this
/// strategy is robustness, not negative-cycle handling.
///
/// The visited list records each node the first time its distance improves,
/// in relaxation order.
pub(super) fn search(
    snapshot: &GraphSnapshot,
    start: &str,
    end: &str,
    options: SearchOptions,
) -> Result<PathResult> {
    let (start_position, end_position) = endpoints(snapshot, start, end)?;
    if start_position == end_position {
        return Ok(PathResult::trivial(Algorithm::BellmanFord, start));
    }

    let node_count = snapshot.node_count();
    let mut distance = vec![f64::INFINITY; node_count];
    let mut parents: Vec<Option<usize>> = vec![None; node_count];
    let mut improved_once = vec![false; node_count];
    let mut visited: Vec<NodeId> = Vec::new();

    distance[start_position] = 0.0;

    for _pass in 0..node_count.saturating_sub(1) {
        if options.expired() {
            return Err(Error::Cancelled);
        }

        let mut improved = false;
        for edge in snapshot.edges() {
            if edge.is_blocked {
                continue;
            }
            let (Some(from), Some(to)) = (
                snapshot.position_of(&edge.from),
                snapshot.position_of(&edge.to),
            ) else {
                continue;
            };
            if distance[from].is_infinite() {
                continue;
            }
            let candidate = distance[from] + edge.current_weight;
            if candidate < distance[to] {
                distance[to] = candidate;
                parents[to] = Some(from);
                improved = true;
                if !improved_once[to] {
                    improved_once[to] = true;
                    visited.push(snapshot.node_at(to).id.clone());
                }
            }
        }

        if !improved {
            break;
        }
    }

    if distance[end_position].is_infinite() {
        return Ok(PathResult::unreachable(Algorithm::BellmanFord, visited));
    }

    let path = reconstruct(&parents, start_position, end_position, snapshot);
    Ok(PathResult::reachable(
        Algorithm::BellmanFord,
        path,
        distance[end_position],
        visited,
    ))
}
