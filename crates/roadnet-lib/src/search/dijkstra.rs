use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::model::NodeId;
use crate::store::GraphSnapshot;

use super::{endpoints, reconstruct, Algorithm, FrontierEntry, PathResult, SearchOptions};

/// Uniform-cost search. Nodes settle in non-decreasing distance order; the
/// run stops as soon as the end node settles. Requires non-negative weights,
/// which `current_weight >= 0` guarantees.
pub(super) fn search(
    snapshot: &GraphSnapshot,
    start: &str,
    end: &str,
    options: SearchOptions,
) -> Result<PathResult> {
    let (start_position, end_position) = endpoints(snapshot, start, end)?;
    if start_position == end_position {
        return Ok(PathResult::trivial(Algorithm::Dijkstra, start));
    }

    let node_count = snapshot.node_count();
    let mut distance = vec![f64::INFINITY; node_count];
    let mut parents: Vec<Option<usize>> = vec![None; node_count];
    let mut settled = vec![false; node_count];
    // Settlement order, reported for diagnostics and visualization.
    let mut visited: Vec<NodeId> = Vec::new();

    let mut frontier = BinaryHeap::new();
    let mut sequence = 0u64;
    distance[start_position] = 0.0;
    frontier.push(FrontierEntry::new(0.0, sequence, start_position));

    while let Some(entry) = frontier.pop() {
        if options.expired() {
            return Err(Error::Cancelled);
        }
        let position = entry.position;
        if settled[position] {
            continue;
        }
        settled[position] = true;
        visited.push(snapshot.node_at(position).id.clone());
        if position == end_position {
            break;
        }

        for edge in snapshot.outgoing_at(position) {
            if edge.is_blocked {
                continue;
            }
            let Some(next) = snapshot.position_of(&edge.to) else {
                continue;
            };
            if settled[next] {
                continue;
            }
            let candidate = distance[position] + edge.current_weight;
            if candidate < distance[next] {
                distance[next] = candidate;
                parents[next] = Some(position);
                sequence += 1;
                frontier.push(FrontierEntry::new(candidate, sequence, next));
            }
        }
    }

    if distance[end_position].is_infinite() {
        return Ok(PathResult::unreachable(Algorithm::Dijkstra, visited));
    }

    let path = reconstruct(&parents, start_position, end_position, snapshot);
    Ok(PathResult::reachable(
        Algorithm::Dijkstra,
        path,
        distance[end_position],
        visited,
    ))
}
