use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::model::NodeId;
use crate::store::GraphSnapshot;

use super::{endpoints, reconstruct, Algorithm, FrontierEntry, PathResult, SearchOptions};

/// Heuristic-guided search keyed by `distance_so_far + heuristic`, where the
/// heuristic is the great-circle distance to the end node in kilometres.
///
/// The heuristic is admissible as long as no edge's `current_weight` drops
/// below its geometric length. Traffic multipliers cannot do that (the
/// multiplier floors at 1.0), but a manual weight override can; callers that
/// override weights should not rely on A* optimality.
pub(super) fn search(
    snapshot: &GraphSnapshot,
    start: &str,
    end: &str,
    options: SearchOptions,
) -> Result<PathResult> {
    let (start_position, end_position) = endpoints(snapshot, start, end)?;
    if start_position == end_position {
        return Ok(PathResult::trivial(Algorithm::AStar, start));
    }

    let end_location = snapshot.node_at(end_position).location;
    let heuristic = |position: usize| {
        snapshot
            .node_at(position)
            .location
            .distance_km(&end_location)
    };

    let node_count = snapshot.node_count();
    let mut g_score = vec![f64::INFINITY; node_count];
    let mut parents: Vec<Option<usize>> = vec![None; node_count];
    let mut settled = vec![false; node_count];
    let mut visited: Vec<NodeId> = Vec::new();

    let mut frontier = BinaryHeap::new();
    let mut sequence = 0u64;
    g_score[start_position] = 0.0;
    frontier.push(FrontierEntry::new(
        heuristic(start_position),
        sequence,
        start_position,
    ));

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
            let tentative = g_score[position] + edge.current_weight;
            if tentative < g_score[next] {
                g_score[next] = tentative;
                parents[next] = Some(position);
                sequence += 1;
                frontier.push(FrontierEntry::new(tentative + heuristic(next), sequence, next));
            }
        }
    }

    if g_score[end_position].is_infinite() {
        return Ok(PathResult::unreachable(Algorithm::AStar, visited));
    }

    let path = reconstruct(&parents, start_position, end_position, snapshot);
    Ok(PathResult::reachable(
        Algorithm::AStar,
        path,
        g_score[end_position],
        visited,
    ))
}
