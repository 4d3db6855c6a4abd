use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::model::{Edge, RoadKind, TrafficLevel};
use crate::store::GraphStore;

/// Bounded jitter applied to every schedule multiplier, in multiplier units.
const JITTER: f64 = 0.15;

/// Fixed conversion factor from traffic-adjusted cost to minutes.
pub(crate) const COST_TO_MINUTES: f64 = 1.2;

/// Time-of-day traffic model with a seedable jitter source.
///
/// The simulator never reads the wall clock; timestamps are supplied by the
/// timer-driving caller so runs are replayable. Two simulators created from
/// the same seed produce identical weights for the same `(edges, now)`.
#[derive(Debug)]
pub struct TrafficSimulator {
    rng: SmallRng,
}

impl TrafficSimulator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Recompute `current_weight` and `traffic_level` for every edge.
    ///
    /// `current_weight` is derived from `base_weight` alone, so repeated
    /// refreshes never drift. Blocked edges are recomputed too; search
    /// excludes them via the blocked flag, not via weight.
    pub fn refresh(&mut self, edges: &mut [Edge], now: DateTime<Utc>) {
        for edge in edges.iter_mut() {
            let (multiplier, level) = schedule_multiplier(now, edge.road_kind);
            let jitter = self.rng.gen_range(-JITTER..=JITTER);
            let effective = (multiplier + jitter).max(1.0);
            edge.current_weight = round_tenth(edge.base_weight * effective);
            edge.traffic_level = level;
        }
    }
}

/// Multiplier and congestion tier for a timestamp, before jitter.
///
/// Weekday rush hours (07:00-09:59, 17:00-19:59) weigh highways harder than
/// surface roads; weekday mid-day and weekend afternoons carry moderate
/// congestion; every other bracket is free-flow.
pub fn schedule_multiplier(now: DateTime<Utc>, road_kind: RoadKind) -> (f64, TrafficLevel) {
    let hour = now.hour();
    let weekend = matches!(now.weekday(), Weekday::Sat | Weekday::Sun);

    if !weekend && ((7..10).contains(&hour) || (17..20).contains(&hour)) {
        let multiplier = if road_kind == RoadKind::Highway {
            1.8
        } else {
            1.5
        };
        (multiplier, TrafficLevel::High)
    } else if !weekend && (10..17).contains(&hour) {
        (1.2, TrafficLevel::Medium)
    } else if weekend && (12..19).contains(&hour) {
        (1.3, TrafficLevel::Medium)
    } else {
        (1.0, TrafficLevel::Low)
    }
}

/// Surface for the timer-driving collaborator: refresh every edge in the
/// store at `now` and return the updated edge set.
pub fn tick(store: &mut GraphStore, simulator: &mut TrafficSimulator, now: DateTime<Utc>) -> Vec<Edge> {
    simulator.refresh(store.edges_mut(), now);
    debug!(edges = store.edge_count(), timestamp = %now, "traffic tick applied");
    store.edges().to_vec()
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
