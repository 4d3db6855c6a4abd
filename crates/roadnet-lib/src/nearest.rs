use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::model::Node;

/// Resolve the node closest to `target` by great-circle distance.
///
/// Linear scan over the given nodes; ties keep the first-encountered node in
/// input order. Fails with [`Error::EmptyGraph`] when `nodes` is empty. This
/// bridges free-form coordinates into the discrete graph before a search.
pub fn nearest<'a>(target: &Coordinate, nodes: &'a [Node]) -> Result<&'a Node> {
    let mut best: Option<(&Node, f64)> = None;
    for node in nodes {
        let distance = target.distance_km(&node.location);
        match best {
            Some((_, shortest)) if distance >= shortest => {}
            _ => best = Some((node, distance)),
        }
    }
    best.map(|(node, _)| node).ok_or(Error::EmptyGraph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::node_at;

    #[test]
    fn empty_node_set_is_an_error() {
        let target = Coordinate::new(0.0, 0.0);
        assert!(matches!(nearest(&target, &[]), Err(Error::EmptyGraph)));
    }

    #[test]
    fn closest_node_wins() {
        let nodes = vec![
            node_at("far", 10.0, 10.0),
            node_at("near", 0.1, 0.1),
            node_at("mid", 5.0, 5.0),
        ];
        let found = nearest(&Coordinate::new(0.0, 0.0), &nodes).unwrap();
        assert_eq!(found.id, "near");
    }

    #[test]
    fn ties_keep_the_first_encountered_node() {
        let nodes = vec![node_at("first", 0.0, 1.0), node_at("second", 0.0, 1.0)];
        let found = nearest(&Coordinate::new(0.0, 0.0), &nodes).unwrap();
        assert_eq!(found.id, "first");
    }
}
