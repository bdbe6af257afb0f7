//! Unit tests for the neighbor-query implementations.

use glam::Vec2;

use lux_core::AgentId;

use crate::{BruteForceIndex, NeighborIndex, RTreeIndex};

fn query(index: &impl NeighborIndex, positions: &[Vec2], agent: u32, radius: f32) -> Vec<AgentId> {
    let mut out = Vec::new();
    index.neighbors_of(AgentId(agent), positions, radius, &mut out);
    out.sort();
    out
}

#[cfg(test)]
mod contract {
    use super::*;

    fn line_positions() -> Vec<Vec2> {
        // Agents at x = 0, 10, 20, 30 on the x-axis.
        (0..4).map(|i| Vec2::new(i as f32 * 10.0, 0.0)).collect()
    }

    #[test]
    fn excludes_self() {
        let positions = line_positions();
        let brute = BruteForceIndex;
        let found = query(&brute, &positions, 0, 1000.0);
        assert!(!found.contains(&AgentId(0)));
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn radius_is_strict() {
        let positions = line_positions();
        let brute = BruteForceIndex;
        // Agent 1 sits exactly 10 units from agents 0 and 2.
        assert!(query(&brute, &positions, 1, 10.0).is_empty(), "boundary must be excluded");
        assert_eq!(query(&brute, &positions, 1, 10.01), vec![AgentId(0), AgentId(2)]);
    }

    #[test]
    fn isolated_agent_has_no_neighbors() {
        let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(500.0, 500.0)];
        let brute = BruteForceIndex;
        assert!(query(&brute, &positions, 0, 50.0).is_empty());
    }

    #[test]
    fn rtree_matches_brute_force() {
        // Deterministic scatter: a coarse lattice with a twist so distances
        // aren't all degenerate.
        let positions: Vec<Vec2> = (0..60)
            .map(|i| {
                let x = (i % 10) as f32 * 13.0 + (i as f32 * 0.37).sin() * 5.0;
                let y = (i / 10) as f32 * 17.0 + (i as f32 * 0.71).cos() * 5.0;
                Vec2::new(x, y)
            })
            .collect();

        let brute = BruteForceIndex;
        let mut rtree = RTreeIndex::new();
        rtree.rebuild(&positions);

        for agent in 0..positions.len() as u32 {
            for radius in [5.0, 20.0, 45.0] {
                let a = query(&brute, &positions, agent, radius);
                let b = query(&rtree, &positions, agent, radius);
                assert_eq!(a, b, "agent {agent} radius {radius}");
            }
        }
    }

    #[test]
    fn rtree_rebuild_tracks_moves() {
        let mut positions = vec![Vec2::ZERO, Vec2::new(100.0, 0.0)];
        let mut rtree = RTreeIndex::new();
        rtree.rebuild(&positions);
        assert!(query(&rtree, &positions, 0, 50.0).is_empty());

        positions[1] = Vec2::new(10.0, 0.0);
        rtree.rebuild(&positions);
        assert_eq!(query(&rtree, &positions, 0, 50.0), vec![AgentId(1)]);
    }
}
