//! Perception-radius neighbor queries.
//!
//! # Contract
//!
//! For one agent and the full population, return every *other* agent whose
//! Euclidean distance to the agent's position is strictly less than the
//! query radius.  No ordering guarantee.  Both implementations must return
//! identical sets for identical inputs.

use glam::Vec2;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use lux_core::AgentId;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// A swappable source of perception-radius neighbor sets.
///
/// [`rebuild`](Self::rebuild) is called once per tick before any queries;
/// [`neighbors_of`](Self::neighbors_of) fills a caller-owned buffer so the
/// hot loop does not allocate.  Implementations must be `Send + Sync` so the
/// compute phase can fan queries out across workers.
pub trait NeighborIndex: Send + Sync {
    /// Refresh any internal acceleration structure from this tick's
    /// positions.  Called once per tick, before all queries.
    fn rebuild(&mut self, positions: &[Vec2]);

    /// Collect into `out` every agent other than `agent` strictly within
    /// `radius` of `agent`'s position.  `out` is cleared first.
    fn neighbors_of(
        &self,
        agent:     AgentId,
        positions: &[Vec2],
        radius:    f32,
        out:       &mut Vec<AgentId>,
    );
}

// ── Brute force ───────────────────────────────────────────────────────────────

/// The reference implementation: a linear scan of all positions.
///
/// O(N) per query, O(N²) per tick over the population — accepted at the
/// swarm sizes the default config implies.  `rebuild` is a no-op.
#[derive(Default)]
pub struct BruteForceIndex;

impl NeighborIndex for BruteForceIndex {
    fn rebuild(&mut self, _positions: &[Vec2]) {}

    fn neighbors_of(
        &self,
        agent:     AgentId,
        positions: &[Vec2],
        radius:    f32,
        out:       &mut Vec<AgentId>,
    ) {
        out.clear();
        let origin = positions[agent.index()];
        let radius_sq = radius * radius;
        for (i, &pos) in positions.iter().enumerate() {
            if i == agent.index() {
                continue;
            }
            if pos.distance_squared(origin) < radius_sq {
                out.push(AgentId(i as u32));
            }
        }
    }
}

// ── R-tree ────────────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D point with the associated `AgentId`.
#[derive(Clone)]
struct AgentEntry {
    point: [f32; 2],
    id: AgentId,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AgentEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// R-tree-backed index, bulk-loaded from scratch each tick.
///
/// Rebuilding is O(N log N); queries touch only the envelope around the
/// perception radius.  Worth it once the population outgrows the brute-force
/// scan — the crossover is in the low thousands for typical perception radii.
#[derive(Default)]
pub struct RTreeIndex {
    tree: RTree<AgentEntry>,
}

impl RTreeIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NeighborIndex for RTreeIndex {
    fn rebuild(&mut self, positions: &[Vec2]) {
        let entries = positions
            .iter()
            .enumerate()
            .map(|(i, p)| AgentEntry { point: [p.x, p.y], id: AgentId(i as u32) })
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    fn neighbors_of(
        &self,
        agent:     AgentId,
        positions: &[Vec2],
        radius:    f32,
        out:       &mut Vec<AgentId>,
    ) {
        out.clear();
        let origin = positions[agent.index()];
        let center = [origin.x, origin.y];
        let radius_sq = radius * radius;
        // locate_within_distance is inclusive of the boundary; the contract
        // wants strictly-inside, so re-check with <.
        for entry in self.tree.locate_within_distance(center, radius_sq) {
            if entry.id != agent && entry.distance_2(&center) < radius_sq {
                out.push(entry.id);
            }
        }
    }
}
