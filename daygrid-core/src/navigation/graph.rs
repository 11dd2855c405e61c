use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::event::EventId;
use crate::navigation::Direction;

/// Where focus goes from one event in each direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub up: Option<EventId>,
    pub down: Option<EventId>,
    pub left: Option<EventId>,
    pub right: Option<EventId>,
}

impl Neighbors {
    pub fn get(&self, direction: Direction) -> Option<EventId> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, direction: Direction, neighbor: Option<EventId>) {
        let slot = match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        *slot = neighbor;
    }

    pub fn is_empty(&self) -> bool {
        Direction::ALL.iter().all(|&d| self.get(d).is_none())
    }
}

/// Neighbor links for every event of one selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationGraph {
    links: BTreeMap<EventId, Neighbors>,
}

impl NavigationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph where each candidate is present with no links yet.
    pub fn unlinked(ids: impl IntoIterator<Item = EventId>) -> Self {
        NavigationGraph {
            links: ids.into_iter().map(|id| (id, Neighbors::default())).collect(),
        }
    }

    pub fn insert(&mut self, id: EventId, neighbors: Neighbors) {
        self.links.insert(id, neighbors);
    }

    pub fn neighbors(&self, id: EventId) -> Option<&Neighbors> {
        self.links.get(&id)
    }

    /// Follow one link from `from`.
    pub fn step(&self, from: EventId, direction: Direction) -> Option<EventId> {
        self.links.get(&from).and_then(|n| n.get(direction))
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.links.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventId, &Neighbors)> {
        self.links.iter().map(|(&id, n)| (id, n))
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Result of one navigation build: the links plus the event to focus first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationOutcome {
    pub graph: NavigationGraph,
    pub start: Option<EventId>,
}

impl NavigationOutcome {
    /// Nothing selectable: no links, no start event.
    pub fn none() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_follows_links() {
        let mut graph = NavigationGraph::unlinked([EventId(1), EventId(2)]);
        graph.insert(
            EventId(1),
            Neighbors {
                down: Some(EventId(2)),
                ..Neighbors::default()
            },
        );

        assert_eq!(graph.step(EventId(1), Direction::Down), Some(EventId(2)));
        assert_eq!(graph.step(EventId(2), Direction::Up), None);
        assert_eq!(graph.step(EventId(9), Direction::Up), None);
        assert!(graph.contains(EventId(2)));
    }

    #[test]
    fn test_neighbors_set_and_get_agree() {
        let mut neighbors = Neighbors::default();
        assert!(neighbors.is_empty());

        for (i, direction) in Direction::ALL.into_iter().enumerate() {
            neighbors.set(direction, Some(EventId(i as u64)));
        }

        assert_eq!(neighbors.get(Direction::Left), Some(EventId(2)));
        assert!(!neighbors.is_empty());
    }

    #[test]
    fn test_outcome_serializes_graph_as_map() {
        let mut graph = NavigationGraph::new();
        graph.insert(
            EventId(5),
            Neighbors {
                right: Some(EventId(6)),
                ..Neighbors::default()
            },
        );
        let outcome = NavigationOutcome {
            graph,
            start: Some(EventId(5)),
        };

        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["start"], 5);
        assert_eq!(json["graph"]["5"]["right"], 6);
        assert!(json["graph"]["5"]["up"].is_null());
    }
}
