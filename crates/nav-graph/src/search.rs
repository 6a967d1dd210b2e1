//! A* shortest-path search over a [`Graph`].

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::{Graph, IndexedPriorityQueue, NodeIndex};

/// Diagnostics of the most recent [`Graph::calculate_path`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryInfo {
    /// Number of frontier dequeues, including the one that reached the
    /// destination. Zero when the query was rejected for an invalid index.
    pub nodes_traversed: usize,
}

impl Graph {
    /// Shortest path from `start` to `destination`, both ends included.
    ///
    /// Returns an empty path when either index is out of range (no search is
    /// run) or when the destination is unreachable. Either way,
    /// [`Graph::query_info`] afterwards describes this call.
    ///
    /// When several routes share the lowest cost, the one discovered first
    /// wins.
    pub fn calculate_path(&mut self, start: NodeIndex, destination: NodeIndex) -> Vec<NodeIndex> {
        let (path, info) = self.search(start, destination);
        self.last_query = info;
        path
    }

    /// Diagnostics of the last [`Graph::calculate_path`] call.
    #[inline]
    pub fn query_info(&self) -> QueryInfo {
        self.last_query
    }

    fn search(&self, start: NodeIndex, destination: NodeIndex) -> (Vec<NodeIndex>, QueryInfo) {
        let count = self.nodes.len();
        if start >= count || destination >= count {
            debug!(start, destination, nodes = count, "path query out of range");
            return (Vec::new(), QueryInfo::default());
        }

        let goal = self.nodes[destination].position;
        let mut cost_so_far = vec![f32::INFINITY; count];
        let mut came_from: Vec<Option<NodeIndex>> = vec![None; count];
        let mut frontier = IndexedPriorityQueue::with_capacity(count);
        let mut traversed = 0;

        cost_so_far[start] = 0.0;
        frontier.push(start, 0.0);

        while let Some((current, priority)) = frontier.pop() {
            traversed += 1;
            trace!(node = current, priority, traversed, "expand");
            if current == destination {
                break;
            }

            for neighbor in &self.nodes[current].neighbors {
                let next = neighbor.node;
                let new_cost = cost_so_far[current] + neighbor.weight;
                // Only a strictly cheaper cost relaxes: equal cost keeps the
                // route found first, and a NaN cost never relaxes.
                if new_cost.partial_cmp(&cost_so_far[next]) != Some(Ordering::Less) {
                    continue;
                }

                cost_so_far[next] = new_cost;
                let priority = new_cost + self.nodes[next].position.distance(goal);
                if !frontier.decrease_priority(next, priority) {
                    frontier.push(next, priority);
                }
                came_from[next] = Some(current);
            }
        }

        let info = QueryInfo {
            nodes_traversed: traversed,
        };

        if destination != start && came_from[destination].is_none() {
            debug!(start, destination, traversed, "no path");
            return (Vec::new(), info);
        }

        let mut path = vec![destination];
        let mut node = destination;
        while node != start {
            let Some(previous) = came_from[node] else {
                break;
            };
            path.push(previous);
            node = previous;
        }
        path.reverse();

        debug!(
            start,
            destination,
            traversed,
            hops = path.len() - 1,
            cost = cost_so_far[destination],
            "path found"
        );
        (path, info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(len: usize) -> Graph {
        let mut graph = Graph::new();
        for x in 0..len {
            graph.add_node((x as f32, 0.0));
        }
        for x in 1..len {
            graph.add_neighbor_edge(x - 1, x).unwrap();
        }
        graph
    }

    #[test]
    fn straight_line() {
        let mut graph = chain(3);

        assert_eq!(graph.calculate_path(0, 2), vec![0, 1, 2]);
        assert_eq!(graph.query_info().nodes_traversed, 3);
    }

    #[test]
    fn reverse_direction_has_no_path() {
        let mut graph = chain(3);

        assert!(graph.calculate_path(2, 0).is_empty());
        assert_eq!(graph.query_info().nodes_traversed, 1);
    }

    #[test]
    fn triangle_takes_direct_edge() {
        let mut graph = Graph::new();
        graph.add_node((0.0, 0.0));
        graph.add_node((1.0, 1.0));
        graph.add_node((2.0, 0.0));
        graph.add_neighbor_edge(0, 1).unwrap();
        graph.add_neighbor_edge(1, 2).unwrap();
        graph.add_neighbor_edge(0, 2).unwrap();

        assert_eq!(graph.calculate_path(0, 2), vec![0, 2]);
        assert_eq!(graph.query_info().nodes_traversed, 2);
    }

    #[test]
    fn invalid_indices_skip_search() {
        let mut graph = chain(3);
        graph.calculate_path(0, 2);

        assert!(graph.calculate_path(7, 9).is_empty());
        assert_eq!(graph.query_info(), QueryInfo::default());
        assert!(graph.calculate_path(0, 3).is_empty());
        assert_eq!(graph.query_info().nodes_traversed, 0);
    }

    #[test]
    fn start_equals_destination() {
        let mut graph = chain(2);

        assert_eq!(graph.calculate_path(1, 1), vec![1]);
        assert_eq!(graph.query_info().nodes_traversed, 1);
    }

    #[test]
    fn empty_graph_rejects_everything() {
        let mut graph = Graph::new();
        assert!(graph.calculate_path(0, 0).is_empty());
        assert_eq!(graph.query_info().nodes_traversed, 0);
    }
}
