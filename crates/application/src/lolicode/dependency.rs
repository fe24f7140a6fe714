//! Request dependency graph.
//!
//! An exchange depends on another when it references (as `<name>`) a
//! variable that the other exchange extracts. The graph yields an emission
//! order where producers always come before consumers.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use har2loli_domain::{Exchange, Extraction, OrderingError, OrderingPlan, OverrideMap};

/// Directed graph over exchange indices; an edge `a -> b` means `a` must be
/// emitted before `b`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    node_count: usize,
    edges: BTreeSet<(usize, usize)>,
}

impl DependencyGraph {
    /// Creates a graph with `node_count` nodes and no edges.
    #[must_use]
    pub const fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: BTreeSet::new(),
        }
    }

    /// Derives the graph from the variables each exchange extracts and the
    /// variables each request references.
    ///
    /// Only exchanges in `selected` take part in edges; the others stay
    /// isolated and cannot introduce cycles.
    #[must_use]
    pub fn from_exchanges(
        exchanges: &[Exchange],
        extractions: &OverrideMap<Extraction>,
        selected: &[usize],
    ) -> Self {
        let mut graph = Self::new(exchanges.len());
        let selected: BTreeSet<usize> = selected
            .iter()
            .copied()
            .filter(|&index| index < exchanges.len())
            .collect();

        let producers: Vec<(usize, String)> = extractions
            .iter()
            .filter(|(index, _)| selected.contains(index))
            .flat_map(|(index, items)| {
                items
                    .iter()
                    .map(move |e| (index, format!("<{}>", e.variable_name)))
            })
            .collect();

        for &consumer in &selected {
            let exchange = &exchanges[consumer];
            for (producer, placeholder) in &producers {
                if *producer != consumer && references(exchange, placeholder) {
                    graph.add_edge(*producer, consumer);
                }
            }
        }

        graph
    }

    /// Adds an edge `before -> after`. Edges touching unknown nodes are ignored.
    pub fn add_edge(&mut self, before: usize, after: usize) {
        if before < self.node_count && after < self.node_count {
            self.edges.insert((before, after));
        }
    }

    /// Returns a topological order, preferring the lowest index whenever
    /// several exchanges are ready so unrelated requests keep capture order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError::Cycle`] listing the exchanges that could not
    /// be ordered.
    pub fn topological_order(&self) -> Result<OrderingPlan, OrderingError> {
        let mut in_degree = vec![0usize; self.node_count];
        for &(_, after) in &self.edges {
            in_degree[after] += 1;
        }

        let mut ready: BinaryHeap<Reverse<usize>> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, degree)| **degree == 0)
            .map(|(index, _)| Reverse(index))
            .collect();

        let mut order = Vec::with_capacity(self.node_count);
        while let Some(Reverse(index)) = ready.pop() {
            order.push(index);
            for &(_, after) in self.edges.range((index, 0)..=(index, usize::MAX)) {
                in_degree[after] -= 1;
                if in_degree[after] == 0 {
                    ready.push(Reverse(after));
                }
            }
        }

        if order.len() < self.node_count {
            let stuck = in_degree
                .iter()
                .enumerate()
                .filter(|(_, degree)| **degree > 0)
                .map(|(index, _)| index)
                .collect();
            return Err(OrderingError::Cycle(stuck));
        }

        Ok(OrderingPlan::new(order))
    }
}

fn references(exchange: &Exchange, placeholder: &str) -> bool {
    let request = &exchange.request;
    request.url.contains(placeholder)
        || request.headers.iter().any(|(_, value)| value.contains(placeholder))
        || request.cookies.values().any(|value| value.contains(placeholder))
        || request
            .body
            .as_ref()
            .is_some_and(|body| body.data.contains(placeholder))
}
