//! Visualization of the node chain of a list.
//!
//! Builds a directed graph with one vertex per node plus a terminal `nil`
//! vertex, and renders it as Graphviz DOT text.

use crate::linked_list::{END_MARKER, LinkedList};
use log::debug;
use petgraph::{
    dot::Dot,
    graph::{DiGraph, NodeIndex},
};

/// Builds the chain graph of `list`.
///
/// Vertices are labelled `[position] value`, in head-to-tail order, followed
/// by a vertex labelled `nil`. Each vertex has a single `next` edge to its
/// successor, so a list of n nodes gives n + 1 vertices and n edges.
///
/// # Arguments
///
/// * `list` - The list to describe. It is only read.
pub fn list_graph(list: &LinkedList) -> DiGraph<String, &'static str> {
    let mut graph = DiGraph::with_capacity(list.len() + 1, list.len());
    let mut previous: Option<NodeIndex> = None;

    for (position, value) in list.iter().enumerate() {
        let idx = graph.add_node(format!("[{}] {}", position, value));
        if let Some(prev) = previous {
            graph.add_edge(prev, idx, "next");
        }
        previous = Some(idx);
    }

    // Terminal vertex so an empty list still has something to draw
    let end = graph.add_node(END_MARKER.to_string());
    if let Some(prev) = previous {
        graph.add_edge(prev, end, "next");
    }

    debug!(
        "list graph: {} vertices, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

/// Renders the chain graph of `list` as DOT text.
pub fn render_dot(list: &LinkedList) -> String {
    let graph = list_graph(list);
    format!("{}", Dot::with_config(&graph, &[]))
}
