//! Rooted-forest construction from flat parent-pointer shapes.
//!
//! The forest is the hand-off format between the flat canvas model and
//! hierarchical consumers (markup generation, nested persistence).

use crate::id::ShapeId;
use crate::model::Shape;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use std::collections::HashMap;

/// A rooted forest of shapes. Edges go parent → child.
///
/// A shape whose `parent_id` names a shape absent from the input is
/// neither a root nor anyone's child: it sits in the graph unreachable
/// from the roots and is silently dropped by every traversal
/// ([`flatten`](Self::flatten), markup walks). That shapes can vanish
/// from exports this way is a deliberate, documented behavior of the
/// tree builder, kept pending a product decision — not an accident.
#[derive(Debug, Clone)]
pub struct ShapeTree {
    graph: StableDiGraph<Shape, ()>,
    id_index: HashMap<ShapeId, NodeIndex>,
    roots: Vec<NodeIndex>,
}

impl ShapeTree {
    /// Build the forest. Shapes with `parent_id == None` become roots,
    /// in input order; every shape with a resolvable parent becomes a
    /// child edge, in input order.
    pub fn build(shapes: &[Shape]) -> Self {
        let mut graph = StableDiGraph::new();
        let mut id_index = HashMap::with_capacity(shapes.len());

        for shape in shapes {
            let idx = graph.add_node(shape.clone());
            id_index.insert(shape.id, idx);
        }

        let mut roots = Vec::new();
        for shape in shapes {
            let idx = id_index[&shape.id];
            match shape.parent_id {
                None => roots.push(idx),
                Some(parent) => {
                    if let Some(&parent_idx) = id_index.get(&parent) {
                        graph.add_edge(parent_idx, idx, ());
                    } else {
                        log::debug!("dropping {}: parent {} not in document", shape.id, parent);
                    }
                }
            }
        }

        Self {
            graph,
            id_index,
            roots,
        }
    }

    /// Root nodes in input order.
    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    pub fn shape(&self, idx: NodeIndex) -> &Shape {
        &self.graph[idx]
    }

    pub fn index_of(&self, id: ShapeId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    /// Children of a node in input (insertion) order.
    ///
    /// Sorts by `NodeIndex` so the result is deterministic regardless
    /// of how `petgraph` iterates its adjacency list.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut children: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .collect();
        children.sort();
        children
    }

    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
            .next()
    }

    /// Number of shapes stored, including unreachable orphans.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Walk the forest back into a flat list, re-deriving `parent_id`
    /// purely from the tree structure. Orphans are not visited and do
    /// not appear in the output.
    pub fn flatten(&self) -> Vec<Shape> {
        let mut out = Vec::with_capacity(self.graph.node_count());
        for &root in &self.roots {
            self.flatten_into(root, None, &mut out);
        }
        out
    }

    fn flatten_into(&self, idx: NodeIndex, parent: Option<ShapeId>, out: &mut Vec<Shape>) {
        let mut shape = self.graph[idx].clone();
        shape.parent_id = parent;
        let id = shape.id;
        out.push(shape);
        for child in self.children(idx) {
            self.flatten_into(child, Some(id), out);
        }
    }
}
