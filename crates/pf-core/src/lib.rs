pub mod align;
pub mod drop;
pub mod geometry;
pub mod group;
pub mod id;
pub mod layer;
pub mod model;
pub mod nesting;
pub mod schema;
pub mod tree;

pub use align::{AlignMode, DistributeAxis, align_shapes, distribute_shapes, selection_bounds};
pub use drop::{DropVerdict, MIN_VISIBLE_CONFIDENCE, find_drop_target};
pub use geometry::{Bounds, CanvasTransform, Point, Size, snap_point, snap_to_edges, snap_value};
pub use group::{GroupError, can_group, can_ungroup, create_group, move_group, resize_group, ungroup};
pub use id::ShapeId;
pub use layer::{LayerInfo, LayerPosition, bring_forward, bring_to_front, send_backward, send_to_back};
pub use model::*;
pub use nesting::{apply_nesting, infer_nesting, nesting_indicators, validate_nesting};
pub use schema::{Document, DocumentError, SCHEMA_VERSION};
pub use tree::ShapeTree;

// Re-export petgraph's node index so downstream crates can walk trees
// without a direct dependency.
pub use petgraph::graph::NodeIndex;
