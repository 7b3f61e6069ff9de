//! Versioned persisted-document schema.
//!
//! The transport (files, localStorage, auto-save timers) lives outside
//! the core and treats documents as opaque blobs; this module owns the
//! schema itself and the migrations between versions:
//!
//! - v1 stored shapes as an explicitly nested `children` structure.
//! - v2 (current) stores the flat list with `parent_id` pointers.
//!
//! Loading a v1 document flattens it on the way in; `parent_id` is
//! re-derived purely from nesting depth, and any `parent_id` stored on
//! a nested record itself is discarded.

use crate::id::ShapeId;
use crate::model::{Group, Shape};
use crate::tree::ShapeTree;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed snapshot blob: {0}")]
    BlobDecode(#[from] rmp_serde::decode::Error),
    #[error("snapshot encoding failed: {0}")]
    BlobEncode(#[from] rmp_serde::encode::Error),
    #[error("unsupported schema version {0}")]
    UnsupportedVersion(u32),
}

/// A complete persisted canvas document (current, flat schema).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub version: u32,
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Document {
    pub fn new(shapes: Vec<Shape>, groups: Vec<Group>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            shapes,
            groups,
        }
    }

    /// Parse a JSON document at any supported schema version,
    /// migrating to the current one.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default = "default_version")]
            version: u32,
        }
        fn default_version() -> u32 {
            1
        }

        let probe: Probe = serde_json::from_str(text)?;
        match probe.version {
            1 => {
                let v1: DocumentV1 = serde_json::from_str(text)?;
                Ok(Self {
                    version: SCHEMA_VERSION,
                    shapes: from_nested(&v1.shapes),
                    groups: v1.groups,
                })
            }
            2 => {
                let doc: Document = serde_json::from_str(text)?;
                Ok(doc)
            }
            other => Err(DocumentError::UnsupportedVersion(other)),
        }
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Compact MessagePack encoding, used for auto-save snapshots.
    pub fn to_blob(&self) -> Result<Vec<u8>, DocumentError> {
        Ok(rmp_serde::to_vec_named(self)?)
    }

    pub fn from_blob(bytes: &[u8]) -> Result<Self, DocumentError> {
        Ok(rmp_serde::from_slice(bytes)?)
    }
}

/// The v1 on-disk layout: nested shape records, no version guarantees
/// on groups (absent in most v1 files).
#[derive(Debug, Deserialize)]
struct DocumentV1 {
    #[allow(dead_code)]
    #[serde(default)]
    version: u32,
    shapes: Vec<NestedShapeRecord>,
    #[serde(default)]
    groups: Vec<Group>,
}

/// A shape with its children inlined — the explicit nested form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedShapeRecord {
    #[serde(flatten)]
    pub shape: Shape,
    #[serde(default)]
    pub children: Vec<NestedShapeRecord>,
}

/// Convert a flat parent-pointer list into the nested form. Orphans
/// (dangling `parent_id`) are dropped, matching the tree builder.
pub fn to_nested(shapes: &[Shape]) -> Vec<NestedShapeRecord> {
    let tree = ShapeTree::build(shapes);
    tree.roots()
        .iter()
        .map(|&root| nested_record(&tree, root))
        .collect()
}

fn nested_record(tree: &ShapeTree, idx: NodeIndex) -> NestedShapeRecord {
    NestedShapeRecord {
        shape: tree.shape(idx).clone(),
        children: tree
            .children(idx)
            .into_iter()
            .map(|c| nested_record(tree, c))
            .collect(),
    }
}

/// Flatten nested records back into the parent-pointer form.
/// `parent_id` is re-derived from nesting depth alone; whatever the
/// nested records carried in their own `parent_id` field is discarded.
pub fn from_nested(records: &[NestedShapeRecord]) -> Vec<Shape> {
    let mut out = Vec::new();
    for record in records {
        flatten_record(record, None, &mut out);
    }
    out
}

fn flatten_record(record: &NestedShapeRecord, parent: Option<ShapeId>, out: &mut Vec<Shape>) {
    let mut shape = record.shape.clone();
    shape.parent_id = parent;
    let id = shape.id;
    out.push(shape);
    for child in &record.children {
        flatten_record(child, Some(id), out);
    }
}
