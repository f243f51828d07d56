//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the common trait that provides uniform access
//! to node information across all node types.

/// Common interface for all song nodes
pub trait AstNode {
    /// Type name used by snapshots and test assertions (e.g. "Section", "Lyrics")
    fn node_type(&self) -> &'static str;

    /// Short human-readable description of the node
    fn display_label(&self) -> String;
}
