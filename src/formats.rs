//! Output formats for parsed songs
//!
//! The parser's product is the [Song](crate::ast::Song) tree. This module turns it into
//! text for inspection and for downstream tools:
//! - treeviz: one line per node, for reading a parse at a glance
//! - json / yaml: the serialized tree, the contract consumed by renderers

pub mod registry;
pub mod serialized;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_options, TreevizFormatter, TreevizOptions};
