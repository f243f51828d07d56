//! Section building
//!
//!     This module turns the body lines of one part into its sections. It is the only
//!     stateful stage of the parser: a cursor walks the lines once, and every step
//!     consumes one line, two lines (a chord line paired with its lyric), or a header
//!     plus its indented continuation lines.
//!
//! State
//!
//!     The state is explicit and owned by the builder:
//!
//!         1. Mode - `Normal` or `InsideSolista`. A solista block is free text: its lines
//!            are kept verbatim and never classified.
//!         2. Current section - held by the [accumulator](accumulator). It is opened by a
//!            header, or lazily as an untyped section when content shows up first.
//!         3. Cursor - index of the next unconsumed line. Lookahead reads `cursor + 1`
//!            but never moves backwards.
//!
//!     See [builder](builder) for the per-line decision order.

pub mod accumulator;
pub mod builder;

pub use accumulator::PartAccumulator;
pub use builder::{build_sections, SectionBuilder};
