//! # Snapshot Testing Support
//!
//! Utilities for testing the processor via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a `Document` to a stable `Snap` (one string per line,
//!   tokens as `"text"{Style}[meta]`) for `insta` snapshot testing
//! - **`invariants`**: Structural checks (every line has tokens, only list lines are
//!   indented, list depth grows one level at a time, raw lines stay whole)
//!
//! Parsing behavior is pinned by fixture snapshots rather than a formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize, render_token, render_tokens};
