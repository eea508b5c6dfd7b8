//! # Line Classification
//!
//! Turns raw text into styled logical lines.
//!
//! ## Phases
//!
//! 1. **Front matter** (`front_matter`): a leading `---` block is split off into a map
//! 2. **Per-line rules** (`classify`): each line is matched against the block rules in
//!    order, with a small `ClassifierState` carrying until-close regions across lines
//! 3. **Post-passes**: reference definitions are pulled out (`references`), wrapped
//!    list lines are merged and list depth is resolved (`lists`)
//!
//! ## Key Invariants
//!
//! - Classification never fails. Malformed input degrades to body lines.
//! - All cross-line state is created per `classify` call.

pub mod classify;
pub mod front_matter;
pub mod kinds;
pub mod lists;
pub mod references;

pub use classify::{Classification, ClassifiedLine, LineClassifier};
