//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec sized for one link's pseudo-state observations (default + 3 states).
pub type SmallVec4<T> = SmallVec<[T; 4]>;

/// SmallVec sized for RGB channel triples.
pub type SmallVec3<T> = SmallVec<[T; 3]>;
