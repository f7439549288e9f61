pub mod graph;
pub mod index;

pub use bitvec::vec::BitVec;
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
