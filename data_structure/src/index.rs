pub mod vec;

/// A marker trait for types that can be indexed by `Idx`.
pub trait Indexable<Idx> {}
