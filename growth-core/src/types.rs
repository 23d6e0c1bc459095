/// Index of a node in a [`crate::path::Path`] (and in the spatial grid
/// rebuilt from it each step).
///
/// This is an index into `Path::nodes`, and is only meaningful until the
/// next split or prune pass changes the sequence.
pub type NodeIndex = usize;
