/// Edge weight type. Zero is not a valid weight.
pub type Weight = u32;
/// Accumulated weight of a path
pub type Distance = u64;
/// Vertex ceiling used by the console front ends
pub const DEFAULT_MAX_NODES: usize = 100;
/// Largest vertex ceiling a graph accepts. Per-vertex tables are allocated
/// up to the highest id, so the ceiling has to stay allocatable.
pub const MAX_NODES: usize = 1 << 22;
