mod node_idx;

pub use node_idx::NodeIdx;
