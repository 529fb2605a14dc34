// Pipeline processing: completeness split, text normalization, and enrichment

pub mod enrich;
pub mod normalize;
pub mod partition;

pub use enrich::enrich;
pub use normalize::to_snake;
pub use partition::{partition, Partition};
