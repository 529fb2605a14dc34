// Trait seams between the pipeline and its collaborators
pub mod ports;
