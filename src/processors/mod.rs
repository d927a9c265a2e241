pub mod assembler;
pub mod normalizer;
pub mod pipeline;

pub use assembler::DatasetAssembler;
pub use normalizer::{ColumnMap, RecordNormalizer};
pub use pipeline::{RunSummary, StationPipeline};
