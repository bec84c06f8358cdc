pub mod data_merger;
pub mod pipeline;
pub mod report;
pub mod temperature_filter;
pub mod temporal_indexer;

pub use data_merger::{DataMerger, MergeStats};
pub use pipeline::Pipeline;
pub use report::PipelineReport;
pub use temperature_filter::{FilterStats, TemperatureFilter};
pub use temporal_indexer::TemporalIndexer;
