use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::{TemporalIndex, ValueIndex};
use crate::processors::{
    DataMerger, FilterStats, MergeStats, PipelineReport, TemperatureFilter, TemporalIndexer,
};
use crate::readers::{MergedReader, TemperatureReader, ValueReader};
use crate::utils::progress::ProgressReporter;
use crate::writers::{ChartWriter, CsvWriter};
use tracing::info;

/// Runs the four stages in order, each finishing its file before the next
/// one reads.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<PipelineReport> {
        let mut report = PipelineReport::new();

        report.filter = self.filter_temperatures()?;

        let temporal = self.build_temporal_index()?;
        report.temporal_dates = temporal.len();
        report.temporal_observations = temporal.observation_count();

        let values = self.build_value_index()?;
        report.value_dates = values.len();
        report.value_regions = values.regions().len();

        let (merged_rows, merge_stats) = self.join_and_emit(&temporal, &values)?;
        report.merged_rows = merged_rows;
        report.merge = merge_stats;

        report.chart_points = self.render_chart()?;
        report.chart_path = Some(self.config.chart_output.clone());

        Ok(report)
    }

    /// Stage 1: reduce the raw temperature source to target-country rows
    pub fn filter_temperatures(&self) -> Result<FilterStats> {
        let progress = self.spinner("Filtering temperature records...");
        info!(
            "Reading temperature source {}",
            self.config.temperature_source.display()
        );

        let filter = TemperatureFilter::new();
        let records = TemperatureReader::new().stream_records(&self.config.temperature_source)?;
        let (rows, stats) = filter.apply(records)?;

        CsvWriter::new().write_filtered(&rows, &self.config.filtered_output)?;
        info!(
            "Kept {} of {} rows for {} from {}",
            stats.rows_kept,
            stats.rows_read,
            filter.country(),
            filter.cutoff()
        );

        progress.finish_with_message(&format!("Filtered {} temperature rows", stats.rows_kept));
        Ok(stats)
    }

    /// Stage 2: index the filtered rows by date
    pub fn build_temporal_index(&self) -> Result<TemporalIndex> {
        let progress = self.spinner("Indexing temperatures by date...");

        let index = TemporalIndexer::new().index_file(&self.config.filtered_output)?;
        info!(
            "Temporal index has {} dates, {} observations",
            index.len(),
            index.observation_count()
        );

        progress.finish_with_message(&format!("Indexed {} temperature dates", index.len()));
        Ok(index)
    }

    /// Stage 3: index the wide-format values by date and region
    pub fn build_value_index(&self) -> Result<ValueIndex> {
        let progress = self.spinner("Indexing regional values...");
        info!("Reading value source {}", self.config.value_source.display());

        let index = ValueReader::new().read_value_index(&self.config.value_source)?;
        info!(
            "Value index has {} dates across {} regions",
            index.len(),
            index.regions().len()
        );

        progress.finish_with_message(&format!("Indexed {} value dates", index.len()));
        Ok(index)
    }

    /// Stage 4: join, dedupe and write the merged table
    pub fn join_and_emit(
        &self,
        temporal: &TemporalIndex,
        values: &ValueIndex,
    ) -> Result<(usize, MergeStats)> {
        let progress = self.spinner("Joining temperatures with values...");

        let (merged, stats) = DataMerger::new().merge(temporal, values);
        let written = CsvWriter::new().write_merged(&merged, &self.config.merged_output)?;
        info!(
            "Wrote {} merged rows to {} ({} dates without values, {} duplicates dropped)",
            written,
            self.config.merged_output.display(),
            stats.dates_skipped,
            stats.duplicates_dropped
        );

        progress.finish_with_message(&format!("Merged {} rows", written));
        Ok((written, stats))
    }

    /// Load the merged table and render the chart
    pub fn render_chart(&self) -> Result<usize> {
        let progress = self.spinner("Rendering chart...");

        let rows = MergedReader::new().read_chart_rows(&self.config.merged_output)?;
        ChartWriter::new()
            .with_open_viewer(self.config.open_viewer)
            .write_chart(&rows, &self.config.chart_output)?;

        progress.finish_with_message(&format!("Rendered {} points", rows.len()));
        Ok(rows.len())
    }

    fn spinner(&self, message: &str) -> ProgressReporter {
        ProgressReporter::new_spinner(message, self.config.silent)
    }
}
