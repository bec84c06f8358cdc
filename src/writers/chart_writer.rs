use crate::error::Result;
use crate::models::ChartRow;
use crate::utils::constants::{
    CHART_ASPECT_RATIO, CHART_MARKER_OPACITY, CHART_TITLE, CHART_TITLE_FONT_SIZE, COL_AVG_TEMPERATURE,
    COL_AVG_VALUE, COL_DATE, COL_STATE, DATE_FORMAT,
};
use plotly::common::{Anchor, ColorBar, ColorScale, ColorScalePalette, Font, Marker, Mode, Title};
use plotly::layout::{AspectMode, AspectRatio, Axis, AxisType, LayoutScene};
use plotly::{Layout, Plot, Scatter3D};
use std::path::Path;
use tracing::{debug, info};

/// Renders merged rows as a 3D scatter of region × date × value, colored by
/// temperature.
pub struct ChartWriter {
    title: String,
    open_viewer: bool,
}

impl ChartWriter {
    pub fn new() -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            open_viewer: true,
        }
    }

    pub fn with_open_viewer(mut self, open_viewer: bool) -> Self {
        self.open_viewer = open_viewer;
        self
    }

    /// Build the figure with plotly.js embedded; rows are plotted in the order given
    pub fn build_plot(&self, rows: &[ChartRow]) -> Plot {
        let regions: Vec<String> = rows.iter().map(|r| r.region.clone()).collect();
        let dates: Vec<String> = rows
            .iter()
            .map(|r| r.date.format(DATE_FORMAT).to_string())
            .collect();
        let values: Vec<i64> = rows.iter().map(|r| r.value).collect();
        // Missing readings serialize as null and render uncolored
        let temperatures: Vec<f64> = rows
            .iter()
            .map(|r| r.temperature.unwrap_or(f64::NAN))
            .collect();

        let trace = Scatter3D::new(regions, dates, values)
            .mode(Mode::Markers)
            .marker(
                Marker::new()
                    .color_array(temperatures)
                    .color_scale(ColorScale::Palette(ColorScalePalette::Viridis))
                    .show_scale(true)
                    .color_bar(ColorBar::new().title(Title::with_text(COL_AVG_TEMPERATURE)))
                    .opacity(CHART_MARKER_OPACITY),
            );

        let (x, y, z) = CHART_ASPECT_RATIO;
        let scene = LayoutScene::new()
            .aspect_mode(AspectMode::Manual)
            .aspect_ratio(AspectRatio::new().x(x).y(y).z(z))
            .x_axis(
                Axis::new()
                    .title(Title::with_text(COL_STATE))
                    .type_(AxisType::Category),
            )
            .y_axis(Axis::new().title(Title::with_text(COL_DATE)).type_(AxisType::Date))
            .z_axis(Axis::new().title(Title::with_text(COL_AVG_VALUE)));

        let layout = Layout::new()
            .title(
                Title::with_text(self.title.as_str())
                    .font(Font::new().size(CHART_TITLE_FONT_SIZE))
                    .x(0.5)
                    .x_anchor(Anchor::Center)
                    .y_anchor(Anchor::Top),
            )
            .scene(scene);

        let mut plot = Plot::new();
        plot.use_local_plotly();
        plot.add_trace(trace);
        plot.set_layout(layout);
        plot
    }

    /// Write a standalone HTML document to `path`, then open the viewer if enabled
    pub fn write_chart(&self, rows: &[ChartRow], path: &Path) -> Result<()> {
        let plot = self.build_plot(rows);
        std::fs::write(path, plot.to_html())?;
        info!("Wrote chart with {} points to {}", rows.len(), path.display());

        if self.open_viewer {
            debug!("Opening chart viewer");
            plot.show();
        }

        Ok(())
    }
}

impl Default for ChartWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_rows() -> Vec<ChartRow> {
        let date = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap();
        vec![
            ChartRow {
                date,
                region: "California".to_string(),
                temperature: Some(10.5),
                value: 0,
            },
            ChartRow {
                date,
                region: "Texas".to_string(),
                temperature: None,
                value: 200000,
            },
        ]
    }

    #[test]
    fn test_layout_settings_in_figure() {
        let writer = ChartWriter::new().with_open_viewer(false);
        let json = writer.build_plot(&sample_rows()).to_json();

        assert!(json.contains(CHART_TITLE));
        assert!(json.contains("\"scatter3d\""));
        assert!(json.contains("\"California\""));
        assert!(json.contains("\"2000-01-31\""));
        assert!(json.contains("200000"));

        assert!(json.contains("\"aspectmode\":\"manual\""));
        assert!(json.contains("\"aspectratio\":{\"x\":2.0,\"y\":1.0,\"z\":1.0}"));
        assert!(json.contains("\"xanchor\":\"center\""));
        assert!(json.contains("\"yanchor\":\"top\""));
        assert!(json.contains("\"size\":28"));
        assert!(json.contains("\"type\":\"category\""));
        assert!(json.contains("\"type\":\"date\""));
        assert!(json.contains("\"opacity\":0.7"));
        // Missing reading stays uncolored
        assert!(json.contains("\"color\":[10.5,null]"));
    }

    #[test]
    fn test_write_chart_overwrites_html() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("chart.html");
        std::fs::write(&path, "old")?;

        let writer = ChartWriter::new().with_open_viewer(false);
        writer.write_chart(&sample_rows(), &path)?;

        let html = std::fs::read_to_string(&path)?;
        assert!(html.contains("<html"));
        assert!(html.contains(CHART_TITLE));
        assert!(!html.starts_with("old"));
        // plotly.js is inlined, not fetched
        assert!(!html.contains("cdn.plot.ly"));

        Ok(())
    }
}
