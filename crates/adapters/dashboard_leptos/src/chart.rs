//! Resource history chart drawn with `plotters` onto the page's canvas.

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use pyropanel_domain::chart::ChartBuffer;

/// Upper bound of the y axis, in percent.
const Y_MAX: f64 = 100.0;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("canvas element '{0}' not found")]
    CanvasMissing(String),
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

fn draw_err(err: impl std::fmt::Display) -> ChartError {
    ChartError::Draw(err.to_string())
}

/// Label of the x axis slot `index`; slots not yet filled stay blank.
fn axis_label(labels: &[&str], index: usize) -> String {
    labels.get(index).map_or_else(String::new, |label| (*label).to_owned())
}

/// Line chart of CPU and memory history.
#[derive(Debug, Clone)]
pub struct ResourceChart {
    canvas_id: String,
}

impl ResourceChart {
    /// Look up the canvas by id; `None` when the page has no chart.
    pub fn find(canvas_id: &str) -> Option<Self> {
        CanvasBackend::new(canvas_id).map(|_| Self {
            canvas_id: canvas_id.to_owned(),
        })
    }

    /// Redraw the whole chart from `buffer`.
    ///
    /// The x axis spans the buffer capacity so points keep their slot width
    /// while the buffer fills up.
    pub fn draw(&self, buffer: &ChartBuffer) -> Result<(), ChartError> {
        let backend = CanvasBackend::new(&self.canvas_id)
            .ok_or_else(|| ChartError::CanvasMissing(self.canvas_id.clone()))?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let labels: Vec<&str> = buffer.labels().collect();
        let label_formatter = |index: &usize| axis_label(&labels, *index);

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(0..buffer.capacity(), 0.0..Y_MAX)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_labels(labels.len().max(1))
            .x_label_formatter(&label_formatter)
            .y_desc("%")
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(LineSeries::new(buffer.cpu().enumerate(), &RED))
            .map_err(draw_err)?
            .label("CPU")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
        chart
            .draw_series(LineSeries::new(buffer.memory().enumerate(), &BLUE))
            .map_err(draw_err)?
            .label("Memory")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        Ok(())
    }
}
