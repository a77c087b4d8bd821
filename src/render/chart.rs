use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Widget};

use crate::error::TrackerError;

/// Labeled bars, one per statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<(String, i64)>,
}

/// One line series of (date, value) samples.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(String, f64)>,
}

/// Chart backend the presenter draws through. The terminal implementation
/// below is the default; tests substitute a recording fake.
pub trait ChartRenderer {
    fn bar_chart(&self, spec: &BarChartSpec) -> Result<(), TrackerError>;
    fn line_chart(&self, spec: &LineChartSpec) -> Result<(), TrackerError>;
}

/// Renders charts as text by drawing ratatui widgets into an off-screen
/// buffer and writing the result to stdout.
pub struct TermChart {
    width: u16,
    height: u16,
}

impl Default for TermChart {
    fn default() -> Self {
        Self {
            width: 100,
            height: 20,
        }
    }
}

impl TermChart {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(10),
            height: height.max(5),
        }
    }

    /// Headless form of [`ChartRenderer::bar_chart`].
    pub fn bar_chart_text(&self, spec: &BarChartSpec) -> String {
        let bars: Vec<(&str, u64)> = spec
            .bars
            .iter()
            .map(|(label, value)| (label.as_str(), (*value).max(0) as u64))
            .collect();
        let bar_width = spec
            .bars
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(1)
            .clamp(3, 12) as u16;

        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(spec.title.as_str())
                    .title_bottom(format!("{} / {}", spec.x_label, spec.y_label)),
            )
            .bar_width(bar_width)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Cyan))
            .data(&bars);

        draw(chart, self.width, self.height)
    }

    /// Headless form of [`ChartRenderer::line_chart`].
    pub fn line_chart_text(&self, spec: &LineChartSpec) -> String {
        let points: Vec<(f64, f64)> = spec
            .points
            .iter()
            .enumerate()
            .map(|(i, (_, value))| (i as f64, *value))
            .collect();

        let x_max = (points.len().saturating_sub(1)).max(1) as f64;
        let (mut y_min, mut y_max) = points.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)),
        );
        if !y_min.is_finite() || !y_max.is_finite() {
            y_min = 0.0;
            y_max = 1.0;
        }
        if y_min == y_max {
            y_min -= 1.0;
            y_max += 1.0;
        }

        let x_labels = edge_labels(&spec.points);
        let y_labels = vec![
            format!("{:.1}", y_min),
            format!("{:.1}", (y_min + y_max) / 2.0),
            format!("{:.1}", y_max),
        ];

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points);

        let chart = Chart::new(vec![dataset])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(spec.title.as_str()),
            )
            .x_axis(
                Axis::default()
                    .title(spec.x_label.as_str())
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(spec.y_label.as_str())
                    .bounds([y_min, y_max])
                    .labels(y_labels),
            );

        draw(chart, self.width, self.height)
    }
}

impl ChartRenderer for TermChart {
    fn bar_chart(&self, spec: &BarChartSpec) -> Result<(), TrackerError> {
        println!("{}", self.bar_chart_text(spec));
        Ok(())
    }

    fn line_chart(&self, spec: &LineChartSpec) -> Result<(), TrackerError> {
        println!("{}", self.line_chart_text(spec));
        Ok(())
    }
}

/// First and last dates, plus the middle one when there are at least three.
fn edge_labels(points: &[(String, f64)]) -> Vec<String> {
    let mut labels = Vec::new();
    if let Some((first, _)) = points.first() {
        labels.push(first.clone());
    }
    if points.len() > 2 {
        labels.push(points[points.len() / 2].0.clone());
    }
    if points.len() > 1 {
        if let Some((last, _)) = points.last() {
            labels.push(last.clone());
        }
    }
    labels
}

fn draw(widget: impl Widget, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);

    let mut out = String::new();
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            if let Some(cell) = buf.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
