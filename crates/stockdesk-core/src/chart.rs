//! Figure payloads for the plotting library.
//!
//! Builders produce the trace/layout/config triple the browser-side plotting
//! call consumes. Rendering itself happens behind [`ChartRenderer`].
//!
//! ```rust
//! use stockdesk_core::{line_figure, LineSeries};
//!
//! let series = LineSeries::new("Portfolio", vec!["2024-01-02".into()], vec![10_250.0]);
//! let figure = line_figure(&series, "Portfolio value");
//! assert_eq!(figure.layout.title, "Portfolio value");
//! ```

use serde::{Deserialize, Serialize};

use crate::ChartError;

const DEFAULT_LINE_COLOR: &str = "#0d6efd";
const TEMPLATE: &str = "plotly_white";

/// Column-oriented OHLC series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CandlestickSeries {
    pub dates: Vec<String>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

impl CandlestickSeries {
    /// Every price column must have one point per date.
    pub fn validate(&self) -> Result<(), ChartError> {
        let expected = self.dates.len();
        let columns = [
            ("open", self.open.len()),
            ("high", self.high.len()),
            ("low", self.low.len()),
            ("close", self.close.len()),
        ];

        match columns.iter().find(|(_, actual)| *actual != expected) {
            Some(&(column, actual)) => Err(ChartError::LengthMismatch {
                column,
                expected,
                actual,
            }),
            None => Ok(()),
        }
    }
}

/// Single named line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl LineSeries {
    pub fn new(name: impl Into<String>, x: Vec<String>, y: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Candlestick {
        x: Vec<String>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        name: String,
    },
    Scatter {
        x: Vec<String>,
        y: Vec<f64>,
        mode: String,
        name: String,
        line: LineStyle,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Axis {
    pub title: String,
}

impl Axis {
    fn titled(title: &str) -> Self {
        Self {
            title: String::from(title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub template: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FigureConfig {
    pub responsive: bool,
}

/// Everything one plotting call needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: FigureConfig,
}

/// Boundary to the plotting library. Rendering is fire-and-forget.
pub trait ChartRenderer {
    fn render(&self, container_id: &str, figure: &Figure);
}

/// Fails when a price column does not line up with the dates.
pub fn candlestick_figure(series: &CandlestickSeries) -> Result<Figure, ChartError> {
    series.validate()?;

    Ok(Figure {
        data: vec![Trace::Candlestick {
            x: series.dates.clone(),
            open: series.open.clone(),
            high: series.high.clone(),
            low: series.low.clone(),
            close: series.close.clone(),
            name: String::from("Price"),
        }],
        layout: Layout {
            title: String::from("Stock Price Chart"),
            xaxis: Axis::titled("Date"),
            yaxis: Axis::titled("Price ($)"),
            template: String::from(TEMPLATE),
        },
        config: FigureConfig { responsive: true },
    })
}

pub fn line_figure(series: &LineSeries, title: &str) -> Figure {
    let color = series
        .color
        .clone()
        .unwrap_or_else(|| String::from(DEFAULT_LINE_COLOR));

    Figure {
        data: vec![Trace::Scatter {
            x: series.x.clone(),
            y: series.y.clone(),
            mode: String::from("lines"),
            name: series.name.clone(),
            line: LineStyle { color },
        }],
        layout: Layout {
            title: String::from(title),
            xaxis: Axis::titled("Date"),
            yaxis: Axis::titled("Value"),
            template: String::from(TEMPLATE),
        },
        config: FigureConfig { responsive: true },
    }
}
