use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn key(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Right,
    Bottom,
    Left,
}

/// Complete `new Chart(canvas, config)` argument
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

/// One colour for the whole dataset, or one per data point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fill {
    Solid(String),
    Palette(Vec<String>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<Axis>,
    pub responsive: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scales: BTreeMap<&'static str, Scale>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            index_axis: None,
            responsive: true,
            plugins: Plugins::default(),
            scales: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    /// Tick labels go through `format_currency`. A JS callback cannot be
    /// serialized, so the binding installs it after conversion.
    #[serde(skip)]
    pub currency_ticks: bool,
}

impl ChartConfig {
    pub fn new(kind: ChartKind, labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self {
            kind,
            data: ChartData { labels, datasets },
            options: ChartOptions::default(),
        }
    }

    pub fn hide_legend(mut self) -> Self {
        self.options.plugins.legend.display = Some(false);
        self
    }

    pub fn legend_at(mut self, position: LegendPosition) -> Self {
        self.options.plugins.legend.position = Some(position);
        self
    }

    /// Bars grow along the x axis, categories sit on y
    pub fn horizontal(mut self) -> Self {
        self.options.index_axis = Some(Axis::Y);
        self
    }

    pub fn scale(mut self, axis: Axis, scale: Scale) -> Self {
        self.options.scales.insert(axis.key(), scale);
        self
    }

    /// Axis keys whose ticks need the currency callback
    pub fn currency_axes(&self) -> Vec<&'static str> {
        self.options
            .scales
            .iter()
            .filter(|(_, scale)| scale.currency_ticks)
            .map(|(key, _)| *key)
            .collect()
    }
}
