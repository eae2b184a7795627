//! What the chart pane shows for the current selection.

use crate::dataset::TwsDataset;
use crate::series::WaterSeries;
use serde::Serialize;

/// Title shown above the chart before any district is clicked.
pub const NO_SELECTION_TITLE: &str = "No District Selected";

/// Placeholder shown before any district is clicked.
pub const NO_SELECTION_MESSAGE: &str = "Click on a district on the map to view its TWS data.";

/// One plotted point; serialized as `{"year": .., "value": ..}` for D3.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub year: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    /// A single-line informational message instead of a chart
    Placeholder(String),
    /// Points in series entry order, never empty
    Series(Vec<SeriesPoint>),
}

impl ChartView {
    /// Build the chart content from the selected district's series and its raw name.
    pub fn new(series: Option<&WaterSeries>, district: Option<&str>) -> Self {
        match series {
            Some(series) if !series.is_empty() => ChartView::Series(
                series
                    .iter()
                    .map(|(year, value)| SeriesPoint {
                        year: year.to_string(),
                        value,
                    })
                    .collect(),
            ),
            _ => ChartView::Placeholder(match district {
                Some(name) => no_data_message(name),
                None => NO_SELECTION_MESSAGE.to_string(),
            }),
        }
    }

    /// Look the selection up in the dataset and build the chart content.
    pub fn for_selection(dataset: &TwsDataset, district: Option<&str>) -> Self {
        Self::new(district.and_then(|name| dataset.lookup(name)), district)
    }

    pub fn points(&self) -> &[SeriesPoint] {
        match self {
            ChartView::Series(points) => points,
            ChartView::Placeholder(_) => &[],
        }
    }
}

pub fn no_data_message(district: &str) -> String {
    format!("No TWS data is available for {district}.")
}

/// Heading of the chart pane: the raw selected name as the map reported it.
pub fn selection_title(district: Option<&str>) -> &str {
    district.unwrap_or(NO_SELECTION_TITLE)
}
