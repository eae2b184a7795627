//! End-to-end flows: load both resources, click a district, inspect the chart pane.

use futures::executor::block_on;
use std::collections::HashMap;
use tws_core::chart::{selection_title, ChartView, SeriesPoint, NO_SELECTION_MESSAGE};
use tws_core::config::Endpoints;
use tws_core::district::normalize_district;
use tws_core::loader::{load_state, Fetch, FetchedBody};
use tws_core::{LoadError, LoadState};

struct StaticBackend {
    routes: HashMap<&'static str, (u16, &'static str)>,
}

impl StaticBackend {
    fn new(tws: (u16, &'static str), boundaries: (u16, &'static str)) -> Self {
        let mut routes = HashMap::new();
        routes.insert("http://backend/api/tws", tws);
        routes.insert("http://backend/api/boundaries", boundaries);
        Self { routes }
    }
}

impl Fetch for StaticBackend {
    async fn get(&self, url: &str) -> Result<FetchedBody, LoadError> {
        let (status, body) = self.routes.get(url).copied().ok_or_else(|| LoadError::Transport {
            url: url.to_string(),
            message: "no route".to_string(),
        })?;
        Ok(FetchedBody {
            url: url.to_string(),
            status,
            status_text: String::new(),
            body: body.to_string(),
        })
    }
}

const BADGAM_BOUNDARY: &str = r#"{"type": "FeatureCollection", "features": [
    {"type": "Feature", "properties": {"DISTRICT": "Badgam"},
     "geometry": {"type": "Polygon", "coordinates": [[[74.5, 33.9], [74.9, 33.9], [74.9, 34.1], [74.5, 33.9]]]}}
]}"#;

const SRINAGAR_BOUNDARY: &str = r#"{"type": "FeatureCollection", "features": [
    {"type": "Feature", "properties": {"DISTRICT": "Srinagar"}, "geometry": null}
]}"#;

fn load(tws: (u16, &'static str), boundaries: (u16, &'static str)) -> LoadState {
    let backend = StaticBackend::new(tws, boundaries);
    block_on(load_state(&backend, &Endpoints::from_base("http://backend")))
}

/// What the root view derives from the current selection.
fn chart_pane(state: &LoadState, clicked: Option<&str>) -> (String, ChartView) {
    let data = state.data().expect("dashboard should be ready");
    (
        selection_title(clicked).to_string(),
        ChartView::new(data.series_for(clicked), clicked),
    )
}

#[test]
fn clicking_badgam_plots_its_two_years() {
    let state = load((200, r#"{"badgam": {"2010": 1.2, "2011": 1.5}}"#), (200, BADGAM_BOUNDARY));
    let data = state.data().unwrap();
    let clicked = data.boundaries.features[0].display_name();

    let (title, view) = chart_pane(&state, Some(clicked));
    assert_eq!(title, "Badgam");
    assert_eq!(
        view,
        ChartView::Series(vec![
            SeriesPoint { year: "2010".to_string(), value: 1.2 },
            SeriesPoint { year: "2011".to_string(), value: 1.5 },
        ])
    );
}

#[test]
fn clicking_district_without_data_shows_placeholder() {
    let state = load((200, "{}"), (200, SRINAGAR_BOUNDARY));
    let clicked = state.data().unwrap().boundaries.features[0].display_name();

    let (title, view) = chart_pane(&state, Some(clicked));
    assert_eq!(title, "Srinagar");
    assert_eq!(
        view,
        ChartView::Placeholder("No TWS data is available for Srinagar.".to_string())
    );
}

#[test]
fn before_any_click_asks_for_a_district() {
    let state = load((200, r#"{"badgam": {"2010": 1.2}}"#), (200, BADGAM_BOUNDARY));

    let (title, view) = chart_pane(&state, None);
    assert_eq!(title, "No District Selected");
    assert_eq!(view, ChartView::Placeholder(NO_SELECTION_MESSAGE.to_string()));
}

#[test]
fn lookup_matches_every_casing_and_padding_variant() {
    let state = load((200, r#"{"anantnag": {"2015": -0.4}}"#), (200, SRINAGAR_BOUNDARY));
    for name in ["Anantnag", "ANANTNAG", "  anantnag", "AnantNag \t"] {
        assert_eq!(normalize_district(name), "anantnag");
        let (_, view) = chart_pane(&state, Some(name));
        assert_eq!(view.points().len(), 1, "lookup missed {name:?}");
    }
}

#[test]
fn either_failing_endpoint_fails_the_whole_load() {
    let cases = [
        ((503, ""), (200, BADGAM_BOUNDARY)),
        ((200, "{}"), (404, "")),
        ((500, ""), (500, "")),
        ((200, "{}"), (200, "not json")),
    ];
    for (tws, boundaries) in cases {
        let state = load(tws, boundaries);
        assert!(state.error().is_some(), "expected failure for {tws:?} / {boundaries:?}");
        assert!(state.data().is_none());
    }
}

#[test]
fn record_list_payload_is_accepted() {
    let state = load(
        (200, r#"[{"district": "Badgam", "data": {"2010": 1.2, "2011": 1.5}}]"#),
        (200, BADGAM_BOUNDARY),
    );
    let (_, view) = chart_pane(&state, Some("Badgam"));
    assert_eq!(view.points().len(), 2);
}

#[test]
fn chart_plots_years_in_payload_order() {
    let state = load(
        (200, r#"{"badgam": {"2012": 0.4, "2010-Q2": 1.2, "2010-Q1": 1.5}}"#),
        (200, BADGAM_BOUNDARY),
    );
    let (_, view) = chart_pane(&state, Some("Badgam"));
    let years: Vec<&str> = view.points().iter().map(|p| p.year.as_str()).collect();
    assert_eq!(years, vec!["2012", "2010-Q2", "2010-Q1"]);
}
