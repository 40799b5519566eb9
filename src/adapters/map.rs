use crate::domain::model::TooltipPayload;
use crate::domain::ports::MapView;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    UpsertMarker(String),
    RemoveMarker(String),
    FitToAllMarkers,
    CenterOn(f64, f64, u8),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub lat: f64,
    pub lon: f64,
    pub tooltip: TooltipPayload,
}

/// Headless map: keeps the markers it was given and logs every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingMap {
    markers: BTreeMap<String, PlacedMarker>,
    calls: Vec<MapCall>,
    view: Option<(f64, f64, u8)>,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[MapCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn has_marker(&self, key: &str) -> bool {
        self.markers.contains_key(key)
    }

    pub fn marker(&self, key: &str) -> Option<&PlacedMarker> {
        self.markers.get(key)
    }

    pub fn markers(&self) -> &BTreeMap<String, PlacedMarker> {
        &self.markers
    }

    /// Last explicit centre and zoom.
    pub fn view(&self) -> Option<(f64, f64, u8)> {
        self.view
    }
}

impl MapView for RecordingMap {
    fn upsert_marker(&mut self, key: &str, lat: f64, lon: f64, tooltip: &TooltipPayload) {
        self.markers.insert(
            key.to_string(),
            PlacedMarker {
                lat,
                lon,
                tooltip: tooltip.clone(),
            },
        );
        self.calls.push(MapCall::UpsertMarker(key.to_string()));
    }

    fn remove_marker(&mut self, key: &str) {
        self.markers.remove(key);
        self.calls.push(MapCall::RemoveMarker(key.to_string()));
    }

    fn fit_to_all_markers(&mut self) {
        self.calls.push(MapCall::FitToAllMarkers);
    }

    fn center_on(&mut self, lat: f64, lon: f64, zoom: u8) {
        self.view = Some((lat, lon, zoom));
        self.calls.push(MapCall::CenterOn(lat, lon, zoom));
    }
}
