use crate::core::palette::ColorAssignments;
use crate::domain::model::{Marker, Station, TooltipEntry, TooltipPayload};
use crate::domain::ports::MapView;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// The markers currently on the map, keyed by station name.
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    markers: BTreeMap<String, Marker>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, station: &str) -> Option<&Marker> {
        self.markers.get(station)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    /// Recomputes one station's marker and pushes the result to the map.
    ///
    /// Returns `true` if the marker set changed: a marker was (re)created or
    /// removed. A station that had no marker and still has none is a no-op.
    pub fn sync_station<M: MapView + ?Sized>(
        &mut self,
        name: &str,
        station: &Station,
        colors: &mut ColorAssignments,
        map: &mut M,
    ) -> bool {
        match Marker::for_station(name, station) {
            Some(marker) => {
                let tooltip = tooltip_for(&marker, colors);
                map.upsert_marker(name, marker.lat, marker.lon, &tooltip);
                tracing::debug!(
                    "Marker for {} shows {} commodities",
                    name,
                    marker.commodities.len()
                );
                self.markers.insert(name.to_string(), marker);
                true
            }
            None => {
                if self.markers.remove(name).is_some() {
                    map.remove_marker(name);
                    tracing::debug!("Removed marker for {}", name);
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut markers = self.markers.values();
        let first = markers.next()?;
        let start = Bounds {
            south: first.lat,
            west: first.lon,
            north: first.lat,
            east: first.lon,
        };
        Some(markers.fold(start, |b, m| Bounds {
            south: b.south.min(m.lat),
            west: b.west.min(m.lon),
            north: b.north.max(m.lat),
            east: b.east.max(m.lon),
        }))
    }

    /// Fits the view to all markers. A single marker is centred at
    /// `single_marker_zoom` because fitting a point would zoom in all the way.
    pub fn recentre<M: MapView + ?Sized>(&self, map: &mut M, single_marker_zoom: u8) {
        let mut markers = self.markers.values();
        match (markers.next(), markers.next()) {
            (None, _) => {}
            (Some(only), None) => map.center_on(only.lat, only.lon, single_marker_zoom),
            (Some(_), Some(_)) => map.fit_to_all_markers(),
        }
    }
}

pub fn tooltip_for(marker: &Marker, colors: &mut ColorAssignments) -> TooltipPayload {
    let entries = marker
        .commodities
        .iter()
        .map(|(commodity, quantity)| TooltipEntry {
            commodity: commodity.clone(),
            quantity: *quantity,
            color: colors.color_for(commodity),
        })
        .collect();
    TooltipPayload {
        title: marker.station.clone(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::map::{MapCall, RecordingMap};
    use crate::core::palette::Palette;

    fn colors() -> ColorAssignments {
        ColorAssignments::new(Palette::generate(30, Some(11)))
    }

    fn stocked(lat: f64, lon: f64, commodity: &str, qty: u64) -> Station {
        let mut station = Station::new(lat, lon);
        station.commodities.insert(commodity.to_string(), qty);
        station
    }

    #[test]
    fn test_empty_station_never_gets_marker() {
        let mut set = MarkerSet::new();
        let mut map = RecordingMap::new();
        let changed = set.sync_station("Alpha", &Station::new(1.0, 2.0), &mut colors(), &mut map);
        assert!(!changed);
        assert!(set.is_empty());
        assert!(map.calls().is_empty());
    }

    #[test]
    fn test_marker_created_then_removed() {
        let mut set = MarkerSet::new();
        let mut map = RecordingMap::new();
        let mut colors = colors();

        assert!(set.sync_station("Alpha", &stocked(1.0, 2.0, "Water", 5), &mut colors, &mut map));
        assert_eq!(set.get("Alpha").unwrap().commodities["Water"], 5);
        assert!(map.has_marker("Alpha"));

        assert!(set.sync_station("Alpha", &Station::new(1.0, 2.0), &mut colors, &mut map));
        assert!(set.get("Alpha").is_none());
        assert!(!map.has_marker("Alpha"));
    }

    #[test]
    fn test_recentre_rules() {
        let mut set = MarkerSet::new();
        let mut map = RecordingMap::new();
        let mut colors = colors();

        set.recentre(&mut map, 8);
        assert!(map.calls().is_empty());

        set.sync_station("Alpha", &stocked(10.0, 20.0, "Water", 1), &mut colors, &mut map);
        set.recentre(&mut map, 8);
        assert_eq!(map.calls().last(), Some(&MapCall::CenterOn(10.0, 20.0, 8)));

        set.sync_station("Beta", &stocked(-5.0, 40.0, "Rice", 2), &mut colors, &mut map);
        set.recentre(&mut map, 8);
        assert_eq!(map.calls().last(), Some(&MapCall::FitToAllMarkers));
    }

    #[test]
    fn test_bounds_cover_all_markers() {
        let mut set = MarkerSet::new();
        let mut map = RecordingMap::new();
        let mut colors = colors();
        assert!(set.bounds().is_none());

        set.sync_station("Alpha", &stocked(10.0, 20.0, "Water", 1), &mut colors, &mut map);
        set.sync_station("Beta", &stocked(-5.0, 40.0, "Water", 1), &mut colors, &mut map);
        assert_eq!(
            set.bounds(),
            Some(Bounds {
                south: -5.0,
                west: 20.0,
                north: 10.0,
                east: 40.0
            })
        );
    }

    #[test]
    fn test_tooltip_uses_cached_colors() {
        let mut colors = colors();
        let water = colors.color_for("Water");
        let marker = Marker::for_station("Alpha", &stocked(1.0, 2.0, "Water", 3)).unwrap();
        let tooltip = tooltip_for(&marker, &mut colors);
        assert_eq!(tooltip.title, "Alpha");
        assert_eq!(
            tooltip.entries,
            vec![TooltipEntry {
                commodity: "Water".to_string(),
                quantity: 3,
                color: water
            }]
        );
    }
}
