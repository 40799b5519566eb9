use crate::core::store::StationStore;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct CommodityRow {
    pub commodity: String,
    pub quantity: u64,
}

/// One entry of the station list; each row carries the +/- controls.
#[derive(Debug, Clone, PartialEq)]
pub struct StationListItem {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub commodities: Vec<CommodityRow>,
}

impl fmt::Display for StationListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Lat: {}, Lon: {})", self.name, self.lat, self.lon)?;
        for row in &self.commodities {
            write!(f, "\n  {}: {}", row.commodity, row.quantity)?;
        }
        Ok(())
    }
}

pub fn station_options(store: &StationStore) -> Vec<&str> {
    store.stations().keys().map(String::as_str).collect()
}

pub fn commodity_options(store: &StationStore) -> Vec<&str> {
    store.commodity_types().iter().map(String::as_str).collect()
}

pub fn station_list(store: &StationStore) -> Vec<StationListItem> {
    store
        .stations()
        .iter()
        .map(|(name, station)| StationListItem {
            name: name.clone(),
            lat: station.lat,
            lon: station.lon,
            commodities: station
                .commodities
                .iter()
                .map(|(commodity, quantity)| CommodityRow {
                    commodity: commodity.clone(),
                    quantity: *quantity,
                })
                .collect(),
        })
        .collect()
}
