use crate::domain::model::{Station, Stations};
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{require_finite, require_non_empty, require_positive_quantity};

/// In-memory stations and commodity types.
///
/// Every mutation validates its arguments before touching state, so a failed
/// call leaves the store exactly as it was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationStore {
    stations: Stations,
    commodity_types: Vec<String>,
}

impl StationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(stations: Stations, commodity_types: Vec<String>) -> Self {
        Self {
            stations,
            commodity_types,
        }
    }

    pub fn stations(&self) -> &Stations {
        &self.stations
    }

    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    pub fn commodity_types(&self) -> &[String] {
        &self.commodity_types
    }

    pub fn create_station(&mut self, name: &str, lat: f64, lon: f64) -> Result<()> {
        require_non_empty("station name", name)?;
        require_finite("lat", lat)?;
        require_finite("lon", lon)?;

        if self.stations.contains_key(name) {
            return Err(TrackerError::DuplicateStation {
                name: name.to_string(),
            });
        }

        self.stations.insert(name.to_string(), Station::new(lat, lon));
        tracing::debug!("Created station {} at ({}, {})", name, lat, lon);
        Ok(())
    }

    /// Returns `true` when the type was not known before.
    pub fn register_commodity_type(&mut self, name: &str) -> Result<bool> {
        require_non_empty("commodity type", name)?;

        if self.commodity_types.iter().any(|known| known == name) {
            return Ok(false);
        }

        self.commodity_types.push(name.to_string());
        tracing::debug!("Registered commodity type {}", name);
        Ok(true)
    }

    /// Overwrites the quantity. Zero or negative quantities are refused, never
    /// treated as a removal.
    pub fn set_commodity(&mut self, station: &str, commodity: &str, quantity: i64) -> Result<()> {
        require_non_empty("station", station)?;
        require_non_empty("commodity type", commodity)?;
        let quantity = require_positive_quantity("quantity", quantity)?;

        let record = self.station_mut(station)?;
        record.commodities.insert(commodity.to_string(), quantity);
        Ok(())
    }

    /// Adds `delta` to the current quantity (zero when absent). A result of
    /// zero or less removes the entry. Returns the new quantity.
    pub fn adjust_commodity(&mut self, station: &str, commodity: &str, delta: i64) -> Result<u64> {
        require_non_empty("commodity type", commodity)?;

        let record = self.station_mut(station)?;
        let current = record.quantity(commodity);
        let next = current.saturating_add_signed(delta);

        if next > 0 {
            record.commodities.insert(commodity.to_string(), next);
        } else {
            record.commodities.shift_remove(commodity);
        }
        Ok(next)
    }

    fn station_mut(&mut self, name: &str) -> Result<&mut Station> {
        self.stations
            .get_mut(name)
            .ok_or_else(|| TrackerError::UnknownStation {
                name: name.to_string(),
            })
    }
}
