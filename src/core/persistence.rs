use crate::core::store::StationStore;
use crate::domain::model::Stations;
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;

pub const STATIONS_KEY: &str = "stations";
pub const COMMODITY_TYPES_KEY: &str = "commodityTypes";

/// Writes the full snapshot, replacing whatever was stored before.
pub fn save_snapshot<S: KeyValueStore + ?Sized>(store: &StationStore, storage: &mut S) -> Result<()> {
    let stations = serde_json::to_string(store.stations())?;
    let commodity_types = serde_json::to_string(store.commodity_types())?;

    storage.set(STATIONS_KEY, &stations)?;
    storage.set(COMMODITY_TYPES_KEY, &commodity_types)?;

    tracing::debug!(
        "Saved snapshot: {} stations, {} commodity types",
        store.stations().len(),
        store.commodity_types().len()
    );
    Ok(())
}

/// Reads both keys. A missing key yields an empty collection.
pub fn load_snapshot<S: KeyValueStore + ?Sized>(storage: &S) -> Result<StationStore> {
    let stations: Stations = match storage.get(STATIONS_KEY)? {
        Some(raw) => serde_json::from_str(&raw)?,
        None => Stations::new(),
    };
    let commodity_types: Vec<String> = match storage.get(COMMODITY_TYPES_KEY)? {
        Some(raw) => serde_json::from_str(&raw)?,
        None => Vec::new(),
    };

    tracing::debug!(
        "Loaded snapshot: {} stations, {} commodity types",
        stations.len(),
        commodity_types.len()
    );
    Ok(StationStore::from_parts(stations, commodity_types))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStorage;
    use crate::utils::error::TrackerError;

    #[test]
    fn test_empty_storage_loads_defaults() {
        let storage = MemoryStorage::new();
        let store = load_snapshot(&storage).unwrap();
        assert!(store.stations().is_empty());
        assert!(store.commodity_types().is_empty());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut store = StationStore::new();
        store.create_station("Alpha", 10.0, 20.0).unwrap();
        store.create_station("Beta", -33.8688, 151.2093).unwrap();
        store.register_commodity_type("Water").unwrap();
        store.register_commodity_type("Rice").unwrap();
        store.set_commodity("Alpha", "Water", 5).unwrap();

        let mut storage = MemoryStorage::new();
        save_snapshot(&store, &mut storage).unwrap();
        let reloaded = load_snapshot(&storage).unwrap();

        assert_eq!(reloaded, store);
        assert_eq!(reloaded.commodity_types(), ["Water", "Rice"]);
    }

    #[test]
    fn test_stored_format() {
        let mut store = StationStore::new();
        store.create_station("Alpha", 10.5, 20.0).unwrap();
        store.set_commodity("Alpha", "Water", 5).unwrap();

        let mut storage = MemoryStorage::new();
        save_snapshot(&store, &mut storage).unwrap();

        let stations: serde_json::Value =
            serde_json::from_str(&storage.get(STATIONS_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(
            stations,
            serde_json::json!({"Alpha": {"lat": 10.5, "lon": 20.0, "commodities": {"Water": 5}}})
        );
        assert_eq!(storage.get(COMMODITY_TYPES_KEY).unwrap().unwrap(), "[]");
    }

    #[test]
    fn test_malformed_content_is_reported() {
        let mut storage = MemoryStorage::new();
        storage.set(STATIONS_KEY, "{not json").unwrap();
        assert!(matches!(
            load_snapshot(&storage),
            Err(TrackerError::SerializationError(_))
        ));
    }
}
