use crate::domain::model::TooltipPayload;
use crate::utils::error::Result;

/// Flat string key-value storage, the stand-in for the browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// The map widget. Markers are keyed by station name.
pub trait MapView {
    fn upsert_marker(&mut self, key: &str, lat: f64, lon: f64, tooltip: &TooltipPayload);
    fn remove_marker(&mut self, key: &str);
    fn fit_to_all_markers(&mut self);
    fn center_on(&mut self, lat: f64, lon: f64, zoom: u8);
}

pub trait Authenticator {
    fn authenticate(&self, username: &str, password: &str) -> bool;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn default_center(&self) -> (f64, f64);
    fn default_zoom(&self) -> u8;
    fn single_marker_zoom(&self) -> u8;
    fn palette_size(&self) -> usize;
    fn palette_seed(&self) -> Option<u64>;
    fn credentials(&self) -> Option<(&str, &str)>;
}
