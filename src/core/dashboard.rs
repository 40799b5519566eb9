use crate::core::actions::{Action, Outcome};
use crate::core::palette::{ColorAssignments, Palette, DEFAULT_PALETTE_SIZE};
use crate::core::persistence::{load_snapshot, save_snapshot};
use crate::core::projection::MarkerSet;
use crate::core::session::require_session;
use crate::core::store::StationStore;
use crate::domain::ports::{ConfigProvider, KeyValueStore, MapView};
use crate::utils::error::Result;
use crate::utils::validation::{parse_coordinate, parse_quantity, require_non_empty};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub default_center: (f64, f64),
    pub default_zoom: u8,
    pub single_marker_zoom: u8,
    pub palette_size: usize,
    pub palette_seed: Option<u64>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_center: (20.5937, 78.9629),
            default_zoom: 5,
            single_marker_zoom: 8,
            palette_size: DEFAULT_PALETTE_SIZE,
            palette_seed: None,
        }
    }
}

impl DashboardSettings {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            default_center: config.default_center(),
            default_zoom: config.default_zoom(),
            single_marker_zoom: config.single_marker_zoom(),
            palette_size: config.palette_size(),
            palette_seed: config.palette_seed(),
        }
    }
}

/// Application context: owns the store and the collaborators it syncs to.
pub struct Dashboard<S: KeyValueStore, M: MapView> {
    store: StationStore,
    storage: S,
    map: M,
    markers: MarkerSet,
    colors: ColorAssignments,
    settings: DashboardSettings,
}

impl<S: KeyValueStore, M: MapView> Dashboard<S, M> {
    /// Loads the snapshot and draws every stocked station. Refused without a
    /// login session.
    pub fn open(storage: S, mut map: M, settings: DashboardSettings) -> Result<Self> {
        require_session(&storage)?;
        let store = load_snapshot(&storage)?;

        let (lat, lon) = settings.default_center;
        map.center_on(lat, lon, settings.default_zoom);

        let mut dashboard = Self {
            store,
            storage,
            map,
            markers: MarkerSet::new(),
            colors: ColorAssignments::new(Palette::generate(
                settings.palette_size,
                settings.palette_seed,
            )),
            settings,
        };

        for (name, station) in dashboard.store.stations() {
            dashboard
                .markers
                .sync_station(name, station, &mut dashboard.colors, &mut dashboard.map);
        }
        dashboard
            .markers
            .recentre(&mut dashboard.map, dashboard.settings.single_marker_zoom);

        tracing::info!(
            "Dashboard opened with {} stations, {} markers",
            dashboard.store.stations().len(),
            dashboard.markers.len()
        );
        Ok(dashboard)
    }

    pub fn store(&self) -> &StationStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn into_parts(self) -> (StationStore, S, M) {
        (self.store, self.storage, self.map)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        let kind = action.name();
        let result = self.apply(action);

        match &result {
            Ok(outcome) => tracing::info!(
                "Applied {} (saved: {}, markers changed: {})",
                kind,
                outcome.saved,
                outcome.markers_changed
            ),
            Err(e) => tracing::warn!("Refused {}: {}", kind, e),
        }
        result
    }

    fn apply(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::AddStation { name, lat, lon } => {
                require_non_empty("station name", &name)?;
                let lat = parse_coordinate("lat", &lat)?;
                let lon = parse_coordinate("lon", &lon)?;
                self.create_station(&name, lat, lon)
            }
            Action::AddCommodityType { name } => self.register_commodity_type(&name),
            Action::AssignCommodity {
                station,
                commodity,
                quantity,
            } => {
                require_non_empty("station", &station)?;
                require_non_empty("commodity type", &commodity)?;
                let quantity = parse_quantity("quantity", &quantity)?;
                self.set_commodity(&station, &commodity, quantity)
            }
            Action::Increment { station, commodity } => {
                self.adjust_commodity(&station, &commodity, 1)
            }
            Action::Decrement { station, commodity } => {
                self.adjust_commodity(&station, &commodity, -1)
            }
        }
    }

    pub fn create_station(&mut self, name: &str, lat: f64, lon: f64) -> Result<Outcome> {
        let previous = self.store.clone();
        self.store.create_station(name, lat, lon)?;
        self.commit(previous, Some(name))
    }

    pub fn register_commodity_type(&mut self, name: &str) -> Result<Outcome> {
        let previous = self.store.clone();
        if self.store.register_commodity_type(name)? {
            self.commit(previous, None)
        } else {
            Ok(Outcome {
                saved: false,
                markers_changed: false,
            })
        }
    }

    pub fn set_commodity(&mut self, station: &str, commodity: &str, quantity: i64) -> Result<Outcome> {
        let previous = self.store.clone();
        self.store.set_commodity(station, commodity, quantity)?;
        self.commit(previous, Some(station))
    }

    pub fn adjust_commodity(&mut self, station: &str, commodity: &str, delta: i64) -> Result<Outcome> {
        let previous = self.store.clone();
        self.store.adjust_commodity(station, commodity, delta)?;
        self.commit(previous, Some(station))
    }

    /// Save, then resync the touched station's marker and recentre if the
    /// marker set changed. A failed save restores `previous`, so the store
    /// and the markers stay as they were before the mutation.
    fn commit(&mut self, previous: StationStore, touched: Option<&str>) -> Result<Outcome> {
        if let Err(e) = save_snapshot(&self.store, &mut self.storage) {
            self.store = previous;
            return Err(e);
        }

        let mut markers_changed = false;
        if let Some(name) = touched {
            if let Some(station) = self.store.station(name) {
                markers_changed =
                    self.markers
                        .sync_station(name, station, &mut self.colors, &mut self.map);
            }
        }
        if markers_changed {
            self.markers
                .recentre(&mut self.map, self.settings.single_marker_zoom);
        }

        Ok(Outcome {
            saved: true,
            markers_changed,
        })
    }
}
