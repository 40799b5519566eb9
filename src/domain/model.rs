use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Commodity name to quantity, in the order commodities were first stocked.
/// Every stored quantity is strictly positive.
pub type Commodities = IndexMap<String, u64>;

/// Station name to station record, in creation order.
pub type Stations = IndexMap<String, Station>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub commodities: Commodities,
}

impl Station {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            commodities: Commodities::new(),
        }
    }

    pub fn quantity(&self, commodity: &str) -> u64 {
        self.commodities.get(commodity).copied().unwrap_or(0)
    }

    pub fn total_quantity(&self) -> u64 {
        self.commodities
            .values()
            .fold(0u64, |acc, qty| acc.saturating_add(*qty))
    }
}

/// Map marker for a station that currently holds something.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub station: String,
    pub lat: f64,
    pub lon: f64,
    pub commodities: Commodities,
}

impl Marker {
    /// Returns `None` when the station's total quantity is zero.
    pub fn for_station(name: &str, station: &Station) -> Option<Self> {
        if station.total_quantity() == 0 {
            return None;
        }
        Some(Self {
            station: name.to_string(),
            lat: station.lat,
            lon: station.lon,
            commodities: station.commodities.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipEntry {
    pub commodity: String,
    pub quantity: u64,
    pub color: String,
}

/// What the map shows when hovering a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipPayload {
    pub title: String,
    pub entries: Vec<TooltipEntry>,
}

impl TooltipPayload {
    pub fn to_html(&self) -> String {
        let mut html = format!("<b>{}</b><br>", escape_html(&self.title));
        for entry in &self.entries {
            html.push_str(&format!(
                "<div style=\"display: flex; align-items: center;\">\
                 <div style=\"width: 10px; height: 10px; background-color: {}; \
                 border-radius: 50%; margin-right: 5px;\"></div>{}: {}</div>",
                entry.color,
                escape_html(&entry.commodity),
                entry.quantity
            ));
        }
        html
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
