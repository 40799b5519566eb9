/// A form submission from the dashboard, with fields exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddStation {
        name: String,
        lat: String,
        lon: String,
    },
    AddCommodityType {
        name: String,
    },
    AssignCommodity {
        station: String,
        commodity: String,
        quantity: String,
    },
    Increment {
        station: String,
        commodity: String,
    },
    Decrement {
        station: String,
        commodity: String,
    },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddStation { .. } => "add_station",
            Action::AddCommodityType { .. } => "add_commodity_type",
            Action::AssignCommodity { .. } => "assign_commodity",
            Action::Increment { .. } => "increment",
            Action::Decrement { .. } => "decrement",
        }
    }
}

/// What a successful action changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the snapshot was rewritten.
    pub saved: bool,
    /// Whether the marker set changed (and the view was recentred).
    pub markers_changed: bool,
}
