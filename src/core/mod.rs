pub mod actions;
pub mod dashboard;
pub mod palette;
pub mod persistence;
pub mod projection;
pub mod session;
pub mod store;
pub mod views;

pub use crate::domain::model::{Marker, Station, TooltipPayload};
pub use crate::domain::ports::{Authenticator, ConfigProvider, KeyValueStore, MapView};
pub use crate::utils::error::Result;
