// Adapters layer: concrete implementations of the domain ports (storage, map).

pub mod map;
pub mod storage;
