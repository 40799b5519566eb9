// Domain layer: station records, markers and the ports the core talks through.

pub mod model;
pub mod ports;
