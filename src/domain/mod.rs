// Domain layer: value types and the settings port. No engine logic lives here.

pub mod model;
pub mod ports;
