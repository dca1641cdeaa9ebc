// Domain layer: blueprint model and the ports the service depends on.

pub mod model;
pub mod ports;
