// Domain layer: request-scoped models and the ports to the two external collaborators.

pub mod model;
pub mod ports;
