// Domain layer: models, ports and the pure text/sentiment services.

pub mod model;
pub mod ports;

pub mod services;
