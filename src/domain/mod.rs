// Domain layer: calculator model and the input port. std/thiserror only.

pub mod model;
pub mod ports;
