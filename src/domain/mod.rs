// Domain layer: kata models and the `Kata` port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
