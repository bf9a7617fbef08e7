// Domain layer: core models and ports (interfaces). No external dependencies beyond std/serde/clap derives.

pub mod model;
pub mod ports;
