// Domain layer: core models and ports (interfaces). No external
// dependencies beyond the serde/clap derives on the models.

pub mod model;
pub mod ports;
