// Domain layer: dataset records, query building and the ports the adapters implement.

pub mod model;
pub mod ports;
pub mod query;
