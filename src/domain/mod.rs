// Domain layer: the values the scanner produces and the ports it writes through.

pub mod model;
pub mod ports;
