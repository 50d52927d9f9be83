// Domain layer: plain records and tagged unions. No I/O here.

pub mod model;
