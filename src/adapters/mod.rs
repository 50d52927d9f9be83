// Adapters layer: loading sample records from files and byte buffers.

pub mod fixtures;
