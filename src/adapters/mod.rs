// Adapters layer: concrete I/O behind the domain ports.

pub mod input;
pub mod output;
