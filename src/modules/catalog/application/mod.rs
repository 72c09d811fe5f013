pub mod defaults;
pub mod ports;
