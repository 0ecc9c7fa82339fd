/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod exporters;
pub mod filesystem;
pub mod network;
