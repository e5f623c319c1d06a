/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod discovery;
pub mod filesystem;
pub mod formatters;
