/// Domain layer - document model and pure aggregation services
///
/// Nothing in this layer talks to discovery engines or writers; it only
/// touches the filesystem to read file content and identity.
pub mod domain;
pub mod services;
