/// Package discovery adapters
mod manifest_discovery;
mod manifests;

pub use manifest_discovery::ManifestDiscovery;
pub use manifests::ManifestKind;
