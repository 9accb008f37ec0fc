pub const REGISTRY_DOMAIN: &str = "huggingface.co";
pub const DATASET_MARKER: &str = "huggingface.co/datasets";
pub const CODE_HOSTS: &[&str] = &["github.com"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Model,
    Dataset,
    Code,
    Unknown,
}

/// Rule order matters: the dataset marker also contains the registry domain.
pub fn classify(locator: &str) -> Kind {
    if locator.contains(DATASET_MARKER) {
        Kind::Dataset
    } else if locator.contains(REGISTRY_DOMAIN) {
        Kind::Model
    } else if CODE_HOSTS.iter().any(|host| locator.contains(host)) {
        Kind::Code
    } else {
        Kind::Unknown
    }
}
