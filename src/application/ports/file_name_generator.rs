#[cfg(test)]
use mockall::automock;

/// Strategy for naming blobs in the store
#[cfg_attr(test, automock)]
pub trait FileNameGenerator: Send + Sync {
    /// Return a name that no other call will ever return
    fn generate_unique_name(&self) -> String;
}
