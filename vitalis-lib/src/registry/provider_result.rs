use std::sync::Arc;

/// Outcome of a registry lookup.
#[derive(Debug, Clone)]
pub enum ProviderResult<T> {
    /// The registry returned metadata for the package.
    Found(T),

    /// The registry has no package by that name.
    NotFound,

    /// An error occurred while fetching or decoding the metadata.
    Error(Arc<ohno::AppError>),
}

impl<T> ProviderResult<T> {
    /// Converts into the contained data if `Found`, otherwise `None`.
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(data) => Some(data),
            _ => None,
        }
    }
}
