//! Domain errors for content validation and navigation.

/// Problems with the authored scene list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("scene catalog is empty")]
    Empty,

    #[error("duplicate scene identifier `{0}`")]
    DuplicateIdentifier(String),
}

/// Problems turning a location hash into a screen.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unknown route `{0}`")]
    Unknown(String),

    #[error("invalid round index `{0}`")]
    InvalidRound(String),

    /// Round index parsed but the catalog has no such scene.
    #[error("round {index} out of range (catalog has {len} scenes)")]
    RoundOutOfRange { index: usize, len: usize },
}
