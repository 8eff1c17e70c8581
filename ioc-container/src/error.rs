use std::error::Error;
use std::sync::Arc;
use thiserror::Error;

/// Shared pointer to an arbitrary error, used for errors returned by user code, e.g. custom
/// component constructors.
pub type ErrorPtr = Arc<dyn Error + Send + Sync>;

/// Errors related to discovering component types.
#[derive(Error, Clone, Debug)]
pub enum DiscoveryError {
    #[error("Error enumerating types: {0}")]
    Enumeration(ErrorPtr),
    #[error("Invalid base package: '{0}'")]
    InvalidBasePackage(String),
    #[error("Cannot resolve type: {0}")]
    TypeResolution(String),
}

/// Errors aborting container initialization.
#[derive(Error, Clone, Debug)]
pub enum ContainerError {
    #[error("Error discovering components: {0}")]
    Discovery(#[from] DiscoveryError),
    #[error("Component {type_name} has no zero-argument constructor.")]
    MissingConstructor { type_name: String },
    #[error("Error constructing component {type_name}: {source}")]
    ConstructionFailed {
        type_name: String,
        #[source]
        source: ErrorPtr,
    },
    #[error("Cannot inject field '{field}' of {component}: no bean registered for {dependency}")]
    UnresolvedDependency {
        component: String,
        field: String,
        dependency: String,
    },
    #[error("Cannot write field '{field}' of {component}: {reason}")]
    FieldAccess {
        component: String,
        field: String,
        reason: String,
    },
}

/// Failure of a single field setter. Turned into [ContainerError::FieldAccess] by the container,
/// which knows the component and field involved.
#[derive(Error, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum FieldAccessError {
    #[error("bean is not an instance of the declaring type")]
    IncompatibleBean,
    #[error("dependency is not an instance of the declared field type")]
    IncompatibleDependency,
}
