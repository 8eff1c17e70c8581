//! The container itself - an [ApplicationContext] discovers components, creates a single instance
//! of each and injects their [Autowired](crate::component::Autowired) fields.
//!
//! Initialization happens in three phases:
//!
//! 1. Discovery - the [TypeLocator] finds the component scan root, which declares the base package,
//! and lists all types under it. Types with the component marker become candidates.
//! 2. Instantiation - each candidate is constructed with its zero-argument constructor and stored in
//! the [BeanRegistry].
//! 3. Injection - every injectable field of every bean is populated with the bean registered for the
//! field's declared type.
//!
//! Since all beans are constructed before any field is injected, components can freely reference
//! each other, including cyclic references.
//!
//! A process-wide context is available via [application_context]. Independent contexts can be
//! created with [ApplicationContextBuilder].

use crate::bean_registry::BeanRegistry;
use crate::error::ContainerError;
use crate::instance_provider::{ComponentInstanceAnyPtr, ComponentInstanceProvider};
use crate::marker_inspector::MarkerInspector;
use crate::type_catalog::StaticTypeCatalog;
use crate::type_descriptor::TypeDescriptor;
use crate::type_locator::{find_scan_root_package, TypeLocator};
use derivative::Derivative;
use itertools::Itertools;
use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

pub type TypeLocatorPtr = Arc<dyn TypeLocator + Send + Sync>;

pub type MarkerInspectorPtr = Arc<dyn MarkerInspector + Send + Sync>;

static APPLICATION_CONTEXT: Lazy<ApplicationContext> =
    Lazy::new(|| ApplicationContextBuilder::new().build());

/// Returns the process-wide [ApplicationContext], backed by the [StaticTypeCatalog]. The context is
/// created on first access and lives until the process exits.
pub fn application_context() -> &'static ApplicationContext {
    &APPLICATION_CONTEXT
}

/// Lifecycle state of an [ApplicationContext].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ContainerState {
    #[default]
    Uninitialized,
    Discovering,
    Instantiating,
    Injecting,
    Ready,
}

/// Builder for [ApplicationContext] with sensible defaults, for easy construction.
pub struct ApplicationContextBuilder {
    type_locator: TypeLocatorPtr,
    marker_inspector: MarkerInspectorPtr,
}

impl ApplicationContextBuilder {
    /// Creates a new builder using statically registered types for both discovery and inspection.
    pub fn new() -> Self {
        let catalog = Arc::new(StaticTypeCatalog::new());
        Self {
            type_locator: catalog.clone(),
            marker_inspector: catalog,
        }
    }

    /// Sets new [TypeLocator].
    pub fn with_type_locator(mut self, type_locator: TypeLocatorPtr) -> Self {
        self.type_locator = type_locator;
        self
    }

    /// Sets new [MarkerInspector].
    pub fn with_marker_inspector(mut self, marker_inspector: MarkerInspectorPtr) -> Self {
        self.marker_inspector = marker_inspector;
        self
    }

    /// Builds resulting [ApplicationContext].
    pub fn build(self) -> ApplicationContext {
        ApplicationContext::new(self.type_locator, self.marker_inspector)
    }
}

impl Default for ApplicationContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Container of singleton beans. See module documentation for details.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct ApplicationContext {
    #[derivative(Debug = "ignore")]
    type_locator: TypeLocatorPtr,
    #[derivative(Debug = "ignore")]
    marker_inspector: MarkerInspectorPtr,
    registry: RwLock<BeanRegistry>,
    state: RwLock<ContainerState>,
}

impl ApplicationContext {
    pub fn new(type_locator: TypeLocatorPtr, marker_inspector: MarkerInspectorPtr) -> Self {
        Self {
            type_locator,
            marker_inspector,
            registry: Default::default(),
            state: Default::default(),
        }
    }

    /// Runs all initialization phases. Without a component scan root, nothing is registered and
    /// the context becomes ready immediately. Any error aborts initialization, leaving already
    /// registered beans in place.
    ///
    /// Initialization can be repeated, in which case beans are re-created and re-injected. Calls
    /// should not overlap.
    pub fn init(&self) -> Result<(), ContainerError> {
        self.set_state(ContainerState::Discovering);

        let base_package = match find_scan_root_package(
            self.type_locator.as_ref(),
            self.marker_inspector.as_ref(),
        )? {
            Some(base_package) => base_package,
            None => {
                info!("No component scan root found - skipping component scan.");
                self.set_state(ContainerState::Ready);
                return Ok(());
            }
        };

        info!("Base package: {}", base_package);

        let candidates = self.scan(&base_package)?;

        self.set_state(ContainerState::Instantiating);
        self.create_beans(&candidates)?;

        self.set_state(ContainerState::Injecting);
        self.inject_beans()?;

        self.set_state(ContainerState::Ready);
        Ok(())
    }

    /// Returns current lifecycle state.
    pub fn state(&self) -> ContainerState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Checks if a bean of given type is registered.
    pub fn contains_bean(&self, descriptor: &TypeDescriptor) -> bool {
        self.registry().contains(descriptor)
    }

    /// Returns all registered types, sorted.
    pub fn bean_descriptors(&self) -> Vec<TypeDescriptor> {
        self.registry().keys().into_iter().sorted().collect_vec()
    }

    fn scan(&self, base_package: &str) -> Result<Vec<TypeDescriptor>, ContainerError> {
        let types = self.type_locator.list_types_under(base_package)?;
        let total = types.len();

        let candidates = types
            .into_iter()
            .filter(|descriptor| self.marker_inspector.has_component_marker(descriptor))
            .collect_vec();

        debug!(
            types = total,
            components = candidates.len(),
            "Scanned base package."
        );

        Ok(candidates)
    }

    fn create_beans(&self, candidates: &[TypeDescriptor]) -> Result<(), ContainerError> {
        for descriptor in candidates {
            let constructor = self.marker_inspector.constructor(descriptor).ok_or_else(|| {
                ContainerError::MissingConstructor {
                    type_name: descriptor.to_string(),
                }
            })?;

            let bean = constructor().map_err(|source| ContainerError::ConstructionFailed {
                type_name: descriptor.to_string(),
                source,
            })?;

            self.registry_mut().put(*descriptor, bean);

            info!("Bean created: {}", descriptor);
        }

        Ok(())
    }

    fn inject_beans(&self) -> Result<(), ContainerError> {
        // fields are resolved against the registry, but only beans present at this point are
        // injected
        let descriptors = self.bean_descriptors();

        for descriptor in &descriptors {
            let bean = match self.registry().get(descriptor) {
                Some(bean) => bean,
                None => continue,
            };

            for field in self.marker_inspector.injectable_fields(descriptor) {
                let dependency = self.registry().get(field.declared_type()).ok_or_else(|| {
                    ContainerError::UnresolvedDependency {
                        component: descriptor.to_string(),
                        field: field.name().to_string(),
                        dependency: field.declared_type().to_string(),
                    }
                })?;

                field
                    .inject(&bean, dependency)
                    .map_err(|error| ContainerError::FieldAccess {
                        component: descriptor.to_string(),
                        field: field.name().to_string(),
                        reason: error.to_string(),
                    })?;

                info!(
                    "[{}] injected field: {}.{}",
                    field.declared_type(),
                    descriptor,
                    field.name()
                );
            }
        }

        Ok(())
    }

    fn set_state(&self, state: ContainerState) {
        debug!(?state, "Container state changed.");
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }

    fn registry(&self) -> RwLockReadGuard<'_, BeanRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn registry_mut(&self) -> RwLockWriteGuard<'_, BeanRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ComponentInstanceProvider for ApplicationContext {
    fn get_bean(&self, descriptor: &TypeDescriptor) -> Option<ComponentInstanceAnyPtr> {
        self.registry().get(descriptor)
    }
}
