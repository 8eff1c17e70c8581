//! Static metadata of types known to the container. Definitions are submitted at compile time by
//! the derive macros and collected at startup, which makes the catalog the source of both type
//! discovery ([TypeLocator]) and marker inspection ([MarkerInspector]). Definitions can also be
//! registered manually.

use crate::component::{construct, Component, ConstructorFn, InjectableField};
use crate::error::DiscoveryError;
use crate::marker_inspector::{ComponentScanAttributes, MarkerInspector};
use crate::type_catalog::internal::{ComponentRegisterer, ComponentScanRegisterer};
use crate::type_descriptor::TypeDescriptor;
use crate::type_locator::{canonical_package, is_in_package, normalize_package, TypeLocator};
use derivative::Derivative;
use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::debug;

/// Registration information for a [Component].
#[derive(Derivative, Clone, Copy)]
#[derivative(Debug)]
pub struct ComponentDefinition {
    pub target: TypeDescriptor,

    /// Package (module path) containing the component type.
    pub package: &'static str,

    #[derivative(Debug = "ignore")]
    pub constructor: ConstructorFn,

    #[derivative(Debug = "ignore")]
    pub injectable_fields: fn() -> Vec<InjectableField>,
}

impl ComponentDefinition {
    /// Creates a definition for `T`, declared in given package.
    pub fn of<T: Component>(package: &'static str) -> Self {
        Self {
            target: TypeDescriptor::of::<T>(),
            package,
            constructor: construct::<T>,
            injectable_fields: T::injectable_fields,
        }
    }
}

/// Registration information for a component scan root.
#[derive(Clone, Debug)]
pub struct ComponentScanDefinition {
    pub target: TypeDescriptor,
    pub package: &'static str,
    pub attributes: ComponentScanAttributes,
}

#[derive(Derivative, Clone, Copy)]
#[derivative(Debug)]
struct ComponentMetadata {
    #[derivative(Debug = "ignore")]
    constructor: ConstructorFn,

    #[derivative(Debug = "ignore")]
    injectable_fields: fn() -> Vec<InjectableField>,
}

#[derive(Clone, Debug)]
struct TypeMetadata {
    package: &'static str,
    scan_root: Option<ComponentScanAttributes>,
    component: Option<ComponentMetadata>,
}

impl TypeMetadata {
    fn new(package: &'static str) -> Self {
        Self {
            package,
            scan_root: None,
            component: None,
        }
    }
}

/// Catalog of all types carrying container markers.
#[derive(Clone, Debug)]
pub struct StaticTypeCatalog {
    types: FxHashMap<TypeDescriptor, TypeMetadata>,
}

impl StaticTypeCatalog {
    /// Creates a catalog containing all statically registered definitions.
    pub fn new() -> Self {
        let mut catalog = Self::empty();

        for registerer in inventory::iter::<ComponentScanRegisterer> {
            catalog.register_component_scan((registerer.register)());
        }

        for registerer in inventory::iter::<ComponentRegisterer> {
            catalog.register_component((registerer.register)());
        }

        debug!(
            types = catalog.types.len(),
            "Collected statically registered types."
        );

        catalog
    }

    /// Creates a catalog without any definitions.
    pub fn empty() -> Self {
        Self {
            types: Default::default(),
        }
    }

    /// Marks the target type as a component. Registering the same type again replaces the previous
    /// definition.
    pub fn register_component(&mut self, definition: ComponentDefinition) {
        self.types
            .entry(definition.target)
            .or_insert_with(|| TypeMetadata::new(definition.package))
            .component = Some(ComponentMetadata {
            constructor: definition.constructor,
            injectable_fields: definition.injectable_fields,
        });
    }

    /// Marks the target type as a component scan root.
    pub fn register_component_scan(&mut self, definition: ComponentScanDefinition) {
        self.types
            .entry(definition.target)
            .or_insert_with(|| TypeMetadata::new(definition.package))
            .scan_root = Some(definition.attributes);
    }

    fn sorted_types<'a>(
        &'a self,
        filter: impl Fn(&TypeMetadata) -> bool + 'a,
    ) -> impl Iterator<Item = TypeDescriptor> + 'a {
        self.types
            .iter()
            .filter(move |(_, metadata)| filter(*metadata))
            .map(|(descriptor, _)| *descriptor)
            .sorted()
    }

    fn component(&self, descriptor: &TypeDescriptor) -> Option<&ComponentMetadata> {
        self.types
            .get(descriptor)
            .and_then(|metadata| metadata.component.as_ref())
    }
}

impl Default for StaticTypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeLocator for StaticTypeCatalog {
    fn list_all_types(&self) -> Result<Vec<TypeDescriptor>, DiscoveryError> {
        Ok(self.sorted_types(|_| true).collect_vec())
    }

    fn list_types_under(&self, base_package: &str) -> Result<Vec<TypeDescriptor>, DiscoveryError> {
        let base_package = normalize_package(base_package)?;
        Ok(self
            .sorted_types(move |metadata| {
                is_in_package(&canonical_package(metadata.package), &base_package)
            })
            .collect_vec())
    }
}

impl MarkerInspector for StaticTypeCatalog {
    fn has_scan_root_marker(&self, descriptor: &TypeDescriptor) -> bool {
        self.scan_root_attributes(descriptor).is_some()
    }

    fn scan_root_attributes(&self, descriptor: &TypeDescriptor) -> Option<ComponentScanAttributes> {
        self.types
            .get(descriptor)
            .and_then(|metadata| metadata.scan_root.clone())
    }

    fn has_component_marker(&self, descriptor: &TypeDescriptor) -> bool {
        self.component(descriptor).is_some()
    }

    fn constructor(&self, descriptor: &TypeDescriptor) -> Option<ConstructorFn> {
        self.component(descriptor)
            .map(|component| component.constructor)
    }

    fn injectable_fields(&self, descriptor: &TypeDescriptor) -> Vec<InjectableField> {
        self.component(descriptor)
            .map(|component| (component.injectable_fields)())
            .unwrap_or_default()
    }

    fn package_of(&self, descriptor: &TypeDescriptor) -> Option<String> {
        self.types
            .get(descriptor)
            .map(|metadata| metadata.package.to_string())
    }
}

#[doc(hidden)]
pub mod internal {
    use crate::type_catalog::{ComponentDefinition, ComponentScanDefinition};
    use inventory::collect;
    pub use inventory::submit;

    pub struct ComponentRegisterer {
        pub register: fn() -> ComponentDefinition,
    }

    pub struct ComponentScanRegisterer {
        pub register: fn() -> ComponentScanDefinition,
    }

    collect!(ComponentRegisterer);
    collect!(ComponentScanRegisterer);
}
