//! Queries for declarative markers attached to types: the component scan root, the component
//! marker and injectable fields. Inspection works on static metadata only - no instance of an
//! inspected type is ever created to answer a query.

use crate::component::{ConstructorFn, InjectableField};
use crate::type_descriptor::TypeDescriptor;
#[cfg(test)]
use mockall::automock;

/// Attributes of the component scan root marker.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ComponentScanAttributes {
    /// Package under which components are scanned. If absent or blank, the package containing the
    /// marked type is used.
    pub base_package: Option<String>,
}

impl ComponentScanAttributes {
    /// Returns the declared base package, unless it's absent or blank.
    pub fn declared_base_package(&self) -> Option<&str> {
        self.base_package
            .as_deref()
            .map(str::trim)
            .filter(|base_package| !base_package.is_empty())
    }
}

/// Reports markers attached to types. Types unknown to the inspector carry no markers.
#[cfg_attr(test, automock)]
pub trait MarkerInspector {
    /// Checks if given type is marked as the component scan root.
    fn has_scan_root_marker(&self, descriptor: &TypeDescriptor) -> bool;

    /// Returns the scan root marker attributes, if the type carries one.
    fn scan_root_attributes(&self, descriptor: &TypeDescriptor) -> Option<ComponentScanAttributes>;

    /// Checks if given type should be instantiated into the registry.
    fn has_component_marker(&self, descriptor: &TypeDescriptor) -> bool;

    /// Returns the zero-argument constructor of a component type.
    fn constructor(&self, descriptor: &TypeDescriptor) -> Option<ConstructorFn>;

    /// Returns all fields of given type marked for injection.
    fn injectable_fields(&self, descriptor: &TypeDescriptor) -> Vec<InjectableField>;

    /// Returns the package (module path) containing given type.
    fn package_of(&self, descriptor: &TypeDescriptor) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use crate::marker_inspector::ComponentScanAttributes;

    #[test]
    fn should_ignore_blank_base_package() {
        assert_eq!(
            ComponentScanAttributes::default().declared_base_package(),
            None
        );
        assert_eq!(
            ComponentScanAttributes {
                base_package: Some("  ".to_string())
            }
            .declared_base_package(),
            None
        );
        assert_eq!(
            ComponentScanAttributes {
                base_package: Some(" app::beans ".to_string())
            }
            .declared_base_package(),
            Some("app::beans")
        );
    }
}
