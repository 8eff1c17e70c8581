//! Discovery of candidate types. Discovery is a two-pass process: first the whole namespace is
//! searched for the component scan root, which declares the base package, then the types under the
//! base package are listed as component candidates.
//!
//! Packages are Rust module paths, e.g. `my_app::services`. A dotted form (`my_app.services`) is
//! accepted as well and converted to the path form.

use crate::error::DiscoveryError;
use crate::marker_inspector::MarkerInspector;
use crate::type_descriptor::TypeDescriptor;
use itertools::Itertools;
#[cfg(test)]
use mockall::automock;
use tracing::debug;

const PATH_SEPARATOR: &str = "::";
const RAW_PREFIX: &str = "r#";

/// Enumerates types known to the program.
#[cfg_attr(test, automock)]
pub trait TypeLocator {
    /// Lists every type in the whole namespace, in a deterministic order.
    fn list_all_types(&self) -> Result<Vec<TypeDescriptor>, DiscoveryError>;

    /// Lists every type in given package and all its sub-packages, in a deterministic order.
    fn list_types_under(&self, base_package: &str) -> Result<Vec<TypeDescriptor>, DiscoveryError>;
}

/// Searches the whole namespace for the first type carrying the component scan root marker and
/// returns the base package it declares. If the marker has no base package, the package of the
/// marked type is used. Returns `None` when no scan root exists.
pub fn find_scan_root_package(
    locator: &dyn TypeLocator,
    inspector: &dyn MarkerInspector,
) -> Result<Option<String>, DiscoveryError> {
    for descriptor in locator.list_all_types()? {
        if !inspector.has_scan_root_marker(&descriptor) {
            continue;
        }

        let attributes = inspector
            .scan_root_attributes(&descriptor)
            .unwrap_or_default();

        // module paths of marked types come from the compiler and need no validation
        let base_package = match attributes.declared_base_package() {
            Some(base_package) => normalize_package(base_package)?,
            None => inspector
                .package_of(&descriptor)
                .map(|package| canonical_package(&package))
                .ok_or_else(|| DiscoveryError::TypeResolution(descriptor.to_string()))?,
        };

        debug!(scan_root = %descriptor, "Found component scan root.");

        return Ok(Some(base_package));
    }

    Ok(None)
}

/// Converts a package to the canonical path form and validates it. Every segment must be an
/// identifier, optionally written in the raw form (`r#type`).
pub fn normalize_package(package: &str) -> Result<String, DiscoveryError> {
    let normalized = canonical_package(&package.trim().replace('.', PATH_SEPARATOR));
    if normalized.split(PATH_SEPARATOR).all(is_identifier) {
        Ok(normalized)
    } else {
        Err(DiscoveryError::InvalidBasePackage(package.to_string()))
    }
}

/// Strips raw identifier prefixes from all segments of a module path, so `app::r#type` and
/// `app::type` describe the same package.
pub fn canonical_package(package: &str) -> String {
    package
        .split(PATH_SEPARATOR)
        .map(|segment| segment.strip_prefix(RAW_PREFIX).unwrap_or(segment))
        .join(PATH_SEPARATOR)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_')
                && chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        None => false,
    }
}

/// Checks if `package` is `base_package` or one of its sub-packages. Both are expected to be
/// normalized.
pub fn is_in_package(package: &str, base_package: &str) -> bool {
    package
        .strip_prefix(base_package)
        .map(|rest| rest.is_empty() || rest.starts_with(PATH_SEPARATOR))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use crate::error::DiscoveryError;
    use crate::marker_inspector::{ComponentScanAttributes, MockMarkerInspector};
    use crate::type_descriptor::TypeDescriptor;
    use crate::type_locator::{
        canonical_package, find_scan_root_package, is_in_package, normalize_package,
        MockTypeLocator,
    };
    use mockall::predicate::*;
    use std::sync::Arc;

    struct Plain;
    struct ScanRoot;
    struct OtherScanRoot;

    fn create_locator(types: Vec<TypeDescriptor>) -> MockTypeLocator {
        let mut locator = MockTypeLocator::new();
        locator
            .expect_list_all_types()
            .times(1)
            .returning(move || Ok(types.clone()));
        locator
    }

    #[test]
    fn should_normalize_packages() {
        assert_eq!(normalize_package("app::beans").unwrap(), "app::beans");
        assert_eq!(normalize_package("app.beans").unwrap(), "app::beans");
        assert_eq!(normalize_package(" app ").unwrap(), "app");
        assert_eq!(normalize_package("app::r#type").unwrap(), "app::type");
        assert_eq!(normalize_package("app.módulo").unwrap(), "app::módulo");
        assert_eq!(normalize_package("_app::beans2").unwrap(), "_app::beans2");
    }

    #[test]
    fn should_canonicalize_raw_segments() {
        assert_eq!(canonical_package("r#app::r#type::beans"), "app::type::beans");
        assert_eq!(canonical_package("app"), "app");
    }

    #[test]
    fn should_reject_invalid_packages() {
        for package in [
            "",
            "app::",
            "app..beans",
            "app::be ans",
            "::app",
            "app::1beans",
            "9app",
            "app::r#",
        ] {
            assert!(matches!(
                normalize_package(package).unwrap_err(),
                DiscoveryError::InvalidBasePackage(_)
            ));
        }
    }

    #[test]
    fn should_check_sub_packages() {
        assert!(is_in_package("app", "app"));
        assert!(is_in_package("app::beans::inner", "app"));
        assert!(!is_in_package("application", "app"));
        assert!(!is_in_package("other::app", "app"));
    }

    #[test]
    fn should_find_declared_base_package() {
        let locator = create_locator(vec![
            TypeDescriptor::of::<Plain>(),
            TypeDescriptor::of::<ScanRoot>(),
        ]);

        let mut inspector = MockMarkerInspector::new();
        inspector
            .expect_has_scan_root_marker()
            .returning(|descriptor| *descriptor == TypeDescriptor::of::<ScanRoot>());
        inspector
            .expect_scan_root_attributes()
            .with(eq(TypeDescriptor::of::<ScanRoot>()))
            .times(1)
            .returning(|_| {
                Some(ComponentScanAttributes {
                    base_package: Some("app.beans".to_string()),
                })
            });

        assert_eq!(
            find_scan_root_package(&locator, &inspector).unwrap(),
            Some("app::beans".to_string())
        );
    }

    #[test]
    fn should_default_to_scan_root_package() {
        let locator = create_locator(vec![TypeDescriptor::of::<ScanRoot>()]);

        let mut inspector = MockMarkerInspector::new();
        inspector.expect_has_scan_root_marker().return_const(true);
        inspector
            .expect_scan_root_attributes()
            .returning(|_| Some(ComponentScanAttributes::default()));
        inspector
            .expect_package_of()
            .with(eq(TypeDescriptor::of::<ScanRoot>()))
            .times(1)
            .returning(|_| Some("app".to_string()));

        assert_eq!(
            find_scan_root_package(&locator, &inspector).unwrap(),
            Some("app".to_string())
        );
    }

    #[test]
    fn should_accept_any_compiler_module_path_as_default() {
        for (package, expected) in [
            ("app::r#type", "app::type"),
            ("app::módulo", "app::módulo"),
        ] {
            let locator = create_locator(vec![TypeDescriptor::of::<ScanRoot>()]);

            let mut inspector = MockMarkerInspector::new();
            inspector.expect_has_scan_root_marker().return_const(true);
            inspector
                .expect_scan_root_attributes()
                .returning(|_| Some(ComponentScanAttributes::default()));
            inspector
                .expect_package_of()
                .returning(move |_| Some(package.to_string()));

            assert_eq!(
                find_scan_root_package(&locator, &inspector).unwrap(),
                Some(expected.to_string())
            );
        }
    }

    #[test]
    fn should_use_first_scan_root() {
        let locator = create_locator(vec![
            TypeDescriptor::of::<OtherScanRoot>(),
            TypeDescriptor::of::<ScanRoot>(),
        ]);

        let mut inspector = MockMarkerInspector::new();
        inspector.expect_has_scan_root_marker().return_const(true);
        inspector
            .expect_scan_root_attributes()
            .with(eq(TypeDescriptor::of::<OtherScanRoot>()))
            .times(1)
            .returning(|_| {
                Some(ComponentScanAttributes {
                    base_package: Some("first".to_string()),
                })
            });

        assert_eq!(
            find_scan_root_package(&locator, &inspector).unwrap(),
            Some("first".to_string())
        );
    }

    #[test]
    fn should_return_none_without_scan_root() {
        let locator = create_locator(vec![TypeDescriptor::of::<Plain>()]);

        let mut inspector = MockMarkerInspector::new();
        inspector.expect_has_scan_root_marker().return_const(false);

        assert_eq!(find_scan_root_package(&locator, &inspector).unwrap(), None);
    }

    #[test]
    fn should_reject_invalid_declared_package() {
        let locator = create_locator(vec![TypeDescriptor::of::<ScanRoot>()]);

        let mut inspector = MockMarkerInspector::new();
        inspector.expect_has_scan_root_marker().return_const(true);
        inspector.expect_scan_root_attributes().returning(|_| {
            Some(ComponentScanAttributes {
                base_package: Some("app::not valid".to_string()),
            })
        });

        assert!(matches!(
            find_scan_root_package(&locator, &inspector).unwrap_err(),
            DiscoveryError::InvalidBasePackage(_)
        ));
    }

    #[test]
    fn should_forward_enumeration_error() {
        let mut locator = MockTypeLocator::new();
        locator.expect_list_all_types().times(1).returning(|| {
            Err(DiscoveryError::Enumeration(Arc::new(
                DiscoveryError::TypeResolution("broken".to_string()),
            )))
        });

        let inspector = MockMarkerInspector::new();

        assert!(matches!(
            find_scan_root_package(&locator, &inspector).unwrap_err(),
            DiscoveryError::Enumeration(_)
        ));
    }
}
