//! Access to bean instances managed by a container.

use crate::type_descriptor::TypeDescriptor;
#[cfg(test)]
use mockall::automock;
use std::any::Any;
use std::sync::Arc;

pub use crate::error::ErrorPtr;

/// Shared pointer to a bean of a known type.
pub type ComponentInstancePtr<T> = Arc<T>;

/// Type-erased shared pointer to a bean, as stored in the
/// [BeanRegistry](crate::bean_registry::BeanRegistry).
pub type ComponentInstanceAnyPtr = ComponentInstancePtr<dyn Any + Send + Sync + 'static>;

/// Generic provider for bean instances.
#[cfg_attr(test, automock)]
pub trait ComponentInstanceProvider {
    /// Returns the bean registered for the given type, if any. Lookups have no side effects and
    /// repeatedly return the same instance.
    fn get_bean(&self, descriptor: &TypeDescriptor) -> Option<ComponentInstanceAnyPtr>;
}

/// Helper trait for [ComponentInstanceProvider] providing strongly-typed access.
pub trait TypedComponentInstanceProvider {
    /// Typesafe version of [ComponentInstanceProvider::get_bean].
    fn bean<T: Send + Sync + 'static>(&self) -> Option<ComponentInstancePtr<T>>;
}

impl<CIP: ComponentInstanceProvider + ?Sized> TypedComponentInstanceProvider for CIP {
    fn bean<T: Send + Sync + 'static>(&self) -> Option<ComponentInstancePtr<T>> {
        self.get_bean(&TypeDescriptor::of::<T>())
            .and_then(|instance| instance.downcast::<T>().ok())
    }
}
