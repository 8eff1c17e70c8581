//! Storage for singleton bean instances. The registry only grows during the lifetime of a
//! container - there's no removal.

use crate::instance_provider::ComponentInstanceAnyPtr;
use crate::type_descriptor::TypeDescriptor;
use fxhash::{FxHashMap, FxHashSet};

/// Maps component types to their single live instance. A type is present iff its instantiation
/// succeeded.
#[derive(Default, Clone, Debug)]
pub struct BeanRegistry {
    beans: FxHashMap<TypeDescriptor, ComponentInstanceAnyPtr>,
}

impl BeanRegistry {
    /// Stores given bean. Registering the same type again replaces the previous bean.
    #[inline]
    pub fn put(&mut self, descriptor: TypeDescriptor, bean: ComponentInstanceAnyPtr) {
        self.beans.insert(descriptor, bean);
    }

    #[inline]
    pub fn get(&self, descriptor: &TypeDescriptor) -> Option<ComponentInstanceAnyPtr> {
        self.beans.get(descriptor).cloned()
    }

    #[inline]
    pub fn contains(&self, descriptor: &TypeDescriptor) -> bool {
        self.beans.contains_key(descriptor)
    }

    /// Returns a snapshot of all registered types.
    #[inline]
    pub fn keys(&self) -> FxHashSet<TypeDescriptor> {
        self.beans.keys().copied().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.beans.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }
}
