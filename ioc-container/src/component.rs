//! One of the basic blocks of dependency injection is a [Component]. Components are types
//! instantiated by the container exactly once, whose [Autowired] fields are then populated with
//! other components.
//!
//! ## Registering components
//!
//! Any type which wants to be managed by the container needs to implement `Component` and be
//! registered in the static type catalog. Both are done by deriving the trait, when the `derive`
//! feature is enabled:
//!
//! ```
//! use ioc_container::component::Autowired;
//! use ioc_container::Component;
//!
//! #[derive(Component)]
//! struct TestDependency;
//!
//! #[derive(Component)]
//! struct TestComponent {
//!     // populated with the TestDependency bean during injection
//!     #[autowired]
//!     dependency: Autowired<TestDependency>,
//!     // not marked - stays empty
//!     unmarked: Autowired<TestDependency>,
//!     #[component(default = "dummy_expr")]
//!     default_expr: i8,
//!     // Default::default()
//!     counter: u32,
//! }
//!
//! fn dummy_expr() -> i8 {
//!     -1
//! }
//! ```
//!
//! Components are only instantiated if they live under the base package declared by a
//! [ComponentScan](crate::ComponentScan) type.
//!
//! ### Supported `#[component]` struct configuration
//!
//! * `constructor = "expr"` - call `expr()` to construct the component, instead of initializing
//! every field; the function takes no arguments and returns `Result<Self, ErrorPtr>`
//!
//! ### Supported field configuration
//!
//! * `#[autowired]` - inject the bean of the field's declared type; the field must be an [Autowired]
//! * `#[component(default)]` - use `Default::default()` initialization (the default behavior)
//! * `#[component(default = "expr")]` - call `expr()` for initialization

use crate::error::{ErrorPtr, FieldAccessError};
use crate::instance_provider::{ComponentInstanceAnyPtr, ComponentInstancePtr};
use crate::type_descriptor::TypeDescriptor;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, PoisonError, RwLock};

/// Zero-argument constructor for type-erased component instances.
pub type ConstructorFn = fn() -> Result<ComponentInstanceAnyPtr, ErrorPtr>;

/// Setter writing a dependency into a field of a bean. Both pointers are type-erased and checked by
/// the setter.
pub type FieldSetter = Arc<
    dyn Fn(&ComponentInstanceAnyPtr, ComponentInstanceAnyPtr) -> Result<(), FieldAccessError>
        + Send
        + Sync,
>;

/// Base trait for components managed by the container.
pub trait Component: Send + Sync + Sized + 'static {
    /// Creates a fresh instance, without any dependencies injected.
    fn create() -> Result<Self, ErrorPtr>;

    /// Returns the fields which should be populated from the container after construction.
    fn injectable_fields() -> Vec<InjectableField>;
}

/// Type-erased [Component::create].
pub fn construct<T: Component>() -> Result<ComponentInstanceAnyPtr, ErrorPtr> {
    T::create().map(|instance| ComponentInstancePtr::new(instance) as ComponentInstanceAnyPtr)
}

/// A field holding a reference to another bean. The field starts empty and is populated by the
/// container during the injection phase, if it's marked with `#[autowired]`.
pub struct Autowired<T> {
    instance: RwLock<Option<ComponentInstancePtr<T>>>,
}

impl<T> Autowired<T> {
    /// Returns the injected bean, if any.
    pub fn get(&self) -> Option<ComponentInstancePtr<T>> {
        self.instance
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Checks if a bean has been injected.
    pub fn is_wired(&self) -> bool {
        self.instance
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Stores given bean, replacing any previous one.
    pub fn set(&self, instance: ComponentInstancePtr<T>) {
        *self.instance.write().unwrap_or_else(PoisonError::into_inner) = Some(instance);
    }
}

impl<T> Default for Autowired<T> {
    fn default() -> Self {
        Self {
            instance: RwLock::new(None),
        }
    }
}

impl<T> Debug for Autowired<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autowired")
            .field("wired", &self.is_wired())
            .finish()
    }
}

/// Exposes the declared dependency type of an injectable field. Used by the derive macro to
/// reject `#[autowired]` on fields which aren't [Autowired].
pub trait AutowiredTarget {
    type Target: Send + Sync + 'static;
}

impl<T: Send + Sync + 'static> AutowiredTarget for Autowired<T> {
    type Target = T;
}

/// Metadata of a field which should be populated from the container: its name, declared type and
/// the capability to write it.
#[derive(Clone)]
pub struct InjectableField {
    name: &'static str,
    declared_type: TypeDescriptor,
    setter: FieldSetter,
}

impl InjectableField {
    /// Creates field metadata for an [Autowired] field of component `C`, reachable with `accessor`.
    pub fn new<C, D>(name: &'static str, accessor: fn(&C) -> &Autowired<D>) -> Self
    where
        C: Send + Sync + 'static,
        D: Send + Sync + 'static,
    {
        Self {
            name,
            declared_type: TypeDescriptor::of::<D>(),
            setter: Arc::new(move |bean, dependency| {
                let bean = bean
                    .downcast_ref::<C>()
                    .ok_or(FieldAccessError::IncompatibleBean)?;
                let dependency = dependency
                    .downcast::<D>()
                    .map_err(|_| FieldAccessError::IncompatibleDependency)?;

                accessor(bean).set(dependency);
                Ok(())
            }),
        }
    }

    /// Creates field metadata with a custom setter, for manually written glue code.
    pub fn with_setter(
        name: &'static str,
        declared_type: TypeDescriptor,
        setter: FieldSetter,
    ) -> Self {
        Self {
            name,
            declared_type,
            setter,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type of the bean which should be injected.
    #[inline]
    pub fn declared_type(&self) -> &TypeDescriptor {
        &self.declared_type
    }

    /// Writes `dependency` into this field of `bean`, overwriting any previous value.
    pub fn inject(
        &self,
        bean: &ComponentInstanceAnyPtr,
        dependency: ComponentInstanceAnyPtr,
    ) -> Result<(), FieldAccessError> {
        (self.setter)(bean, dependency)
    }
}

impl Debug for InjectableField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectableField")
            .field("name", &self.name)
            .field("declared_type", &self.declared_type)
            .finish()
    }
}
