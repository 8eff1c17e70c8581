//! Identity of types known to the container.

use derivative::Derivative;
use std::any::{type_name, TypeId};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Opaque, comparable identity of a type, used as the [BeanRegistry](crate::bean_registry::BeanRegistry)
/// key. Two descriptors are equal iff they describe the same type. Ordering follows the fully
/// qualified type name, which makes enumeration of discovered types deterministic.
#[derive(Derivative, Clone, Copy, Debug)]
#[derivative(PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    type_id: TypeId,
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    type_name: &'static str,
}

impl TypeDescriptor {
    /// Returns the descriptor of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fully qualified name of the described type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialOrd for TypeDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.type_id == other.type_id {
            return Ordering::Equal;
        }

        self.type_name
            .cmp(other.type_name)
            .then_with(|| self.type_id.cmp(&other.type_id))
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use crate::type_descriptor::TypeDescriptor;
    use itertools::Itertools;

    struct First;
    struct Second;

    #[test]
    fn should_compare_by_type() {
        assert_eq!(TypeDescriptor::of::<First>(), TypeDescriptor::of::<First>());
        assert_ne!(TypeDescriptor::of::<First>(), TypeDescriptor::of::<Second>());
    }

    #[test]
    fn should_order_by_name() {
        let sorted = [TypeDescriptor::of::<Second>(), TypeDescriptor::of::<First>()]
            .into_iter()
            .sorted()
            .collect_vec();

        assert_eq!(
            sorted,
            vec![TypeDescriptor::of::<First>(), TypeDescriptor::of::<Second>()]
        );
    }

    #[test]
    fn should_display_qualified_name() {
        assert_eq!(
            TypeDescriptor::of::<First>().to_string(),
            "ioc_container::type_descriptor::tests::First"
        );
    }
}
