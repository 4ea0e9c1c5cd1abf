use core::{
    any::Any,
    fmt,
};
use std::rc::Rc;

/// A shared reference to an arbitrary object.
///
/// Cloning an object clones the reference, not the referenced value.
/// Two objects are equal only if they refer to the same value.
#[derive(Clone)]
pub struct Object {
    inner: Rc<dyn Any>,
    type_name: &'static str,
}

impl Object {
    /// Wraps the value into a new object reference.
    pub fn new<T>(value: T) -> Self
    where
        T: Any,
    {
        Self::from_rc(Rc::new(value))
    }

    /// Creates an object referring to the already shared value.
    pub fn from_rc<T>(value: Rc<T>) -> Self
    where
        T: Any,
    {
        Self {
            inner: value,
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Returns the type name of the referenced value.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the referenced value is of type `T`.
    #[inline]
    pub fn is<T>(&self) -> bool
    where
        T: Any,
    {
        self.inner.is::<T>()
    }

    /// Returns a shared reference to the value if it is of type `T`.
    #[inline]
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: Any,
    {
        self.inner.downcast_ref::<T>()
    }

    /// Returns `true` if both objects refer to the same value.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        core::ptr::eq(
            Rc::as_ptr(&self.inner) as *const (),
            Rc::as_ptr(&other.inner) as *const (),
        )
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Object").field(&self.type_name).finish()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "object({})", self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn objects_compare_by_identity() {
        let a = Object::new(Point { x: 1, y: 2 });
        let b = Object::new(Point { x: 1, y: 2 });
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        let shared = Rc::new(Point { x: 3, y: 4 });
        assert_eq!(Object::from_rc(shared.clone()), Object::from_rc(shared));
    }

    #[test]
    fn downcast_works() {
        let object = Object::new(Point { x: 1, y: 2 });
        assert!(object.is::<Point>());
        assert!(!object.is::<String>());
        assert_eq!(object.downcast_ref::<Point>(), Some(&Point { x: 1, y: 2 }));
        assert_eq!(object.downcast_ref::<i32>(), None);
        assert!(object.type_name().ends_with("Point"));
        assert!(object.to_string().starts_with("object("));
    }
}
