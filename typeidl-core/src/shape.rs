//! Static reflection metadata.
//!
//! A [`Shape`] describes a Rust type the way the type graph builder needs to
//! see it: its name, the module it was declared in, and its kind. Structural
//! shapes list their fields in declaration order, each field pointing at the
//! shape of its type through a function pointer so that recursive types can
//! be described without infinite expansion.
//!
//! Shapes for user structs are produced by `#[derive(Describe)]`; the
//! standard library types are covered by the impls in this module.

use crate::kind::{ScalarKind, UnsupportedKind, scalar_by_rust_name};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Reflection metadata of a single Rust type.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    /// Type name as it appears in the schema.
    pub name: &'static str,
    /// Module path the type was declared in (`module_path!()`), or empty for
    /// built-in types.
    pub module_path: &'static str,
    /// Kind of the type.
    pub kind: ShapeKind,
}

/// Kind of a [`Shape`].
#[derive(Debug, Clone, Copy)]
pub enum ShapeKind {
    /// Fieldless scalar.
    Scalar(ScalarKind),
    /// Record with named fields in declaration order.
    Struct(&'static [FieldShape]),
    /// Indirection to another type (`Box<T>`, `&T`, ...).
    Pointer(fn() -> Shape),
    /// A type category that has no schema representation.
    Unsupported(UnsupportedKind),
}

/// A field slot of a structural [`Shape`].
#[derive(Debug, Clone, Copy)]
pub struct FieldShape {
    /// Names declared in this slot. Rust structs always declare exactly one.
    pub names: &'static [&'static str],
    /// Shape of the field type.
    pub shape: fn() -> Shape,
}

impl FieldShape {
    /// Creates a single-name field slot.
    #[must_use]
    pub const fn new(names: &'static [&'static str], shape: fn() -> Shape) -> Self {
        Self { names, shape }
    }
}

impl Shape {
    /// Creates a built-in scalar shape.
    #[must_use]
    pub const fn scalar(name: &'static str, kind: ScalarKind) -> Self {
        Self {
            name,
            module_path: "",
            kind: ShapeKind::Scalar(kind),
        }
    }

    /// Creates a structural shape.
    #[must_use]
    pub const fn structure(
        name: &'static str,
        module_path: &'static str,
        fields: &'static [FieldShape],
    ) -> Self {
        Self {
            name,
            module_path,
            kind: ShapeKind::Struct(fields),
        }
    }

    /// Creates an indirection shape.
    #[must_use]
    pub const fn pointer(name: &'static str, target: fn() -> Shape) -> Self {
        Self {
            name,
            module_path: "",
            kind: ShapeKind::Pointer(target),
        }
    }

    /// Creates a shape for a type the schema cannot represent.
    #[must_use]
    pub const fn unsupported(name: &'static str, kind: UnsupportedKind) -> Self {
        Self {
            name,
            module_path: "",
            kind: ShapeKind::Unsupported(kind),
        }
    }

    /// Returns the last segment of the module path.
    ///
    /// `geom::shapes` yields `shapes`; a crate root yields the crate name.
    #[must_use]
    pub fn namespace(&self) -> &'static str {
        let path = self.module_path;
        match path.rfind("::") {
            Some(idx) => &path[idx + 2..],
            None => path,
        }
    }

    /// Follows pointer shapes until a non-pointer shape is reached.
    #[must_use]
    pub fn strip_indirection(self) -> Self {
        let mut shape = self;
        while let ShapeKind::Pointer(target) = shape.kind {
            shape = target();
        }
        shape
    }

    /// Returns true if this is a structural shape.
    #[must_use]
    pub const fn is_struct(&self) -> bool {
        matches!(self.kind, ShapeKind::Struct(_))
    }
}

/// Types that can describe their own shape.
pub trait Describe {
    /// Returns the reflection metadata for this type.
    fn shape() -> Shape;
}

/// Returns the shape of the type of `value`.
#[must_use]
pub fn shape_of<T: Describe + ?Sized>(_value: &T) -> Shape {
    T::shape()
}

macro_rules! describe_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn shape() -> Shape {
                    match scalar_by_rust_name(stringify!($ty)) {
                        Some((kind, name)) => Shape::scalar(name, kind),
                        None => Shape::unsupported(stringify!($ty), UnsupportedKind::Other),
                    }
                }
            }
        )*
    };
}

describe_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, String, str);

macro_rules! describe_unsupported {
    ($($ty:ty => $name:literal, $kind:expr;)*) => {
        $(
            impl Describe for $ty {
                fn shape() -> Shape {
                    Shape::unsupported($name, $kind)
                }
            }
        )*
    };
}

describe_unsupported! {
    bool => "bool", UnsupportedKind::Bool;
    f32 => "f32", UnsupportedKind::Float;
    f64 => "f64", UnsupportedKind::Float;
    char => "char", UnsupportedKind::Char;
    () => "()", UnsupportedKind::Unit;
    i128 => "i128", UnsupportedKind::Other;
    u128 => "u128", UnsupportedKind::Other;
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn shape() -> Shape {
        Shape::pointer("Box", T::shape)
    }
}

impl<T: Describe + ?Sized> Describe for Rc<T> {
    fn shape() -> Shape {
        Shape::pointer("Rc", T::shape)
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    fn shape() -> Shape {
        Shape::pointer("Arc", T::shape)
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn shape() -> Shape {
        Shape::pointer("&", T::shape)
    }
}

impl<T: Describe + ?Sized> Describe for &mut T {
    fn shape() -> Shape {
        Shape::pointer("&mut", T::shape)
    }
}

impl<T> Describe for Vec<T> {
    fn shape() -> Shape {
        Shape::unsupported("Vec", UnsupportedKind::List)
    }
}

impl<T> Describe for VecDeque<T> {
    fn shape() -> Shape {
        Shape::unsupported("VecDeque", UnsupportedKind::List)
    }
}

impl<T> Describe for [T] {
    fn shape() -> Shape {
        Shape::unsupported("[]", UnsupportedKind::Slice)
    }
}

impl<T, const N: usize> Describe for [T; N] {
    fn shape() -> Shape {
        Shape::unsupported("[;]", UnsupportedKind::Array)
    }
}

impl<T> Describe for Option<T> {
    fn shape() -> Shape {
        Shape::unsupported("Option", UnsupportedKind::Optional)
    }
}

impl<K, V, S> Describe for HashMap<K, V, S> {
    fn shape() -> Shape {
        Shape::unsupported("HashMap", UnsupportedKind::Map)
    }
}

impl<K, V> Describe for BTreeMap<K, V> {
    fn shape() -> Shape {
        Shape::unsupported("BTreeMap", UnsupportedKind::Map)
    }
}

impl<A, B> Describe for (A, B) {
    fn shape() -> Shape {
        Shape::unsupported("(,)", UnsupportedKind::Tuple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point;

    impl Describe for Point {
        fn shape() -> Shape {
            const FIELDS: &[FieldShape] = &[
                FieldShape::new(&["X"], <i64 as Describe>::shape),
                FieldShape::new(&["Y"], <i64 as Describe>::shape),
            ];
            Shape::structure("Point", "geom::p", FIELDS)
        }
    }

    #[test]
    fn test_scalar_shapes() {
        let shape = i64::shape();
        assert_eq!(shape.name, "int");
        assert!(matches!(shape.kind, ShapeKind::Scalar(ScalarKind::Int)));

        let shape = String::shape();
        assert_eq!(shape.name, "string");
        assert!(matches!(shape.kind, ShapeKind::Scalar(ScalarKind::String)));

        assert_eq!(i32::shape().name, "int32");
        assert_eq!(usize::shape().name, "uint64");
    }

    #[test]
    fn test_scalar_shapes_match_source_names() {
        let reflected = [
            ("i8", i8::shape()),
            ("u16", u16::shape()),
            ("isize", isize::shape()),
            ("u64", u64::shape()),
            ("str", str::shape()),
        ];
        for (rust, shape) in reflected {
            let (kind, name) = scalar_by_rust_name(rust).expect("known scalar");
            assert_eq!(shape.name, name);
            assert!(matches!(shape.kind, ShapeKind::Scalar(k) if k == kind));
        }
    }

    #[test]
    fn test_struct_shape_fields_in_order() {
        let shape = Point::shape();
        let ShapeKind::Struct(fields) = shape.kind else {
            panic!("expected struct shape");
        };
        let names: Vec<_> = fields.iter().map(|f| f.names[0]).collect();
        assert_eq!(names, ["X", "Y"]);
        assert_eq!((fields[0].shape)().name, "int");
    }

    #[test]
    fn test_namespace_is_last_module_segment() {
        assert_eq!(Point::shape().namespace(), "p");
        let root = Shape::structure("Root", "mycrate", &[]);
        assert_eq!(root.namespace(), "mycrate");
    }

    #[test]
    fn test_strip_indirection() {
        let shape = <Box<Arc<&Point>>>::shape();
        assert!(matches!(shape.kind, ShapeKind::Pointer(_)));
        let stripped = shape.strip_indirection();
        assert_eq!(stripped.name, "Point");
        assert!(stripped.is_struct());
    }

    #[test]
    fn test_unsupported_shapes() {
        assert!(matches!(
            <Vec<i64>>::shape().kind,
            ShapeKind::Unsupported(UnsupportedKind::List)
        ));
        assert!(matches!(
            <Option<String>>::shape().kind,
            ShapeKind::Unsupported(UnsupportedKind::Optional)
        ));
        assert!(matches!(
            bool::shape().kind,
            ShapeKind::Unsupported(UnsupportedKind::Bool)
        ));
        assert!(matches!(
            <[u8; 4]>::shape().kind,
            ShapeKind::Unsupported(UnsupportedKind::Array)
        ));
    }

    #[test]
    fn test_shape_of_value() {
        let value = Box::new(Point);
        assert_eq!(shape_of(&value).strip_indirection().name, "Point");
        assert_eq!(shape_of("text").strip_indirection().name, "string");
    }
}
