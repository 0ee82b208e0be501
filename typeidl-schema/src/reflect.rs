//! Declaration source backed by static reflection metadata.

use crate::error::BuildError;
use crate::source::{Declaration, DeclarationBody, DeclarationSource, FieldDeclaration};
use typeidl_core::{Shape, ShapeKind};

/// Describes types through their [`Shape`] metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reflection;

impl DeclarationSource for Reflection {
    type Handle = Shape;

    fn namespace(&self, root: &Shape) -> String {
        root.strip_indirection().namespace().to_string()
    }

    fn declare(&self, shape: &Shape) -> Result<Declaration<Shape>, BuildError> {
        let body = match shape.kind {
            ShapeKind::Scalar(kind) => DeclarationBody::Scalar(kind),
            ShapeKind::Struct(fields) => DeclarationBody::Struct(
                fields
                    .iter()
                    .map(|f| FieldDeclaration {
                        names: f.names.iter().map(|n| (*n).to_string()).collect(),
                        ty: (f.shape)(),
                    })
                    .collect(),
            ),
            ShapeKind::Pointer(target) => DeclarationBody::Indirect(target()),
            ShapeKind::Unsupported(kind) => DeclarationBody::Unsupported(kind),
        };

        Ok(Declaration {
            name: shape.name.to_string(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeidl_core::{Describe, FieldShape, ScalarKind, UnsupportedKind};

    struct Point;

    impl Describe for Point {
        fn shape() -> Shape {
            const FIELDS: &[FieldShape] = &[
                FieldShape::new(&["X"], <i64 as Describe>::shape),
                FieldShape::new(&["Y"], <i64 as Describe>::shape),
            ];
            Shape::structure("Point", "demo::p", FIELDS)
        }
    }

    #[test]
    fn test_declare_struct() {
        let decl = Reflection.declare(&Point::shape()).expect("declare");
        assert_eq!(decl.name, "Point");
        let DeclarationBody::Struct(fields) = decl.body else {
            panic!("expected struct");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].names, ["X"]);
        assert_eq!(fields[1].ty.name, "int");
    }

    #[test]
    fn test_declare_scalar_and_unsupported() {
        let decl = Reflection.declare(&String::shape()).expect("declare");
        assert!(matches!(
            decl.body,
            DeclarationBody::Scalar(ScalarKind::String)
        ));

        let decl = Reflection.declare(&<Vec<i64>>::shape()).expect("declare");
        assert!(matches!(
            decl.body,
            DeclarationBody::Unsupported(UnsupportedKind::List)
        ));
    }

    #[test]
    fn test_declare_pointer() {
        let decl = Reflection.declare(&<Box<Point>>::shape()).expect("declare");
        let DeclarationBody::Indirect(target) = decl.body else {
            panic!("expected indirection");
        };
        assert_eq!(target.name, "Point");
    }

    #[test]
    fn test_namespace_strips_pointers() {
        assert_eq!(Reflection.namespace(&<Box<Point>>::shape()), "p");
    }
}
