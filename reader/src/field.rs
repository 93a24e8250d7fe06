//! Normalizes a single `syn::Field` into a [`FieldPoint`] injection point.

use crate::annotation::AnnotationProbe;
use crate::descriptor::FieldPoint;
use crate::type_name::TypeNameUtil;

/////////////////////////////////////////////////////////////////////////////////////////

pub struct FieldReader;

impl FieldReader {
    /// Reads `field` as a field injection point. Returns `None` when the
    /// field carries no `Inject` attribute, i.e. it is not an injection
    /// point at all.
    pub fn read(field: &syn::Field) -> Option<FieldPoint> {
        if !AnnotationProbe::has(&field.attrs, "Inject") {
            return None;
        }

        let field_name = field
            .ident
            .as_ref()
            .expect("inject fields are named, not tuple fields")
            .to_string();

        let (declared_type, option_nullable) = unwrap_nullable(&field.ty);
        let nullable = option_nullable || AnnotationProbe::has(&field.attrs, "Nullable");

        Some(FieldPoint {
            field_name,
            declared_type,
            qualifier: AnnotationProbe::named_value(&field.attrs),
            nullable,
        })
    }
}

/// `Option<T>` is one nullable-injection-point shape; a bare `#[Nullable]`
/// on a non-`Option` type is the other (see [`AnnotationProbe`] call in
/// [`FieldReader::read`]), carried through unwrapped since the declared
/// type is already the one beans get looked up under.
fn unwrap_nullable(ty: &syn::Type) -> (String, bool) {
    let name = TypeNameUtil::canonical_type_name(ty);
    match name
        .strip_prefix("Option<")
        .and_then(|inner| inner.strip_suffix('>'))
    {
        Some(inner) => (inner.to_string(), true),
        None => (name, false),
    }
}

/////////////////////////////////////////////////////////////////////////////////////////
