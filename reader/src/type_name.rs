//! Canonical type-name handling: unwrapping `Provider<T>`, detecting
//! generic signatures, and rendering a [`syn::Type`] down to the
//! canonical string the rest of the reader (and the runtime scope) key
//! everything off of.

/////////////////////////////////////////////////////////////////////////////////////////

pub struct TypeNameUtil;

impl TypeNameUtil {
    /// Unwraps `Provider<T>` to `T`. Names that don't match the shape are
    /// returned unchanged.
    pub fn unwrap_provider(name: &str) -> String {
        match name
            .strip_prefix("Provider<")
            .and_then(|inner| inner.strip_suffix('>'))
        {
            Some(inner) => inner.to_string(),
            None => name.to_string(),
        }
    }

    /// True iff `name` carries a type-argument list (`Foo<Bar>`), i.e. is
    /// generic and therefore ineligible for the assignable-type set.
    pub fn is_generic(name: &str) -> bool {
        name.contains('<')
    }

    /// The trailing path segment of a canonical name, e.g.
    /// `"heaters::ElectricHeater"` -> `"ElectricHeater"`.
    pub fn simple_name(name: &str) -> &str {
        name.rsplit("::").next().unwrap_or(name)
    }

    /// Renders a `syn::Type` to its canonical string form. Whitespace is
    /// stripped entirely rather than reproducing `quote`'s pretty-printed
    /// spacing, so two occurrences of the same type always compare equal
    /// regardless of how they were written at the call site.
    pub fn canonical_type_name(ty: &syn::Type) -> String {
        quote::quote!(#ty)
            .to_string()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }
}

/////////////////////////////////////////////////////////////////////////////////////////
