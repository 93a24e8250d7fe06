//! Tests presence of the language-independent annotation surface
//! (`Inject`, `Named`, `Nullable`, `Bean`, `PostConstruct`, `PreDestroy`,
//! ...) on a `syn` declaration, the way a real proc-macro attribute
//! parser recognizes its own attributes.

/////////////////////////////////////////////////////////////////////////////////////////

pub struct AnnotationProbe;

impl AnnotationProbe {
    /// True iff any attribute in `attrs` is a bare, single-segment path
    /// matching `name` (e.g. `#[inject]` / `#[Inject]` matching `"Inject"`
    /// case-sensitively).
    pub fn has(attrs: &[syn::Attribute], name: &str) -> bool {
        attrs.iter().any(|attr| is_named(attr, name))
    }

    /// Reads the string literal out of a `#[Named("value")]`-shaped
    /// attribute, if present.
    pub fn named_value(attrs: &[syn::Attribute]) -> Option<String> {
        Self::named_value_for(attrs, "Named")
    }

    /// Reads the string literal out of a `#[<name>("value")]`-shaped
    /// attribute, if present. `named_value` is sugar for the common
    /// `"Named"` case; this is the general form used for e.g.
    /// `#[Bean("BaseType")]`.
    pub fn named_value_for(attrs: &[syn::Attribute], name: &str) -> Option<String> {
        attrs.iter().find_map(|attr| {
            if !is_named(attr, name) {
                return None;
            }
            attr.parse_args::<syn::LitStr>().ok().map(|lit| lit.value())
        })
    }
}

fn is_named(attr: &syn::Attribute, name: &str) -> bool {
    let path = attr.path();
    path.segments.len() == 1 && path.segments[0].ident == name
}

/////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_bare_annotation() {
        let field: syn::Field = syn::parse_quote!(#[Inject] pub x: Heater);
        assert!(AnnotationProbe::has(&field.attrs, "Inject"));
        assert!(!AnnotationProbe::has(&field.attrs, "Nullable"));
    }

    #[test]
    fn reads_named_qualifier() {
        let field: syn::Field = syn::parse_quote!(#[Inject] #[Named("electric")] pub x: Heater);
        assert_eq!(
            AnnotationProbe::named_value(&field.attrs),
            Some("electric".to_string())
        );
    }

    #[test]
    fn missing_named_is_none() {
        let field: syn::Field = syn::parse_quote!(#[Inject] pub x: Heater);
        assert_eq!(AnnotationProbe::named_value(&field.attrs), None);
    }
}
