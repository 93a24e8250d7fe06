//! Normalizes `syn::ImplItemFn` signatures into [`MethodPoint`] /
//! [`ConstructorPoint`] injection points.

use crate::annotation::AnnotationProbe;
use crate::descriptor::{ConstructorPoint, MethodPoint, ParamPoint};
use crate::descriptor::Visibility;
use crate::type_name::TypeNameUtil;

/////////////////////////////////////////////////////////////////////////////////////////

/// One method declaration as seen by [`crate::collector::InjectionCollector`],
/// along with the facts it needs to decide whether the declaration is
/// eligible to be added or instead suppresses an ancestor's entry of the
/// same name.
pub struct InjectCandidate {
    pub point: MethodPoint,
    pub is_inject: bool,
    pub is_private: bool,
}

/////////////////////////////////////////////////////////////////////////////////////////

pub struct MethodSignatureReader;

impl MethodSignatureReader {
    /// Reads `method` as a collector candidate: built regardless of
    /// whether it carries `Inject`, since a non-injected override still
    /// participates in suppression.
    pub fn read_candidate(method: &syn::ImplItemFn, declaring_type: &str) -> InjectCandidate {
        InjectCandidate {
            point: MethodPoint {
                method_name: method.sig.ident.to_string(),
                parameters: Self::read_params(&method.sig),
                declaring_type: declaring_type.to_string(),
                qualifier: None,
            },
            is_inject: AnnotationProbe::has(&method.attrs, "Inject"),
            is_private: matches!(method.vis, syn::Visibility::Inherited),
        }
    }

    /// Reads `method` as a factory method: factory methods are
    /// discovered by the `Bean` annotation, not by `Inject`, and carry
    /// their own `@Named` qualifier rather than a parameter's.
    pub fn read_factory(method: &syn::ImplItemFn, declaring_type: &str) -> MethodPoint {
        MethodPoint {
            method_name: method.sig.ident.to_string(),
            parameters: Self::read_params(&method.sig),
            declaring_type: declaring_type.to_string(),
            qualifier: AnnotationProbe::named_value(&method.attrs),
        }
    }

    /// Reads `method` as a constructor. `visibility` is derived from the
    /// `syn::Visibility` the caller observed on the `impl` item.
    pub fn read_constructor(
        method: &syn::ImplItemFn,
        declaring_type: &str,
        visibility: Visibility,
    ) -> ConstructorPoint {
        ConstructorPoint {
            parameters: Self::read_params(&method.sig),
            declaring_type: declaring_type.to_string(),
            visibility,
        }
    }

    pub fn visibility_of(vis: &syn::Visibility) -> Visibility {
        match vis {
            syn::Visibility::Public(_) => Visibility::Public,
            syn::Visibility::Restricted(_) => Visibility::NonPrivate,
            syn::Visibility::Inherited => Visibility::Private,
        }
    }

    fn read_params(sig: &syn::Signature) -> Vec<ParamPoint> {
        sig.inputs
            .iter()
            .filter_map(|arg| match arg {
                syn::FnArg::Receiver(_) => None,
                syn::FnArg::Typed(pat_type) => Some(Self::read_param(pat_type)),
            })
            .collect()
    }

    fn read_param(pat_type: &syn::PatType) -> ParamPoint {
        let raw = TypeNameUtil::canonical_type_name(&pat_type.ty);
        let (unwrapped, option_nullable) = match raw
            .strip_prefix("Option<")
            .and_then(|inner| inner.strip_suffix('>'))
        {
            Some(inner) => (inner.to_string(), true),
            None => (raw, false),
        };
        let ty = TypeNameUtil::unwrap_provider(&unwrapped);
        let nullable = option_nullable || AnnotationProbe::has(&pat_type.attrs, "Nullable");
        ParamPoint {
            ty,
            qualifier: AnnotationProbe::named_value(&pat_type.attrs),
            nullable,
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////////////
