//! Top-level entry point: turns a most-derived-first sequence of
//! [`TypeLevel`]s into one normalized [`BeanDescriptor`].

use crate::annotation::AnnotationProbe;
use crate::collector::InjectionCollector;
use crate::descriptor::{BeanDescriptor, ConstructorPoint};
use crate::error::ReaderError;
use crate::field::FieldReader;
use crate::method::MethodSignatureReader;
use crate::type_name::TypeNameUtil;

/////////////////////////////////////////////////////////////////////////////////////////

/// One level of the caller-supplied ancestor chain, most-derived level
/// first. The reader never discovers ancestors on its own: whatever
/// built this sequence (the out-of-scope annotation-processing driver)
/// is responsible for ordering and for terminating it, either with a
/// level flagged `is_root_object` or simply by running out of levels.
pub struct TypeLevel {
    pub declaring_type: String,
    /// True when this level is itself a bean factory: only then do its
    /// `#[Bean]`-annotated methods count as factory methods.
    pub is_factory: bool,
    pub is_root_object: bool,
    pub fields: Vec<syn::Field>,
    pub methods: Vec<syn::ImplItemFn>,
    pub constructors: Vec<(syn::ImplItemFn, syn::Visibility)>,
}

impl TypeLevel {
    pub fn new(declaring_type: impl Into<String>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            is_factory: false,
            is_root_object: false,
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////////////

pub struct BeanReader;

impl BeanReader {
    /// Normalizes `levels` (most-derived first) into a [`BeanDescriptor`].
    ///
    /// 1. Unwraps provider-of on the bean's own type name. A non-generic
    ///    result becomes `base_type`; a generic one leaves `base_type`
    ///    unset and the bean is excluded from type-keyed lookups.
    /// 2. Walks the remaining levels. A level flagged as the root object
    ///    stops the walk. A generic level contributes no assignable type
    ///    and no injection points, but the walk continues past it.
    /// 3. Derives the implicit qualifier from the bean's simple name
    ///    against its immediate superclass's simple name.
    /// 4. Selects the constructor from the most-derived level.
    pub fn read(levels: &[TypeLevel]) -> Result<BeanDescriptor, ReaderError> {
        let most_derived = levels
            .first()
            .expect("a bean always has at least its own level");

        let constructor = Self::select_constructor(most_derived)?;

        let mut assignable_types = Vec::new();
        let mut base_type = None;
        let mut collector = InjectionCollector::new();
        let mut factory_methods = Vec::new();
        let mut post_construct = None;
        let mut pre_destroy = None;

        for (index, level) in levels.iter().enumerate() {
            if level.is_root_object {
                break;
            }

            let unwrapped = TypeNameUtil::unwrap_provider(&level.declaring_type);
            if TypeNameUtil::is_generic(&unwrapped) {
                continue;
            }

            if index == 0 {
                base_type = Some(unwrapped.clone());
            }
            assignable_types.push(unwrapped);

            let fields = level.fields.iter().filter_map(FieldReader::read).collect();
            let candidates = level
                .methods
                .iter()
                .map(|m| MethodSignatureReader::read_candidate(m, &level.declaring_type))
                .collect();
            collector.collect_level(fields, candidates);

            for method in &level.methods {
                if level.is_factory && AnnotationProbe::has(&method.attrs, "Bean") {
                    factory_methods.push(MethodSignatureReader::read_factory(
                        method,
                        &level.declaring_type,
                    ));
                }
                if post_construct.is_none() && AnnotationProbe::has(&method.attrs, "PostConstruct")
                {
                    post_construct = Some(method.sig.ident.to_string());
                }
                if pre_destroy.is_none() && AnnotationProbe::has(&method.attrs, "PreDestroy") {
                    pre_destroy = Some(method.sig.ident.to_string());
                }
            }
        }

        let implicit_qualifier = base_type.as_ref().and_then(|base| {
            levels.get(1).and_then(|superclass| {
                derive_implicit_qualifier(base, &superclass.declaring_type)
            })
        });

        let (inject_fields, inject_methods) = collector.finish();

        Ok(BeanDescriptor {
            base_type,
            assignable_types,
            implicit_qualifier,
            constructor,
            inject_fields,
            inject_methods,
            factory_methods,
            post_construct,
            pre_destroy,
        })
    }

    /// Picks the constructor to call when instantiating this bean.
    /// Considers only the most-derived level's own constructors: bases
    /// are never candidates.
    ///
    /// Exactly one `#[Inject]`-annotated constructor always wins. With no
    /// annotated constructor, a single non-private constructor is used
    /// implicitly, preferring one marked public when several non-private
    /// constructors exist; zero candidates at either stage is an error.
    fn select_constructor(level: &TypeLevel) -> Result<ConstructorPoint, ReaderError> {
        let injected: Vec<_> = level
            .constructors
            .iter()
            .filter(|(ctor, _)| AnnotationProbe::has(&ctor.attrs, "Inject"))
            .collect();

        if injected.len() > 1 {
            return Err(ReaderError::MultipleInjectConstructors {
                declaring_type: level.declaring_type.clone(),
                count: injected.len(),
            });
        }
        if let Some((ctor, vis)) = injected.into_iter().next() {
            let visibility = MethodSignatureReader::visibility_of(vis);
            return Ok(MethodSignatureReader::read_constructor(
                ctor,
                &level.declaring_type,
                visibility,
            ));
        }

        let non_private: Vec<&(syn::ImplItemFn, syn::Visibility)> = level
            .constructors
            .iter()
            .filter(|(_, vis)| !matches!(vis, syn::Visibility::Inherited))
            .collect();

        if non_private.len() == 1 {
            let (ctor, vis) = non_private[0];
            let visibility = MethodSignatureReader::visibility_of(vis);
            return Ok(MethodSignatureReader::read_constructor(
                ctor,
                &level.declaring_type,
                visibility,
            ));
        }

        let public: Vec<&(syn::ImplItemFn, syn::Visibility)> = non_private
            .iter()
            .copied()
            .filter(|(_, vis)| matches!(vis, syn::Visibility::Public(_)))
            .collect();

        if public.len() == 1 {
            let (ctor, vis) = public[0];
            let visibility = MethodSignatureReader::visibility_of(vis);
            return Ok(MethodSignatureReader::read_constructor(
                ctor,
                &level.declaring_type,
                visibility,
            ));
        }

        Err(ReaderError::NoConstructor {
            declaring_type: level.declaring_type.clone(),
        })
    }
}

/// `bean`'s simple name ends with `superclass`'s simple name and is
/// strictly longer: the leading portion, lowercased, is the implicit
/// qualifier (`ElectricHeater` extends `Heater` -> `"electric"`).
fn derive_implicit_qualifier(bean: &str, superclass: &str) -> Option<String> {
    let bean_simple = TypeNameUtil::simple_name(bean);
    let super_simple = TypeNameUtil::simple_name(superclass);
    if bean_simple.len() > super_simple.len() && bean_simple.ends_with(super_simple) {
        Some(bean_simple[..bean_simple.len() - super_simple.len()].to_lowercase())
    } else {
        None
    }
}

/////////////////////////////////////////////////////////////////////////////////////////
