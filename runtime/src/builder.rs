//! Assembles a [`BeanScope`]: register candidates and lifecycle hooks,
//! then `build` hands back a scope in its closed-but-built state. Hooks
//! don't run until the caller explicitly calls [`BeanScope::start`].

use std::sync::Arc;

use crate::bean_map::BeanMap;
use crate::entry::CandidateEntry;
use crate::priority::Priority;
use crate::scope::BeanScope;

/////////////////////////////////////////////////////////////////////////////////////////

type Hook = Box<dyn Fn() -> Result<(), String> + Send + Sync>;

/// The pair of lifecycle hooks a bean may register. Either side may be
/// absent: not every bean declares a `PostConstruct` or `PreDestroy`.
#[derive(Default)]
pub struct LifecycleHooks {
    pub post_construct: Option<Hook>,
    pub pre_destroy: Option<Hook>,
}

/////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
pub struct ScopeBuilder {
    map: BeanMap,
    post_construct_hooks: Vec<(String, Hook)>,
    pre_destroy_hooks: Vec<(String, Hook)>,
}

impl ScopeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one bean instance under a single `type_name`, with no
    /// further assignable supertypes. The common case for simple beans
    /// and for tests; generated code with a richer assignable-type set
    /// should use [`ScopeBuilder::bind_as`] instead.
    pub fn bind<T: Send + Sync + 'static>(
        &mut self,
        type_name: impl Into<String>,
        qualifier: Option<&str>,
        annotations: Vec<String>,
        priority: Priority,
        sort_priority: Option<i64>,
        value: T,
    ) -> &mut Self {
        self.bind_as(
            vec![type_name.into()],
            qualifier,
            annotations,
            priority,
            sort_priority,
            value,
        )
    }

    /// Registers one bean instance under every type in
    /// `assignable_types` (concrete type first), mirroring
    /// `BeanDescriptor::assignable_types` from the reader.
    pub fn bind_as<T: Send + Sync + 'static>(
        &mut self,
        assignable_types: Vec<String>,
        qualifier: Option<&str>,
        annotations: Vec<String>,
        priority: Priority,
        sort_priority: Option<i64>,
        value: T,
    ) -> &mut Self {
        self.map.insert(CandidateEntry::new(
            assignable_types,
            qualifier.map(str::to_string),
            annotations,
            priority,
            sort_priority,
            Arc::new(value),
        ));
        self
    }

    /// Registers both lifecycle hooks for one bean in a single call.
    pub fn bind_hooks(&mut self, type_name: impl Into<String>, hooks: LifecycleHooks) -> &mut Self {
        let type_name = type_name.into();
        if let Some(hook) = hooks.post_construct {
            self.post_construct_hooks.push((type_name.clone(), hook));
        }
        if let Some(hook) = hooks.pre_destroy {
            self.pre_destroy_hooks.push((type_name, hook));
        }
        self
    }

    pub fn on_post_construct(
        &mut self,
        type_name: impl Into<String>,
        hook: impl Fn() -> Result<(), String> + Send + Sync + 'static,
    ) -> &mut Self {
        self.post_construct_hooks.push((type_name.into(), Box::new(hook)));
        self
    }

    pub fn on_pre_destroy(
        &mut self,
        type_name: impl Into<String>,
        hook: impl Fn() -> Result<(), String> + Send + Sync + 'static,
    ) -> &mut Self {
        self.pre_destroy_hooks.push((type_name.into(), Box::new(hook)));
        self
    }

    /// Freezes the registered candidates and hooks into a [`BeanScope`].
    /// No hook runs yet: the returned scope is in its built-but-not-started
    /// state until the caller calls [`BeanScope::start`].
    pub fn build(self) -> BeanScope {
        BeanScope::new(self.map, self.post_construct_hooks, self.pre_destroy_hooks)
    }
}

/////////////////////////////////////////////////////////////////////////////////////////
