//! The runtime container: runs `PostConstruct` hooks once on `start`,
//! resolves beans by canonical type name and qualifier while open, and
//! runs `PreDestroy` hooks once on `close`.

use std::sync::{Arc, Mutex};

use crate::bean_map::BeanMap;
use crate::entry::CandidateEntry;
use crate::error::ScopeError;
use crate::priority::Priority;

/////////////////////////////////////////////////////////////////////////////////////////

const DEFAULT_SORT_PRIORITY: i64 = 5000;

type Hook = Box<dyn Fn() -> Result<(), String> + Send + Sync>;

/// The scope's built→started→closed lifecycle, guarded by a single lock
/// so `start` and `close` never race each other or themselves.
#[derive(Debug, PartialEq, Eq)]
enum LifecycleState {
    Built,
    Started,
    Closed,
}

struct BeanScopeInner {
    map: BeanMap,
    post_construct_hooks: Vec<(String, Hook)>,
    pre_destroy_hooks: Vec<(String, Hook)>,
    state: Mutex<LifecycleState>,
}

/// A built bean container. Cloning a `BeanScope` is cheap: it shares the
/// same inner state, mirroring the single-shared-container model a
/// generated application entry point holds for its whole lifetime.
#[derive(Clone)]
pub struct BeanScope {
    inner: Arc<BeanScopeInner>,
}

impl BeanScope {
    pub(crate) fn new(
        map: BeanMap,
        post_construct_hooks: Vec<(String, Hook)>,
        pre_destroy_hooks: Vec<(String, Hook)>,
    ) -> Self {
        Self {
            inner: Arc::new(BeanScopeInner {
                map,
                post_construct_hooks,
                pre_destroy_hooks,
                state: Mutex::new(LifecycleState::Built),
            }),
        }
    }

    /// Resolves exactly one bean for `type_name`/`qualifier`, applying
    /// the priority ladder: a supplied binding always wins outright;
    /// otherwise more than one normal-priority candidate is ambiguous
    /// even when a primary candidate also exists; otherwise primary beats
    /// normal beats secondary.
    pub fn get<T: Send + Sync + 'static>(
        &self,
        type_name: &str,
        qualifier: Option<&str>,
    ) -> Result<Arc<T>, ScopeError> {
        self.check_open()?;
        self.resolve(type_name, qualifier)?
            .ok_or_else(|| ScopeError::Unregistered {
                type_name: type_name.to_string(),
                qualifier: qualifier.map(str::to_string),
            })
    }

    /// Like [`BeanScope::get`], but a missing registration is `Ok(None)`
    /// rather than an error. Ambiguity among registered candidates is
    /// still an error.
    pub fn candidate<T: Send + Sync + 'static>(
        &self,
        type_name: &str,
        qualifier: Option<&str>,
    ) -> Result<Option<Arc<T>>, ScopeError> {
        self.check_open()?;
        self.resolve(type_name, qualifier)
    }

    /// Every bean assignable to `type_name`, in registration order.
    pub fn list<T: Send + Sync + 'static>(&self, type_name: &str) -> Result<Vec<Arc<T>>, ScopeError> {
        self.check_open()?;
        self.inner
            .map
            .all(type_name)
            .iter()
            .map(|entry| downcast(entry, type_name))
            .collect()
    }

    /// Every bean assignable to `type_name`. When at least one candidate
    /// declares a `@Priority(int)` value, the result is stable-sorted
    /// ascending by that value (candidates without one default to
    /// 5000); otherwise registration order is preserved untouched.
    pub fn list_by_priority<T: Send + Sync + 'static>(
        &self,
        type_name: &str,
    ) -> Result<Vec<Arc<T>>, ScopeError> {
        self.check_open()?;
        let mut entries = self.inner.map.all(type_name);
        if entries.iter().any(|e| e.sort_priority.is_some()) {
            entries.sort_by_key(|e| e.sort_priority.unwrap_or(DEFAULT_SORT_PRIORITY));
        }
        entries
            .iter()
            .map(|entry| downcast(entry, type_name))
            .collect()
    }

    /// Every bean tagged with `annotation`, in registration order.
    pub fn beans_with_annotation<T: Send + Sync + 'static>(
        &self,
        annotation: &str,
    ) -> Result<Vec<Arc<T>>, ScopeError> {
        self.check_open()?;
        self.inner
            .map
            .all_by_annotation(annotation)
            .iter()
            .map(|entry| downcast(entry, annotation))
            .collect()
    }

    /// Runs every registered `PostConstruct` hook once, in registration
    /// order, and transitions the scope from built to open. A failing
    /// hook returns its error without marking the scope started, so a
    /// caller may retry. Calling `start` again after a successful call is
    /// a no-op.
    pub fn start(&self) -> Result<(), ScopeError> {
        let mut state = self.inner.state.lock().expect("scope mutex poisoned");
        if !matches!(*state, LifecycleState::Built) {
            return Ok(());
        }
        for (type_name, hook) in &self.inner.post_construct_hooks {
            hook().map_err(|reason| ScopeError::LifecycleHookFailed {
                type_name: type_name.clone(),
                hook: "PostConstruct",
                reason,
            })?;
        }
        *state = LifecycleState::Started;
        Ok(())
    }

    /// Runs every registered `PreDestroy` hook once, in the order beans
    /// were registered in, then marks the scope closed so that further
    /// lookups fail with [`ScopeError::Closed`]. Calling `close` again
    /// afterward is a no-op.
    pub fn close(&self) -> Result<(), ScopeError> {
        let mut state = self.inner.state.lock().expect("scope mutex poisoned");
        if matches!(*state, LifecycleState::Closed) {
            return Ok(());
        }
        *state = LifecycleState::Closed;
        for (type_name, hook) in &self.inner.pre_destroy_hooks {
            hook().map_err(|reason| ScopeError::LifecycleHookFailed {
                type_name: type_name.clone(),
                hook: "PreDestroy",
                reason,
            })?;
        }
        Ok(())
    }

    fn check_open(&self) -> Result<(), ScopeError> {
        let state = self.inner.state.lock().expect("scope mutex poisoned");
        if matches!(*state, LifecycleState::Closed) {
            return Err(ScopeError::Closed);
        }
        Ok(())
    }

    fn resolve<T: Send + Sync + 'static>(
        &self,
        type_name: &str,
        qualifier: Option<&str>,
    ) -> Result<Option<Arc<T>>, ScopeError> {
        let candidates = self.inner.map.candidates(type_name, qualifier);

        let supplied: Vec<_> = candidates
            .iter()
            .filter(|e| e.priority == Priority::Supplied)
            .collect();
        if let Some(entry) = supplied.first() {
            return downcast(entry, type_name).map(Some);
        }

        let normal: Vec<_> = candidates
            .iter()
            .filter(|e| e.priority == Priority::Normal)
            .collect();
        if normal.len() > 1 {
            return Err(ScopeError::MultipleNormal {
                type_name: type_name.to_string(),
                count: normal.len(),
            });
        }

        let primary: Vec<_> = candidates
            .iter()
            .filter(|e| e.priority == Priority::Primary)
            .collect();
        if !primary.is_empty() {
            if primary.len() > 1 {
                return Err(ScopeError::MultiplePrimary {
                    type_name: type_name.to_string(),
                    count: primary.len(),
                });
            }
            return downcast(primary[0], type_name).map(Some);
        }

        if let Some(entry) = normal.first() {
            return downcast(entry, type_name).map(Some);
        }

        let secondary: Vec<_> = candidates
            .iter()
            .filter(|e| e.priority == Priority::Secondary)
            .collect();
        if !secondary.is_empty() {
            if secondary.len() > 1 {
                return Err(ScopeError::MultipleSecondary {
                    type_name: type_name.to_string(),
                    count: secondary.len(),
                });
            }
            return downcast(secondary[0], type_name).map(Some);
        }

        Ok(None)
    }
}

fn downcast<T: Send + Sync + 'static>(
    entry: &CandidateEntry,
    type_name: &str,
) -> Result<Arc<T>, ScopeError> {
    entry.downcast::<T>().ok_or_else(|| ScopeError::TypeMismatch {
        type_name: type_name.to_string(),
    })
}

/////////////////////////////////////////////////////////////////////////////////////////
