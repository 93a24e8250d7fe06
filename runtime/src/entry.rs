//! A single resolved bean instance plus the metadata `BeanScope` needs to
//! rank it against competing candidates.

use std::any::Any;
use std::sync::Arc;

use crate::priority::Priority;

/////////////////////////////////////////////////////////////////////////////////////////

/// One bean instance registered into a scope. Instances are stored
/// behind `Arc<dyn Any + Send + Sync>` and keyed by canonical type name
/// rather than `TypeId`, since the type identity beans are resolved
/// against is a caller-supplied string, not necessarily a concrete Rust
/// type the scope has compiled against.
pub struct CandidateEntry {
    /// Every type name this bean can be looked up as; the concrete
    /// bean's own name first, then each non-generic supertype nearest to
    /// furthest.
    pub assignable_types: Vec<String>,
    pub qualifier: Option<String>,
    pub annotations: Vec<String>,
    /// Resolution tier used by the `get`/`candidate` ladder.
    pub priority: Priority,
    /// The `@Priority(int)` annotation value, if declared; used only by
    /// `list_by_priority`, independent of the tier above.
    pub sort_priority: Option<i64>,
    pub instance: Arc<dyn Any + Send + Sync>,
}

impl CandidateEntry {
    pub fn new(
        assignable_types: Vec<String>,
        qualifier: Option<String>,
        annotations: Vec<String>,
        priority: Priority,
        sort_priority: Option<i64>,
        instance: Arc<dyn Any + Send + Sync>,
    ) -> Self {
        Self {
            assignable_types,
            qualifier,
            annotations,
            priority,
            sort_priority,
            instance,
        }
    }

    /// Downcasts the stored instance to `T`. Returns `None` on a type
    /// mismatch; callers translate that into [`crate::error::ScopeError::TypeMismatch`].
    pub fn downcast<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.instance).downcast::<T>().ok()
    }
}
