//! Runtime bean scope: resolves beans a generated application registers
//! by canonical type name, applying priority-tier and qualifier rules at
//! lookup time, and runs lifecycle hooks once each on startup/shutdown.

mod bean_map;
mod builder;
mod entry;
mod error;
mod priority;
mod scope;

pub use builder::{LifecycleHooks, ScopeBuilder};
pub use entry::CandidateEntry;
pub use error::ScopeError;
pub use priority::Priority;
pub use scope::BeanScope;
