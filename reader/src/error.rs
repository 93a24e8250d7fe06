//! Errors a reader can raise while normalizing one bean's declarations.

/////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReaderError {
    #[error("{declaring_type} has no eligible constructor: provide exactly one public/crate-visible constructor, or mark one with #[Inject]")]
    NoConstructor { declaring_type: String },

    #[error("{declaring_type} declares {count} #[Inject] constructors; exactly one is allowed")]
    MultipleInjectConstructors {
        declaring_type: String,
        count: usize,
    },
}
