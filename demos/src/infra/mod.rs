mod wiring;

pub use wiring::build_scope;
