//! Reads `syn` declarations describing one bean type into a normalized
//! [`BeanDescriptor`], the input the (out-of-scope) code generator emits
//! runtime registration from.
//!
//! This crate never parses source files and never runs as a proc-macro
//! itself: it consumes `syn` AST fragments a driver has already
//! extracted, already ordered most-derived first. See [`reader::TypeLevel`]
//! for that contract.

mod annotation;
mod collector;
mod descriptor;
mod error;
mod field;
mod method;
mod reader;
mod type_name;

pub use descriptor::{
    BeanDescriptor, ConstructorPoint, FieldPoint, MethodPoint, ParamPoint, Visibility,
};
pub use error::ReaderError;
pub use reader::{BeanReader, TypeLevel};
pub use type_name::TypeNameUtil;
