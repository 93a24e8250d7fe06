//! The reader's output types: the normalized shape of one bean, handed
//! to the (out-of-scope) emitter.

/////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    NonPrivate,
    Private,
}

/////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamPoint {
    pub ty: String,
    pub qualifier: Option<String>,
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPoint {
    pub field_name: String,
    pub declared_type: String,
    pub qualifier: Option<String>,
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodPoint {
    pub method_name: String,
    pub parameters: Vec<ParamPoint>,
    pub declaring_type: String,
    /// Only meaningful for factory methods: the `@Named` qualifier the
    /// produced bean is registered under, if any.
    pub qualifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorPoint {
    pub parameters: Vec<ParamPoint>,
    pub declaring_type: String,
    pub visibility: Visibility,
}

/////////////////////////////////////////////////////////////////////////////////////////

/// Normalized description of one bean, produced once at generation time
/// and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanDescriptor {
    pub base_type: Option<String>,
    pub assignable_types: Vec<String>,
    pub implicit_qualifier: Option<String>,
    pub constructor: ConstructorPoint,
    pub inject_fields: Vec<FieldPoint>,
    pub inject_methods: Vec<MethodPoint>,
    pub factory_methods: Vec<MethodPoint>,
    pub post_construct: Option<String>,
    pub pre_destroy: Option<String>,
}
