//! Resolved-type display model and rendering capability
//!
//! The type system itself lives in the host; what reaches this crate is a
//! display model of already-resolved types. Rendering goes through the
//! [`TypeRenderer`] capability so hosts with richer type text (generics,
//! aliases, inferred unions) can substitute their own.

/// A resolved type, as far as rendering is concerned
#[derive(Debug, Clone, PartialEq)]
pub enum Ty {
    /// A named type: a class, alias, or primitive
    Named(String),
    /// An array of the inner type
    Array(Box<Ty>),
    /// A union of alternatives
    Union(Vec<Ty>),
    /// A function type
    Function(FuncSignature),
    /// A type the host could not determine
    Unknown,
}

impl Ty {
    /// Shorthand for a named type
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Ty::Named(name.into())
    }

    /// Shorthand for an array type
    #[must_use]
    pub fn array(inner: Ty) -> Self {
        Ty::Array(Box::new(inner))
    }
}

/// A callable's resolved signature
#[derive(Debug, Clone, PartialEq)]
pub struct FuncSignature {
    /// Parameters in declaration order
    pub params: Vec<SigParam>,
    /// The return type
    pub ret: Box<Ty>,
}

impl FuncSignature {
    /// Create a signature from its parameter list and return type
    #[must_use]
    pub fn new(params: Vec<SigParam>, ret: Ty) -> Self {
        Self {
            params,
            ret: Box::new(ret),
        }
    }
}

/// A single parameter inside a [`FuncSignature`]
#[derive(Debug, Clone, PartialEq)]
pub struct SigParam {
    /// The parameter name
    pub name: String,
    /// The parameter type
    pub ty: Ty,
}

impl SigParam {
    /// Create a signature parameter
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Ty) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Capability for turning resolved types into display text
pub trait TypeRenderer {
    /// Render a type to its textual form
    fn render(&self, ty: &Ty) -> String;

    /// Render a function signature to its textual form
    fn render_signature(&self, signature: &FuncSignature) -> String;
}

/// Default renderer producing EmmyLua-style type text
///
/// `fun(x: number): string` for functions, `A|B` for unions, `T[]` for
/// arrays, `any` for unknown types.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTypeRenderer;

impl TypeRenderer for DefaultTypeRenderer {
    fn render(&self, ty: &Ty) -> String {
        match ty {
            Ty::Named(name) => name.clone(),
            Ty::Array(inner) => format!("{}[]", self.render(inner)),
            Ty::Union(parts) => parts
                .iter()
                .map(|part| self.render(part))
                .collect::<Vec<_>>()
                .join("|"),
            Ty::Function(signature) => self.render_signature(signature),
            Ty::Unknown => "any".to_string(),
        }
    }

    fn render_signature(&self, signature: &FuncSignature) -> String {
        let params = signature
            .params
            .iter()
            .map(|param| format!("{}: {}", param.name, self.render(&param.ty)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("fun({}): {}", params, self.render(&signature.ret))
    }
}
