//! Documentation-comment tree model
//!
//! A [`DocComment`] is the parsed form of an EmmyLua-style annotation block,
//! produced by the host's parser and handed to the renderers read-only. Tags
//! carry already-resolved types; nothing in this crate resolves names.

use crate::ty::{FuncSignature, Ty};

/// A parsed documentation comment: an ordered sequence of tags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocComment {
    children: Vec<DocTag>,
}

impl DocComment {
    /// Create an empty comment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag, preserving document order
    pub fn push(&mut self, tag: DocTag) {
        self.children.push(tag);
    }

    /// All direct children in document order
    #[must_use]
    pub fn children(&self) -> &[DocTag] {
        &self.children
    }

    /// Check if the comment has no tags at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// All class definitions
    pub fn class_defs(&self) -> impl Iterator<Item = &ClassDef> {
        self.children.iter().filter_map(|tag| match tag {
            DocTag::Class(class_def) => Some(class_def),
            _ => None,
        })
    }

    /// All type definitions
    pub fn type_defs(&self) -> impl Iterator<Item = &TypeDef> {
        self.children.iter().filter_map(|tag| match tag {
            DocTag::Type(type_def) => Some(type_def),
            _ => None,
        })
    }

    /// All field definitions
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.children.iter().filter_map(|tag| match tag {
            DocTag::Field(field_def) => Some(field_def),
            _ => None,
        })
    }

    /// All parameter definitions
    pub fn params(&self) -> impl Iterator<Item = &ParamDef> {
        self.children.iter().filter_map(|tag| match tag {
            DocTag::Param(param_def) => Some(param_def),
            _ => None,
        })
    }

    /// All return definitions
    pub fn returns(&self) -> impl Iterator<Item = &ReturnDef> {
        self.children.iter().filter_map(|tag| match tag {
            DocTag::Return(return_def) => Some(return_def),
            _ => None,
        })
    }

    /// The first return definition, if any
    ///
    /// Lua documentation follows a single-return-value convention; renderers
    /// use only this one even when more return tags exist structurally.
    #[must_use]
    pub fn first_return(&self) -> Option<&ReturnDef> {
        self.returns().next()
    }

    /// All overload definitions
    pub fn overloads(&self) -> impl Iterator<Item = &OverloadDef> {
        self.children.iter().filter_map(|tag| match tag {
            DocTag::Overload(overload_def) => Some(overload_def),
            _ => None,
        })
    }

    /// All see-also references
    pub fn see_refs(&self) -> impl Iterator<Item = &SeeRef> {
        self.children.iter().filter_map(|tag| match tag {
            DocTag::See(see_ref) => Some(see_ref),
            _ => None,
        })
    }

    /// All generic named tags with the given tag name (e.g. `version`)
    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a NamedTag> + 'a {
        self.children.iter().filter_map(move |tag| match tag {
            DocTag::Named(named) if named.name == name => Some(named),
            _ => None,
        })
    }
}

impl FromIterator<DocTag> for DocComment {
    fn from_iter<I: IntoIterator<Item = DocTag>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

/// A structural unit inside a documentation comment
#[derive(Debug, Clone, PartialEq)]
pub enum DocTag {
    /// `@class Name : Super` definition
    Class(ClassDef),
    /// `@type T` definition
    Type(TypeDef),
    /// `@field name T` definition
    Field(FieldDef),
    /// `@param name T` definition
    Param(ParamDef),
    /// `@return T, U` definition
    Return(ReturnDef),
    /// `@overload fun(...)` definition
    Overload(OverloadDef),
    /// `@see Class#member` reference
    See(SeeRef),
    /// Generic named tag such as `@version` or `@deprecated`
    Named(NamedTag),
    /// Free markdown text between tags
    Text(String),
}

/// A `@class` definition
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    /// The declared class name
    pub name: String,
    /// Superclass name, when the class extends one
    pub superclass: Option<String>,
    /// Trailing markdown description
    pub comment: Option<String>,
}

impl ClassDef {
    /// Create a class definition with no superclass or description
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass: None,
            comment: None,
        }
    }

    /// Set the superclass name
    #[must_use]
    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Set the trailing description
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A `@type` definition
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDef {
    /// The resolved type
    pub ty: Ty,
}

impl TypeDef {
    /// Create a type definition
    #[must_use]
    pub fn new(ty: Ty) -> Self {
        Self { ty }
    }
}

/// A `@field` definition
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// The field name
    pub name: String,
    /// The resolved field type, when one was declared
    pub ty: Option<Ty>,
    /// Trailing markdown description
    pub comment: Option<String>,
}

impl FieldDef {
    /// Create a field definition with no type or description
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            comment: None,
        }
    }

    /// Set the field type
    #[must_use]
    pub fn with_ty(mut self, ty: Ty) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Set the trailing description
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A `@param` definition
///
/// The name is optional: a tag whose name reference does not resolve to a
/// real parameter keeps `name: None` and is skipped by the renderers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParamDef {
    /// The resolved parameter name
    pub name: Option<String>,
    /// The resolved parameter type, when one was declared
    pub ty: Option<Ty>,
    /// Trailing markdown description
    pub comment: Option<String>,
}

impl ParamDef {
    /// Create a parameter definition with a resolved name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: None,
            comment: None,
        }
    }

    /// Create a parameter definition whose name reference did not resolve
    #[must_use]
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Set the parameter type
    #[must_use]
    pub fn with_ty(mut self, ty: Ty) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Set the trailing description
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A `@return` definition
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReturnDef {
    /// The resolved return types, in declaration order
    pub types: Vec<Ty>,
    /// Trailing markdown description
    pub comment: Option<String>,
}

impl ReturnDef {
    /// Create a return definition from its type list
    #[must_use]
    pub fn new(types: Vec<Ty>) -> Self {
        Self {
            types,
            comment: None,
        }
    }

    /// Set the trailing description
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// An `@overload` definition
///
/// Carries the resolved function signature, or `None` when the overload's
/// function type could not be resolved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverloadDef {
    /// The resolved overload signature
    pub signature: Option<FuncSignature>,
}

impl OverloadDef {
    /// Create an overload from a resolved signature
    #[must_use]
    pub fn new(signature: FuncSignature) -> Self {
        Self {
            signature: Some(signature),
        }
    }

    /// Create an overload whose function type did not resolve
    #[must_use]
    pub fn unresolved() -> Self {
        Self::default()
    }
}

/// A `@see` reference
///
/// Carries the resolved type of the referenced class, or `None` when the
/// class name could not be resolved, plus an optional member id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeeRef {
    /// The resolved type of the referenced class
    pub ty: Option<Ty>,
    /// Member id inside the referenced class, when the reference names one
    pub member: Option<String>,
}

impl SeeRef {
    /// Create a reference to a resolved class type
    #[must_use]
    pub fn new(ty: Ty) -> Self {
        Self {
            ty: Some(ty),
            member: None,
        }
    }

    /// Create a reference whose class name did not resolve
    #[must_use]
    pub fn unresolved() -> Self {
        Self::default()
    }

    /// Set the member id
    #[must_use]
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }
}

/// A generic named tag: `@version`, `@author`, `@since`, `@deprecated`, ...
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTag {
    /// The tag name, without the leading `@`
    pub name: String,
    /// The tag text, when any follows the name
    pub text: Option<String>,
}

impl NamedTag {
    /// Create a named tag with no text
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
        }
    }

    /// Set the tag text
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}
