//! Luadoc Core - documentation-comment rendering for Lua tooling
//!
//! This crate turns a parsed Lua documentation comment (EmmyLua-style
//! annotations) into display text:
//! - Tags: the documentation-comment tree model
//! - Ty: the resolved-type display model and rendering capability
//! - Html: HTML fragments for editor documentation popups
//! - Hover: Markdown for LSP hover contents
//!
//! Parsing and type resolution happen in the host; this crate only renders
//! what it is handed, and absent or unresolved data is omitted silently
//! rather than failing the popup.

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Documentation-comment tree model
pub mod tags;

/// Resolved-type display model and rendering capability
pub mod ty;

/// Markdown conversion and HTML escaping
pub mod markdown;

/// Cross-reference hyperlinks
pub mod link;

/// HTML rendering for documentation popups
pub mod html;

/// Markdown rendering for LSP hovers
pub mod hover;

/// Convenience re-export of the comment renderer
pub use html::{HtmlOptions, HtmlRenderer};

/// Convenience re-export of the hover renderer
pub use hover::render_hover;

/// Convenience re-export of the tree model
pub use tags::{DocComment, DocTag};

/// Convenience re-export of the type capability
pub use ty::{DefaultTypeRenderer, Ty, TypeRenderer};

/// Convenience re-export of the markdown capability
pub use markdown::{CommonMark, MarkdownToHtml};
