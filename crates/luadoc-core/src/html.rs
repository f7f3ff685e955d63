//! HTML rendering of documentation comments for editor popups
//!
//! One rendering call walks the comment tree twice: a first pass appends the
//! free-text block (definitions and markdown text in document order), a
//! second pass collects the structured tags into a fixed-order sections
//! table. Absent or unresolved data is omitted silently; rendering never
//! fails, worst case is a less complete fragment.

use crate::link::{append_hyperlink, DEFAULT_LINK_SCHEME};
use crate::markdown::{escape_html, strip_paragraph, MarkdownToHtml};
use crate::tags::{
    ClassDef, DocComment, DocTag, FieldDef, OverloadDef, ParamDef, ReturnDef, SeeRef, TypeDef,
};
use crate::ty::{FuncSignature, Ty, TypeRenderer};

const CONTENT_START: &str = "<div class='content'>";
const CONTENT_END: &str = "</div>";
const SECTIONS_START: &str = "<table class='sections'>";
const SECTIONS_END: &str = "</table>";
const SECTION_HEADER_START: &str = "<tr><td valign='top' class='section'><p>";
const SECTION_SEPARATOR: &str = "</p></td><td valign='top'>";
const SECTION_END: &str = "</td></tr>";

/// The four simple sections, matched by exact tag name, in display order
const NAMED_SECTIONS: [(&str, &str); 4] = [
    ("version", "Version"),
    ("author", "Author"),
    ("since", "Since"),
    ("deprecated", "Deprecated"),
];

/// Options for HTML rendering
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Scheme prefixed to cross-reference hyperlink targets
    pub link_scheme: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            link_scheme: DEFAULT_LINK_SCHEME.to_string(),
        }
    }
}

/// Renders documentation comments as HTML fragments
///
/// Every `render_*` method appends to a caller-supplied buffer; the buffer
/// is the output channel and no method returns HTML.
pub struct HtmlRenderer<'a> {
    types: &'a dyn TypeRenderer,
    markdown: &'a dyn MarkdownToHtml,
    options: HtmlOptions,
}

impl<'a> HtmlRenderer<'a> {
    /// Create a renderer over the given collaborators with default options
    pub fn new(types: &'a dyn TypeRenderer, markdown: &'a dyn MarkdownToHtml) -> Self {
        Self {
            types,
            markdown,
            options: HtmlOptions::default(),
        }
    }

    /// Replace the rendering options
    #[must_use]
    pub fn with_options(mut self, options: HtmlOptions) -> Self {
        self.options = options;
        self
    }

    /// Render a whole comment: free-text block plus sections table
    ///
    /// Appends nothing when the comment is absent.
    pub fn render_comment(&self, output: &mut String, comment: Option<&DocComment>) {
        let Some(comment) = comment else { return };

        output.push_str(CONTENT_START);
        for child in comment.children() {
            match child {
                DocTag::Class(class_def) => self.render_class_def(output, class_def),
                DocTag::Type(type_def) => self.render_type_def(output, type_def),
                // Structured tags surface in the sections table instead
                DocTag::Field(_)
                | DocTag::Param(_)
                | DocTag::Return(_)
                | DocTag::Overload(_)
                | DocTag::See(_)
                | DocTag::Named(_) => {}
                DocTag::Text(text) => output.push_str(&self.markdown.convert(text)),
            }
        }
        output.push_str(CONTENT_END);

        self.render_sections(output, comment);
    }

    fn render_sections(&self, output: &mut String, comment: &DocComment) {
        output.push_str(SECTIONS_START);

        for (tag_name, title) in NAMED_SECTIONS {
            self.render_named_section(output, comment, tag_name, title);
        }

        // Fields
        let fields: Vec<_> = comment.fields().collect();
        if !fields.is_empty() {
            section_header(output, "Fields");
            for field_def in fields {
                output.push_str("<p>");
                self.render_field_def(output, field_def);
                output.push_str("</p>");
            }
            output.push_str(SECTION_END);
        }

        // Parameters
        let params: Vec<_> = comment.params().collect();
        if !params.is_empty() {
            section_header(output, "Parameters");
            for param_def in params {
                output.push_str("<p>");
                self.render_param_def(output, param_def, false);
                output.push_str("</p>");
            }
            output.push_str(SECTION_END);
        }

        // Returns: single-return-value convention, first tag only
        if let Some(return_def) = comment.first_return() {
            section_header(output, "Returns");
            output.push_str("<p>");
            self.render_return_def(output, return_def);
            output.push_str("</p>");
            output.push_str(SECTION_END);
        }

        // Overloads
        let overloads: Vec<_> = comment.overloads().collect();
        if !overloads.is_empty() {
            section_header(output, "Overloads");
            for overload_def in overloads {
                output.push_str("<p>");
                self.render_overload_def(output, overload_def);
                output.push_str("</p>");
            }
            output.push_str(SECTION_END);
        }

        // See
        let see_refs: Vec<_> = comment.see_refs().collect();
        if !see_refs.is_empty() {
            section_header(output, "See");
            for see_ref in see_refs {
                output.push_str("<p>");
                self.render_see_ref(output, see_ref);
                output.push_str("</p>");
            }
            output.push_str(SECTION_END);
        }

        output.push_str(SECTIONS_END);
    }

    fn render_named_section(
        &self,
        output: &mut String,
        comment: &DocComment,
        tag_name: &str,
        title: &str,
    ) {
        let tags: Vec<_> = comment.named(tag_name).collect();
        if tags.is_empty() {
            return;
        }
        section_header(output, title);
        for tag in tags {
            output.push_str("<p>");
            self.render_comment_string(None, None, output, tag.text.as_deref());
            output.push_str("</p>");
        }
        output.push_str(SECTION_END);
    }

    /// Render a class definition: `<pre>` signature block plus description
    pub fn render_class_def(&self, output: &mut String, class_def: &ClassDef) {
        output.push_str("<pre>");
        output.push_str("class ");
        output.push_str("<b>");
        output.push_str(&escape_html(&class_def.name));
        output.push_str("</b>");
        if let Some(superclass) = &class_def.superclass {
            output.push_str(" : ");
            append_hyperlink(output, &self.options.link_scheme, superclass, superclass);
        }
        output.push_str("</pre>");
        self.render_comment_string(Some(" - "), None, output, class_def.comment.as_deref());
    }

    /// Render a type definition: the type's textual form, no markup
    pub fn render_type_def(&self, output: &mut String, type_def: &TypeDef) {
        output.push_str(&self.types.render(&type_def.ty));
    }

    /// Render a field: `name: type - description`
    pub fn render_field_def(&self, output: &mut String, field_def: &FieldDef) {
        output.push_str(&escape_html(&field_def.name));
        self.render_ty_union(Some(": "), None, output, field_def.ty.as_ref());
        self.render_comment_string(Some(" - "), None, output, field_def.comment.as_deref());
    }

    /// Render a parameter: `<code>name</code> : type - description`
    ///
    /// A tag whose name reference did not resolve renders nothing. The
    /// `with_label` form prefixes a `param` label; it is used when a
    /// parameter is rendered on its own rather than inside the sections
    /// table.
    pub fn render_param_def(&self, output: &mut String, param_def: &ParamDef, with_label: bool) {
        let Some(name) = &param_def.name else { return };
        if with_label {
            output.push_str("<b>param</b> ");
        }
        output.push_str("<code>");
        output.push_str(&escape_html(name));
        output.push_str("</code>");
        self.render_ty_union(Some(" : "), None, output, param_def.ty.as_ref());
        self.render_comment_string(Some(" - "), None, output, param_def.comment.as_deref());
    }

    /// Render a return definition
    ///
    /// Each listed type is followed by a trailing space and the list is
    /// parenthesized when more than one type is present: `(A B ) - text`.
    pub fn render_return_def(&self, output: &mut String, return_def: &ReturnDef) {
        if return_def.types.is_empty() {
            return;
        }
        let parenthesize = return_def.types.len() > 1;
        if parenthesize {
            output.push('(');
        }
        for ty in &return_def.types {
            output.push_str(&self.types.render(ty));
            output.push(' ');
        }
        if parenthesize {
            output.push(')');
        }
        self.render_comment_string(Some(" - "), None, output, return_def.comment.as_deref());
    }

    /// Render an overload: the resolved signature's textual form
    pub fn render_overload_def(&self, output: &mut String, overload_def: &OverloadDef) {
        if let Some(signature) = &overload_def.signature {
            output.push_str(&self.types.render_signature(signature));
        }
    }

    /// Render a see-also reference: resolved type text plus `#member`
    pub fn render_see_ref(&self, output: &mut String, see_ref: &SeeRef) {
        let Some(ty) = &see_ref.ty else { return };
        output.push_str(&self.types.render(ty));
        if let Some(member) = &see_ref.member {
            output.push('#');
            output.push_str(&escape_html(member));
        }
    }

    /// Render a callable's parameter list and return type
    ///
    /// Parameters are joined with a line-break-friendly separator so long
    /// signatures wrap readably; the parentheses and the `: return` part
    /// are always present.
    pub fn render_signature(&self, output: &mut String, signature: &FuncSignature) {
        output.push('(');
        let mut first = true;
        for param in &signature.params {
            if !first {
                output.push_str(", <br>");
            }
            first = false;
            output.push_str(&escape_html(&param.name));
            output.push_str(": ");
            output.push_str(&self.types.render(&param.ty));
        }
        output.push_str("): ");
        output.push_str(&self.types.render(&signature.ret));
    }

    /// Convert and append a markdown comment string
    ///
    /// No-op for absent or empty text. A single enclosing paragraph wrapper
    /// is stripped from the conversion; prefix and postfix are appended only
    /// when the text exists.
    pub fn render_comment_string(
        &self,
        prefix: Option<&str>,
        postfix: Option<&str>,
        output: &mut String,
        text: Option<&str>,
    ) {
        let Some(text) = text else { return };
        if text.is_empty() {
            return;
        }
        if let Some(prefix) = prefix {
            output.push_str(prefix);
        }
        let converted = self.markdown.convert(text);
        output.push_str(strip_paragraph(&converted));
        if let Some(postfix) = postfix {
            output.push_str(postfix);
        }
    }

    /// Render a single type with optional prefix/postfix, no-op when absent
    pub fn render_ty_union(
        &self,
        prefix: Option<&str>,
        postfix: Option<&str>,
        output: &mut String,
        ty: Option<&Ty>,
    ) {
        let Some(ty) = ty else { return };
        if let Some(prefix) = prefix {
            output.push_str(prefix);
        }
        output.push_str(&self.types.render(ty));
        if let Some(postfix) = postfix {
            output.push_str(postfix);
        }
    }
}

fn section_header(output: &mut String, title: &str) {
    output.push_str(SECTION_HEADER_START);
    output.push_str(title);
    output.push_str(SECTION_SEPARATOR);
}
