//! Cross-reference hyperlinks for documentation popups
//!
//! The host's documentation view follows anchors whose href carries a
//! well-known scheme plus the identifier of the referenced element. The
//! scheme is configurable on the renderer; this module only formats.

use crate::markdown::escape_html;

/// Scheme understood by the default documentation view
pub const DEFAULT_LINK_SCHEME: &str = "element://";

/// Append a cross-reference anchor to the output buffer
///
/// The target is an element identifier, not user prose; the label is
/// escaped before insertion.
pub fn append_hyperlink(output: &mut String, scheme: &str, target: &str, label: &str) {
    output.push_str("<a href=\"");
    output.push_str(scheme);
    output.push_str(target);
    output.push_str("\">");
    output.push_str(&escape_html(label));
    output.push_str("</a>");
}

/// A `Class#member` see-also reference target
#[derive(Debug, Clone, PartialEq)]
pub struct SeeTarget {
    /// The referenced class name
    pub class_name: String,
    /// The referenced member id, when the target names one
    pub member: Option<String>,
}

impl SeeTarget {
    /// Parse a raw see-also reference
    ///
    /// Accepts `Class` and `Class#member`; returns `None` when no class
    /// name is present.
    #[must_use]
    pub fn parse(reference: &str) -> Option<Self> {
        let reference = reference.trim();
        let (class_name, member) = match reference.split_once('#') {
            Some((class_name, member)) => (class_name, Some(member)),
            None => (reference, None),
        };
        if class_name.is_empty() {
            return None;
        }
        Some(Self {
            class_name: class_name.to_string(),
            member: member
                .map(str::trim)
                .filter(|member| !member.is_empty())
                .map(String::from),
        })
    }
}
