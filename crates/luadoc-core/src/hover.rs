//! Markdown rendering of documentation comments for LSP hovers
//!
//! Hover contents travel as markdown rather than HTML, so this is a second
//! rendition of the same tree: signatures go in fenced `lua` blocks, the
//! structured sections become bold-labelled lists. Section order and the
//! silent-omission policy match the HTML renderer.

use std::fmt::Write;

use crate::tags::{DocComment, DocTag, ReturnDef};
use crate::ty::TypeRenderer;

/// The simple sections matched by tag name, in display order
const NAMED_SECTIONS: [(&str, &str); 4] = [
    ("version", "Version"),
    ("author", "Author"),
    ("since", "Since"),
    ("deprecated", "Deprecated"),
];

/// Render a comment as markdown hover contents
#[must_use]
pub fn render_hover(comment: &DocComment, types: &dyn TypeRenderer) -> String {
    let mut output = String::new();

    // Definitions and free text first, in document order
    for child in comment.children() {
        match child {
            DocTag::Class(class_def) => {
                writeln!(output, "```lua").unwrap();
                write!(output, "class {}", class_def.name).unwrap();
                if let Some(superclass) = &class_def.superclass {
                    write!(output, " : {}", superclass).unwrap();
                }
                writeln!(output).unwrap();
                writeln!(output, "```").unwrap();
                if let Some(text) = &class_def.comment {
                    writeln!(output).unwrap();
                    writeln!(output, "{}", text).unwrap();
                }
                writeln!(output).unwrap();
            }
            DocTag::Type(type_def) => {
                writeln!(output, "`{}`", types.render(&type_def.ty)).unwrap();
                writeln!(output).unwrap();
            }
            DocTag::Text(text) => {
                writeln!(output, "{}", text).unwrap();
                writeln!(output).unwrap();
            }
            _ => {}
        }
    }

    for (tag_name, title) in NAMED_SECTIONS {
        let tags: Vec<_> = comment.named(tag_name).collect();
        if tags.is_empty() {
            continue;
        }
        let texts: Vec<&str> = tags.iter().filter_map(|tag| tag.text.as_deref()).collect();
        if texts.is_empty() {
            writeln!(output, "**{}**", title).unwrap();
        } else {
            writeln!(output, "**{}:** {}", title, texts.join(", ")).unwrap();
        }
        writeln!(output).unwrap();
    }

    // Fields
    let fields: Vec<_> = comment.fields().collect();
    if !fields.is_empty() {
        writeln!(output, "**Fields:**").unwrap();
        writeln!(output).unwrap();
        for field_def in fields {
            write!(output, "- `{}`", field_def.name).unwrap();
            if let Some(ty) = &field_def.ty {
                write!(output, ": {}", types.render(ty)).unwrap();
            }
            if let Some(text) = &field_def.comment {
                write!(output, " - {}", text).unwrap();
            }
            writeln!(output).unwrap();
        }
        writeln!(output).unwrap();
    }

    // Parameters: tags without a resolved name are skipped
    let params: Vec<_> = comment
        .params()
        .filter_map(|param_def| param_def.name.as_deref().map(|name| (name, param_def)))
        .collect();
    if !params.is_empty() {
        writeln!(output, "**Parameters:**").unwrap();
        writeln!(output).unwrap();
        for (name, param_def) in params {
            write!(output, "- `{}`", name).unwrap();
            if let Some(ty) = &param_def.ty {
                write!(output, ": {}", types.render(ty)).unwrap();
            }
            if let Some(text) = &param_def.comment {
                write!(output, " - {}", text).unwrap();
            }
            writeln!(output).unwrap();
        }
        writeln!(output).unwrap();
    }

    // Returns: single-return-value convention, first tag only
    if let Some(return_def) = comment.first_return() {
        if !return_def.types.is_empty() {
            write!(output, "**Returns:** ").unwrap();
            write_return_types(&mut output, return_def, types);
            writeln!(output).unwrap();
            writeln!(output).unwrap();
        }
    }

    // Overloads: unresolved ones are skipped
    let overloads: Vec<_> = comment
        .overloads()
        .filter_map(|overload_def| overload_def.signature.as_ref())
        .collect();
    if !overloads.is_empty() {
        writeln!(output, "**Overloads:**").unwrap();
        writeln!(output).unwrap();
        for signature in overloads {
            writeln!(output, "- `{}`", types.render_signature(signature)).unwrap();
        }
        writeln!(output).unwrap();
    }

    // See: unresolved references are skipped
    let see_refs: Vec<_> = comment
        .see_refs()
        .filter_map(|see_ref| see_ref.ty.as_ref().map(|ty| (ty, see_ref)))
        .collect();
    if !see_refs.is_empty() {
        writeln!(output, "**See:**").unwrap();
        writeln!(output).unwrap();
        for (ty, see_ref) in see_refs {
            write!(output, "- {}", types.render(ty)).unwrap();
            if let Some(member) = &see_ref.member {
                write!(output, "#{}", member).unwrap();
            }
            writeln!(output).unwrap();
        }
        writeln!(output).unwrap();
    }

    output.trim_end().to_string()
}

fn write_return_types(output: &mut String, return_def: &ReturnDef, types: &dyn TypeRenderer) {
    let parenthesize = return_def.types.len() > 1;
    if parenthesize {
        output.push('(');
    }
    for ty in &return_def.types {
        output.push_str(&types.render(ty));
        output.push(' ');
    }
    if parenthesize {
        output.push(')');
    }
    if let Some(text) = &return_def.comment {
        output.push_str(" - ");
        output.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{ClassDef, FieldDef, NamedTag, OverloadDef, ParamDef, SeeRef};
    use crate::ty::{DefaultTypeRenderer, FuncSignature, SigParam, Ty};

    fn hover(comment: &DocComment) -> String {
        render_hover(comment, &DefaultTypeRenderer)
    }

    #[test]
    fn test_class_signature_in_lua_fence() {
        let comment: DocComment = [DocTag::Class(
            ClassDef::new("Emitter")
                .with_superclass("Base")
                .with_comment("Dispatches events."),
        )]
        .into_iter()
        .collect();
        let output = hover(&comment);
        assert!(output.starts_with("```lua\nclass Emitter : Base\n```"));
        assert!(output.contains("Dispatches events."));
    }

    #[test]
    fn test_free_text_passes_through() {
        let comment: DocComment = [DocTag::Text("Fires *all* handlers.".to_string())]
            .into_iter()
            .collect();
        assert_eq!(hover(&comment), "Fires *all* handlers.");
    }

    #[test]
    fn test_param_and_return_sections() {
        let comment: DocComment = [
            DocTag::Param(
                ParamDef::named("event")
                    .with_ty(Ty::named("string"))
                    .with_comment("event name"),
            ),
            DocTag::Return(ReturnDef::new(vec![Ty::named("boolean")]).with_comment("ok")),
        ]
        .into_iter()
        .collect();
        let output = hover(&comment);
        assert!(output.contains("**Parameters:**"));
        assert!(output.contains("- `event`: string - event name"));
        assert!(output.contains("**Returns:** boolean  - ok"));
    }

    #[test]
    fn test_named_section_values_joined() {
        let comment: DocComment = [
            DocTag::Named(NamedTag::new("author").with_text("ana")),
            DocTag::Named(NamedTag::new("author").with_text("ben")),
            DocTag::Named(NamedTag::new("deprecated")),
        ]
        .into_iter()
        .collect();
        let output = hover(&comment);
        assert!(output.contains("**Author:** ana, ben"));
        assert!(output.contains("**Deprecated**"));
    }

    #[test]
    fn test_overload_listed_as_code() {
        let signature = FuncSignature::new(
            vec![SigParam::new("n", Ty::named("number"))],
            Ty::named("string"),
        );
        let comment: DocComment = [
            DocTag::Overload(OverloadDef::new(signature)),
            DocTag::Overload(OverloadDef::unresolved()),
        ]
        .into_iter()
        .collect();
        let output = hover(&comment);
        assert!(output.contains("- `fun(n: number): string`"));
        assert_eq!(output.matches("- `fun").count(), 1);
    }

    #[test]
    fn test_unresolved_see_refs_skipped() {
        let comment: DocComment = [DocTag::See(SeeRef::unresolved())].into_iter().collect();
        let output = hover(&comment);
        assert!(!output.contains("**See:**"));
    }

    #[test]
    fn test_fields_listed() {
        let comment: DocComment = [DocTag::Field(
            FieldDef::new("count")
                .with_ty(Ty::named("integer"))
                .with_comment("how many"),
        )]
        .into_iter()
        .collect();
        let output = hover(&comment);
        assert!(output.contains("**Fields:**"));
        assert!(output.contains("- `count`: integer - how many"));
    }
}
