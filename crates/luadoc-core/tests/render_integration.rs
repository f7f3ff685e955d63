//! Integration tests for comment rendering (HTML popup and markdown hover)

use luadoc_core::link::SeeTarget;
use luadoc_core::tags::{
    ClassDef, DocComment, DocTag, FieldDef, NamedTag, OverloadDef, ParamDef, ReturnDef, SeeRef,
};
use luadoc_core::ty::{FuncSignature, SigParam};
use luadoc_core::{render_hover, CommonMark, DefaultTypeRenderer, HtmlRenderer, Ty};

/// A comment exercising every tag kind the renderer knows
fn emitter_comment() -> DocComment {
    let on_signature = FuncSignature::new(
        vec![
            SigParam::new("event", Ty::named("string")),
            SigParam::new("handler", Ty::Unknown),
        ],
        Ty::named("boolean"),
    );
    let see_target = SeeTarget::parse("Emitter#off").unwrap();

    [
        DocTag::Class(
            ClassDef::new("Emitter")
                .with_superclass("Base")
                .with_comment("Dispatches named events to handlers."),
        ),
        DocTag::Text("Handlers run in registration order.".to_string()),
        DocTag::Named(NamedTag::new("version").with_text("1.0")),
        DocTag::Named(NamedTag::new("since").with_text("0.2")),
        DocTag::Field(
            FieldDef::new("count")
                .with_ty(Ty::named("integer"))
                .with_comment("registered handler count"),
        ),
        DocTag::Param(
            ParamDef::named("event")
                .with_ty(Ty::named("string"))
                .with_comment("event name"),
        ),
        DocTag::Param(ParamDef::unnamed().with_comment("dropped")),
        DocTag::Return(
            ReturnDef::new(vec![Ty::named("boolean"), Ty::named("string")])
                .with_comment("ok flag and message"),
        ),
        DocTag::Overload(OverloadDef::new(on_signature)),
        DocTag::See(
            SeeRef::new(Ty::named(see_target.class_name.clone()))
                .with_member(see_target.member.clone().unwrap()),
        ),
    ]
    .into_iter()
    .collect()
}

fn render_html(comment: &DocComment) -> String {
    let types = DefaultTypeRenderer;
    let converter = CommonMark::new();
    let renderer = HtmlRenderer::new(&types, &converter);
    let mut output = String::new();
    renderer.render_comment(&mut output, Some(comment));
    output
}

#[test]
fn test_full_comment_html() {
    let output = render_html(&emitter_comment());

    // Content block: class signature, then free text
    assert!(output.starts_with(
        "<div class='content'><pre>class <b>Emitter</b> : \
         <a href=\"element://Base\">Base</a></pre> - Dispatches named events to handlers."
    ));
    assert!(output.contains("<p>Handlers run in registration order.</p>"));

    // Sections table with the structured tags
    assert!(output.contains("<p>Version</p>"));
    assert!(output.contains("<p>1.0</p>"));
    assert!(output.contains("<p>count: integer - registered handler count</p>"));
    assert!(output.contains("<p><code>event</code> : string - event name</p>"));
    assert!(output.contains("<p>(boolean string ) - ok flag and message</p>"));
    assert!(output.contains("<p>fun(event: string, handler: any): boolean</p>"));
    assert!(output.contains("<p>Emitter#off</p>"));
    assert!(output.ends_with("</table>"));
}

#[test]
fn test_section_order_independent_of_source_order() {
    let output = render_html(&emitter_comment());
    let version = output.find("<p>Version</p>").unwrap();
    let since = output.find("<p>Since</p>").unwrap();
    let fields = output.find("<p>Fields</p>").unwrap();
    let params = output.find("<p>Parameters</p>").unwrap();
    let returns = output.find("<p>Returns</p>").unwrap();
    let overloads = output.find("<p>Overloads</p>").unwrap();
    let see = output.find("<p>See</p>").unwrap();

    assert!(version < since);
    assert!(since < fields);
    assert!(fields < params);
    assert!(params < returns);
    assert!(returns < overloads);
    assert!(overloads < see);
}

#[test]
fn test_unnamed_param_contributes_empty_paragraph() {
    let output = render_html(&emitter_comment());
    // Two param tags, one with an unresolvable name: two paragraphs, one empty
    let params_row_at = output.find("<p>Parameters</p>").unwrap();
    let row = &output[params_row_at..output.find("<p>Returns</p>").unwrap()];
    assert!(row.contains("<p></p>"));
    assert!(!row.contains("dropped"));
}

#[test]
fn test_render_twice_is_byte_identical() {
    let comment = emitter_comment();
    assert_eq!(render_html(&comment), render_html(&comment));
}

#[test]
fn test_full_comment_hover() {
    let output = render_hover(&emitter_comment(), &DefaultTypeRenderer);

    assert!(output.starts_with("```lua\nclass Emitter : Base\n```"));
    assert!(output.contains("Handlers run in registration order."));
    assert!(output.contains("**Version:** 1.0"));
    assert!(output.contains("**Since:** 0.2"));
    assert!(output.contains("- `count`: integer - registered handler count"));
    assert!(output.contains("- `event`: string - event name"));
    assert!(!output.contains("dropped"));
    assert!(output.contains("**Returns:** (boolean string ) - ok flag and message"));
    assert!(output.contains("- `fun(event: string, handler: any): boolean`"));
    assert!(output.contains("- Emitter#off"));
}

#[test]
fn test_markdown_in_descriptions_is_converted() {
    let comment: DocComment = [DocTag::Param(
        ParamDef::named("pattern")
            .with_ty(Ty::named("string"))
            .with_comment("a `%w+` pattern"),
    )]
    .into_iter()
    .collect();
    let output = render_html(&comment);
    assert!(output.contains("<code>pattern</code> : string - a <code>%w+</code> pattern"));
}

#[test]
fn test_custom_link_scheme() {
    use luadoc_core::HtmlOptions;

    let types = DefaultTypeRenderer;
    let converter = CommonMark::new();
    let renderer = HtmlRenderer::new(&types, &converter).with_options(HtmlOptions {
        link_scheme: "lua://".to_string(),
    });
    let mut output = String::new();
    renderer.render_class_def(&mut output, &ClassDef::new("Child").with_superclass("Parent"));
    assert!(output.contains("<a href=\"lua://Parent\">Parent</a>"));
}
