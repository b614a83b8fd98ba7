use crate::{compile_page, compile_page_from_json, vnode_to_html, CompileOptions, PageOptions};
use pagecraft_document::{Breakpoint, NodeGraph};
use pagecraft_renderer::{RenderOptions, VNode};
use serde_json::json;

#[test]
fn test_compile_minimal_page() {
    let graph = NodeGraph::from_value(json!({
        "ROOT": {
            "type": {"resolvedName": "Container"},
            "props": {"background": "#ffffff"},
            "nodes": []
        }
    }))
    .unwrap();

    let html = compile_page(&graph, &PageOptions::default());

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<title>Pagecraft Page</title>"));
    assert!(html.contains("background: #ffffff"));
    assert!(html.contains("</html>"));
}

#[test]
fn test_compile_page_at_breakpoint() {
    let text = json!({
        "ROOT": {"type": "Container", "props": {}, "nodes": ["t1"]},
        "t1": {
            "type": "Text",
            "props": {"text": "Hi", "fontSize": {"mobile": 14, "desktop": 24}},
            "nodes": []
        }
    })
    .to_string();

    let mobile = compile_page_from_json(
        &text,
        &PageOptions {
            render: RenderOptions::at(Breakpoint::Mobile),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(mobile.contains("font-size: 14px"));
    assert!(mobile.contains("Hi"));

    let desktop = compile_page_from_json(
        &text,
        &PageOptions {
            render: RenderOptions::at(Breakpoint::Desktop),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(desktop.contains("font-size: 24px"));
}

#[test]
fn test_compile_rejects_missing_root() {
    let result = compile_page_from_json(
        r#"{"a": {"type": "Text", "props": {}, "nodes": []}}"#,
        &PageOptions::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_button_markup() {
    let node = VNode::element("button")
        .with_style("color", "#ffffff")
        .with_child(VNode::text("Click me"));

    let html = vnode_to_html(&node, &CompileOptions::default());

    assert!(html.contains("<button"));
    assert!(html.contains("style=\"color: #ffffff\""));
    assert!(html.contains("Click me"));
    assert!(html.contains("</button>"));
}

#[test]
fn test_text_content_is_escaped() {
    let node = VNode::element("div").with_child(VNode::text("a < b & \"c\""));
    let html = vnode_to_html(&node, &CompileOptions::default());

    assert!(html.contains("a &lt; b &amp; &quot;c&quot;"));
    assert!(!html.contains("a < b"));
}

#[test]
fn test_attribute_values_are_escaped() {
    let node = VNode::element("img").with_attr("src", "https://example.com/a.png?x=1&y=2");
    let html = vnode_to_html(&node, &CompileOptions::default());

    assert!(html.contains("src=\"https://example.com/a.png?x=1&amp;y=2\""));
}

#[test]
fn test_img_is_self_closing() {
    let node = VNode::element("img").with_attr("src", "a.png");
    let html = vnode_to_html(&node, &CompileOptions::default());
    assert!(html.trim_end().ends_with("/>"));
}

#[test]
fn test_compact_output_has_no_newlines() {
    let node = VNode::element("div")
        .with_child(VNode::element("span").with_child(VNode::text("x")));
    let html = vnode_to_html(
        &node,
        &CompileOptions {
            pretty: false,
            ..Default::default()
        },
    );

    assert!(!html.contains('\n'));
    assert_eq!(html, "<div><span>x</span></div>");
}

#[test]
fn test_nested_elements_are_indented() {
    let node = VNode::element("div")
        .with_child(VNode::element("span").with_child(VNode::text("x")));
    let html = vnode_to_html(&node, &CompileOptions::default());

    assert!(html.contains("<div>\n"));
    assert!(html.contains("  <span>"));
}
