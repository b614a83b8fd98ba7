use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagecraft_document::{Breakpoint, NodeGraph};
use pagecraft_renderer::{RenderOptions, Renderer};
use serde_json::json;

fn landing_page() -> NodeGraph {
    let mut doc = serde_json::Map::new();
    doc.insert(
        "ROOT".to_string(),
        json!({
            "type": {"resolvedName": "Container"},
            "props": {
                "background": "#ffffff",
                "padding": {"mobile": [16, 16, 16, 16], "desktop": [40, 80, 40, 80]}
            },
            "nodes": (0..20).map(|i| format!("section{}", i)).collect::<Vec<_>>()
        }),
    );

    for i in 0..20 {
        doc.insert(
            format!("section{}", i),
            json!({
                "type": "Container",
                "props": {"flexDirection": "row", "padding": [20, 20, 20, 20]},
                "nodes": [format!("text{}", i), format!("button{}", i), format!("image{}", i)]
            }),
        );
        doc.insert(
            format!("text{}", i),
            json!({
                "type": "Text",
                "props": {
                    "text": "Section heading",
                    "fontSize": {"mobile": 18, "tablet": 22, "desktop": 28}
                },
                "nodes": []
            }),
        );
        doc.insert(
            format!("button{}", i),
            json!({"type": "Button", "props": {"text": "Learn more"}, "nodes": []}),
        );
        doc.insert(
            format!("image{}", i),
            json!({
                "type": {"resolvedName": "UserImage"},
                "props": {"src": "https://example.com/photo.jpg", "width": 320},
                "nodes": []
            }),
        );
    }

    NodeGraph::from_value(serde_json::Value::Object(doc)).unwrap()
}

fn render_landing_page(c: &mut Criterion) {
    let graph = landing_page();
    let renderer = Renderer::new();

    for breakpoint in Breakpoint::ORDER {
        c.bench_function(&format!("render_landing_page_{}", breakpoint), |b| {
            let options = RenderOptions::at(breakpoint);
            b.iter(|| renderer.render_graph(black_box(&graph), &options))
        });
    }
}

fn render_from_json_text(c: &mut Criterion) {
    let text = landing_page().to_json().unwrap();
    let renderer = Renderer::new();

    c.bench_function("render_from_json_text", |b| {
        let options = RenderOptions::at(Breakpoint::Desktop);
        b.iter(|| renderer.render_json(black_box(&text), &options))
    });
}

criterion_group!(benches, render_landing_page, render_from_json_text);
criterion_main!(benches);
