use super::{number_or, scalar_or, string_or};
use crate::registry::RenderRule;
use crate::renderer::RenderContext;
use crate::spacing::{css_dimension, inset_shorthand, px};
use crate::vdom::VNode;
use pagecraft_document::Node;

/// Text block, optionally overlaid on a cover-fit background image at
/// one of nine anchor positions.
pub struct TextRule;

/// align-items / justify-content pair for a text anchor. `"center"` and
/// anything unrecognized both center.
fn anchor_styles(position: &str) -> (&'static str, &'static str) {
    match position {
        "top-left" => ("flex-start", "flex-start"),
        "top-center" => ("flex-start", "center"),
        "top-right" => ("flex-start", "flex-end"),
        "center-left" => ("center", "flex-start"),
        "center-right" => ("center", "flex-end"),
        "bottom-left" => ("flex-end", "flex-start"),
        "bottom-center" => ("flex-end", "center"),
        "bottom-right" => ("flex-end", "flex-end"),
        _ => ("center", "center"),
    }
}

impl RenderRule for TextRule {
    fn render(&self, node: &Node, ctx: &RenderContext<'_>) -> VNode {
        let text = string_or(ctx.prop(node, "text"), "");
        let font_size = number_or(ctx.prop(node, "fontSize"), 16.0);
        let text_align = string_or(ctx.prop(node, "textAlign"), "left");
        let color = string_or(ctx.prop(node, "color"), "#333333");
        let font_weight = scalar_or(ctx.prop(node, "fontWeight"), "normal");
        let margin = inset_shorthand(ctx.prop(node, "margin"));
        let padding = inset_shorthand(ctx.prop(node, "padding"));
        let background_image = string_or(ctx.prop(node, "backgroundImage"), "");

        let element = VNode::element("div")
            .with_style("font-size", px(font_size))
            .with_style("text-align", text_align)
            .with_style("color", color)
            .with_style("font-weight", font_weight)
            .with_style("margin", margin);

        if background_image.trim().is_empty() {
            return element
                .with_style("padding", padding)
                .with_child(VNode::text(text));
        }

        // Background-image mode: the block becomes a cover-fit flex box
        // and the text sits in an overlay pill anchored by textPosition.
        let width = css_dimension(ctx.prop(node, "width"), "auto");
        let height = css_dimension(ctx.prop(node, "height"), "auto");
        let position = string_or(ctx.prop(node, "textPosition"), "center");
        let (align_items, justify_content) = anchor_styles(position);

        let mut element = element
            .with_style("background-image", format!("url({})", background_image))
            .with_style("background-size", "cover")
            .with_style("background-position", "center")
            .with_style("background-repeat", "no-repeat")
            .with_style("width", width)
            .with_style("height", height.clone())
            .with_style("display", "flex")
            .with_style("align-items", align_items)
            .with_style("justify-content", justify_content)
            .with_style("padding", "16px");

        if height == "auto" {
            element = element.with_style("min-height", "100px");
        }

        let overlay = VNode::element("span")
            .with_style("background-color", "rgba(0,0,0,0.4)")
            .with_style("padding", "8px 16px")
            .with_style("border-radius", "4px")
            .with_style("text-align", text_align)
            .with_child(VNode::text(text));

        element.with_child(overlay)
    }
}
