use super::{number_or, string_or};
use crate::registry::RenderRule;
use crate::renderer::RenderContext;
use crate::spacing::{inset_shorthand, px};
use crate::vdom::VNode;
use pagecraft_document::Node;

/// Button block: fixed typography, configurable colors and box.
pub struct ButtonRule;

impl RenderRule for ButtonRule {
    fn render(&self, node: &Node, ctx: &RenderContext<'_>) -> VNode {
        let text = string_or(ctx.prop(node, "text"), "Button");
        let color = string_or(ctx.prop(node, "color"), "#ffffff");
        let background_color = string_or(ctx.prop(node, "backgroundColor"), "#00CBFF");
        let margin = inset_shorthand(ctx.prop(node, "margin"));
        let padding = ctx
            .prop(node, "padding")
            .map(|value| inset_shorthand(Some(value)))
            .unwrap_or_else(|| "10px 20px 10px 20px".to_string());
        let border_radius = number_or(ctx.prop(node, "borderRadius"), 5.0);

        VNode::element("button")
            .with_style("color", color)
            .with_style("background-color", background_color)
            .with_style("padding", padding)
            .with_style("margin", margin)
            .with_style("border-radius", px(border_radius))
            .with_style("cursor", "pointer")
            .with_style("font-size", "14px")
            .with_style("font-weight", "500")
            .with_style("border", "none")
            .with_style("display", "inline-block")
            .with_child(VNode::text(text))
    }
}
