use super::{number_or, string_or};
use crate::registry::RenderRule;
use crate::renderer::RenderContext;
use crate::spacing::{css_dimension, inset_shorthand, px};
use crate::vdom::VNode;
use pagecraft_document::Node;

/// Shown when a document has no image URL yet.
const PLACEHOLDER_SRC: &str = "https://via.placeholder.com/400x300?text=Image";

/// Image block: a sized inline wrapper around the img element.
pub struct ImageRule;

impl RenderRule for ImageRule {
    fn render(&self, node: &Node, ctx: &RenderContext<'_>) -> VNode {
        let src = string_or(ctx.prop(node, "src"), "");
        let src = if src.trim().is_empty() {
            PLACEHOLDER_SRC
        } else {
            src
        };
        let width = css_dimension(ctx.prop(node, "width"), "100%");
        let height = css_dimension(ctx.prop(node, "height"), "auto");
        let margin = inset_shorthand(ctx.prop(node, "margin"));
        let padding = inset_shorthand(ctx.prop(node, "padding"));
        let border_radius = number_or(ctx.prop(node, "borderRadius"), 0.0);
        let object_fit = string_or(ctx.prop(node, "objectFit"), "cover");

        let img = VNode::element("img")
            .with_attr("src", src)
            .with_attr("alt", "")
            .with_style("width", "100%")
            .with_style("height", height)
            .with_style("object-fit", object_fit)
            .with_style("border-radius", px(border_radius));

        VNode::element("div")
            .with_style("display", "inline-block")
            .with_style("margin", margin)
            .with_style("padding", padding)
            .with_style("line-height", "0")
            .with_style("width", width)
            .with_child(img)
    }
}
