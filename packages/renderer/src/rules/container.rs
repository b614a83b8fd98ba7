use super::{number_or, string_or};
use crate::registry::RenderRule;
use crate::renderer::RenderContext;
use crate::spacing::{css_dimension, inset_shorthand, px};
use crate::vdom::VNode;
use pagecraft_document::Node;

/// Layout container: a flex box with a color or image background,
/// rendering its children in order.
pub struct ContainerRule;

impl RenderRule for ContainerRule {
    fn render(&self, node: &Node, ctx: &RenderContext<'_>) -> VNode {
        let background = string_or(ctx.prop(node, "background"), "#ffffff");
        let background_image = string_or(ctx.prop(node, "backgroundImage"), "");
        let padding = inset_shorthand(ctx.prop(node, "padding"));
        let margin = inset_shorthand(ctx.prop(node, "margin"));
        let width = css_dimension(ctx.prop(node, "width"), "100%");
        let height = css_dimension(ctx.prop(node, "height"), "auto");
        let flex_direction = string_or(ctx.prop(node, "flexDirection"), "column");
        let align_items = string_or(ctx.prop(node, "alignItems"), "flex-start");
        let justify_content = string_or(ctx.prop(node, "justifyContent"), "flex-start");
        let border_radius = number_or(ctx.prop(node, "borderRadius"), 0.0);
        let shadow = string_or(ctx.prop(node, "shadow"), "none");

        let mut element = VNode::element("div")
            .with_style("display", "flex")
            .with_style("flex-direction", flex_direction)
            .with_style("align-items", align_items)
            .with_style("justify-content", justify_content)
            .with_style("padding", padding)
            .with_style("margin", margin)
            .with_style("width", width)
            .with_style("height", height)
            .with_style("border-radius", px(border_radius))
            .with_style("min-height", "20px");

        element = if background_image.trim().is_empty() {
            element.with_style("background", background)
        } else {
            element.with_style(
                "background",
                format!("url({}) center/cover no-repeat", background_image),
            )
        };

        if shadow != "none" {
            element = element.with_style("box-shadow", "0px 3px 6px rgba(0,0,0,0.1)");
        }

        element.with_children(ctx.render_children(&node.children))
    }
}
