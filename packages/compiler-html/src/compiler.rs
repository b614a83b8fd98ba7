use pagecraft_document::{DocumentError, NodeGraph};
use pagecraft_renderer::{RenderOptions, Renderer, VNode};
use thiserror::Error;

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Invalid document: {0}")]
    Document(#[from] DocumentError),
}

/// Options for HTML output
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

/// Options for a standalone page
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Page title; falls back to "Pagecraft Page" when empty
    pub title: String,
    /// Breakpoint selection for the render pass
    pub render: RenderOptions,
    /// HTML output options
    pub html: CompileOptions,
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a parsed document to a standalone HTML page.
pub fn compile_page(graph: &NodeGraph, options: &PageOptions) -> String {
    let body = Renderer::new().render_graph(graph, &options.render);
    let title = if options.title.is_empty() {
        "Pagecraft Page"
    } else {
        options.title.as_str()
    };

    let mut ctx = Context::new(options.html.clone());
    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(title)));
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    write_node(&body, &mut ctx);
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

/// Compile serialized document JSON to a standalone HTML page.
pub fn compile_page_from_json(text: &str, options: &PageOptions) -> Result<String, CompileError> {
    let graph = NodeGraph::from_json(text)?;
    Ok(compile_page(&graph, options))
}

/// Serialize a rendered subtree to HTML.
pub fn vnode_to_html(node: &VNode, options: &CompileOptions) -> String {
    let mut ctx = Context::new(options.clone());
    write_node(node, &mut ctx);
    ctx.get_output()
}

fn write_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Text { content } => {
            ctx.add(&escape_html(content));
        }
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => {
            // Opening tag
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&format!("<{}", tag));

            for (name, value) in attributes {
                ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
            }

            if !styles.is_empty() {
                let css: Vec<String> = styles
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect();
                ctx.add(&format!(" style=\"{}\"", escape_html(&css.join("; "))));
            }

            // Self-closing tags
            if children.is_empty() && is_self_closing(tag) {
                ctx.add(" />");
                if ctx.options.pretty {
                    ctx.add("\n");
                }
                return;
            }

            ctx.add(">");

            // Children
            if !children.is_empty() {
                if ctx.options.pretty && has_element_children(children) {
                    ctx.add("\n");
                }
                ctx.indent();

                for child in children {
                    write_node(child, ctx);
                }

                ctx.dedent();
                if ctx.options.pretty && has_element_children(children) {
                    ctx.add_indent();
                }
            }

            // Closing tag
            ctx.add(&format!("</{}>", tag));
            if ctx.options.pretty {
                ctx.add("\n");
            }
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn has_element_children(children: &[VNode]) -> bool {
    children
        .iter()
        .any(|child| !matches!(child, VNode::Text { .. }))
}
