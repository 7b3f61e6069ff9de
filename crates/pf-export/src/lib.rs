pub mod css;
pub mod html;

pub use css::{hex_to_rgba, inline_style};
pub use html::{generate_html, render_shape_node, render_tree};
