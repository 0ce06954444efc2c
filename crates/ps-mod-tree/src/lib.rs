//! ASCII folder-structure diagram for the first section of the summary.
mod render;

pub use render::render_tree;
