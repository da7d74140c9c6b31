/// Node tree and class name helpers shared by all components
mod classes;
mod node;

pub use classes::{class_names_with_mods, data_attributes};
pub use node::{Node, Tag};
