pub mod filters;
pub mod python;
pub mod resolver;
pub mod treesitter;
pub mod walker;
