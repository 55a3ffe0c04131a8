mod binary_search_tree;
mod tests;

pub use binary_search_tree::*;
