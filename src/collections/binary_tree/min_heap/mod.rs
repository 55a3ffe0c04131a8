mod min_heap;
mod tests;

pub use min_heap::*;
