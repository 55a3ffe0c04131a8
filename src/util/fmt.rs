use std::fmt::{self, Debug, Formatter};

/// Prints a string as-is when formatted with [`Debug`], e.g. to show an empty slot as `-`.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats with the provided closure, allowing a computed value to be used as a field of
/// [`Formatter::debug_struct`] without building an intermediate collection.
pub struct DebugWith<F: Fn(&mut Formatter<'_>) -> fmt::Result>(pub F);

impl<F: Fn(&mut Formatter<'_>) -> fmt::Result> Debug for DebugWith<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}
