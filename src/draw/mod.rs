pub(crate) mod line;
pub(crate) mod polygon;
pub(crate) mod rect;
pub(crate) mod triangle;
