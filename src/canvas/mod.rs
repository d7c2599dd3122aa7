mod geometry;
pub(crate) mod guard;
pub(crate) mod view;
