pub mod blend;
pub(crate) mod pixel;
