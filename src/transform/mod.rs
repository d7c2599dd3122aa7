pub(crate) mod config;
pub(crate) mod copy;
pub(crate) mod rotate;
