pub(crate) mod bloom;
pub(crate) mod brightness;
pub(crate) mod convolve;
pub(crate) mod kernel;
