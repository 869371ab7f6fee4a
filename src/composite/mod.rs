pub(crate) mod kaleidoscope;
pub(crate) mod mirror;
