pub(crate) mod radial;
pub(crate) mod sample;
