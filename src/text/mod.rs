pub(crate) mod citation;
pub(crate) mod shaping;
pub(crate) mod wrap;
