pub(crate) mod escape;
pub(crate) mod utf8;
