pub(crate) mod radial;
