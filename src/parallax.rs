pub(crate) mod engine;
pub(crate) mod profile;
pub(crate) mod schedule;
