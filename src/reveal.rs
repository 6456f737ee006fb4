pub(crate) mod engine;
pub(crate) mod motion;
pub(crate) mod observer;
pub(crate) mod state;
