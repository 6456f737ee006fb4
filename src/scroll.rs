pub(crate) mod telemetry;
