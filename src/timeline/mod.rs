pub(crate) mod diagnostics;
pub(crate) mod opts;
pub(crate) mod position;
pub(crate) mod schedule;
