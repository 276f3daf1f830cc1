//! CLI command implementations.

pub(crate) mod bar_types;
pub(crate) mod sample;
