//! Display models for `nlohmann::json` values and YAML document wrappers
//! read from a stopped debuggee.
//!
//! A debugger host registers this crate's lookup function and consults it
//! for every value it is about to display; recognized values come back as
//! structured display models, everything else declines to the host's own
//! native rendering.

/// Value decoding, display models, and printer dispatch.
pub mod inspect;
