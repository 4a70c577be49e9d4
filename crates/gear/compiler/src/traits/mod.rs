//! Per-trait compilers.
//!
//! Each function takes the authored descriptor plus whatever context it
//! needs (resolver, host oracle, configuration) and produces one runtime
//! module, or the first error it hits. Compilers never see the catalog
//! being built and never mutate anything outside their return value; the
//! one exception is the fire accumulator in [`ignition`], which two traits
//! share by contract.

pub(crate) mod clothing;
pub(crate) mod cooking;
pub(crate) mod food;
pub(crate) mod harvest;
pub(crate) mod ignition;
pub(crate) mod rifle;
pub(crate) mod utility;
