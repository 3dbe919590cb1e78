//! Host-environment primitives the motion core consumes.

pub mod timer;
