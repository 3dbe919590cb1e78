//! Loading overlay: percentage counter, curtain shape and exit choreography.

pub mod counter;
pub mod curtain;
pub mod view;
