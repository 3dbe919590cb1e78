pub mod ease;
pub mod interp;
pub mod spring;
pub mod tween;
pub mod velocity;
