pub mod pointer;
pub mod scroll;
pub mod smooth_scroll;
