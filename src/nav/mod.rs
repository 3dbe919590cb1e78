pub mod bar;
pub mod visibility;
