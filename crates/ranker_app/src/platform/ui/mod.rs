pub mod charts;
pub mod constants;
pub mod render;
