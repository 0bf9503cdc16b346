pub mod color;
pub mod commands;
pub mod paint;
pub mod surface;
