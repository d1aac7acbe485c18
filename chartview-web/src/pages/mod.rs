pub mod bar;
pub mod line;
pub mod not_found;
pub mod pie;
pub mod scatter;
