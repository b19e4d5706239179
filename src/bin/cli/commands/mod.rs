pub mod check;
pub mod sample;
pub mod show;
