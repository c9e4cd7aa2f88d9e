pub mod alignment;
pub mod sequence;
