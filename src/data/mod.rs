pub mod dataset;
pub mod entity;
pub mod filter;
pub mod normalize;
