pub mod annotation;
pub mod builder;
pub mod label;
pub mod model;
