pub mod navigator;
pub mod story;
