pub mod gallery;
pub mod potential;
pub mod spring;
