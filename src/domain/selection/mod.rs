pub mod constants;
pub mod model;
pub mod service;
