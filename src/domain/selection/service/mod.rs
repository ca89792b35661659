pub mod params_normalizer;
pub mod selection_service;
