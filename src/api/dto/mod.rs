pub mod query_params_dto;
