pub mod domain;
pub mod dto;
pub mod factory;
pub mod mapper;
pub mod repository;
