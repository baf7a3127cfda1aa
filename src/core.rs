pub mod domain;
pub mod library;
pub mod mapper;
pub mod order;
pub mod repository;
