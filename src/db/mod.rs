pub mod employee;
pub mod postgres_service;
pub mod user;
