pub mod client;
pub mod dto;
pub mod order_service;
