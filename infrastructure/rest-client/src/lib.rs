pub mod client;
pub mod dto;
pub mod favorite_repository;
pub mod food_repository;
pub mod order_repository;

#[cfg(test)]
mod test_server;
