pub mod handler;
pub mod lookup;
pub mod models;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;
