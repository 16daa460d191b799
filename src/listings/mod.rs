pub mod criteria;
pub mod handler;
pub mod models;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;
