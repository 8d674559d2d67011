pub mod chaining;
pub mod converter;
pub mod engine;
pub mod exceptions;
pub mod tables;
pub mod tokenizer;
pub mod types;
