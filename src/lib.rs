pub mod compare;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod error;
pub mod profile;
pub mod similarity;
pub mod tokenizer;
