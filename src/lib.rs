pub mod converter;
pub mod error;
pub mod parser;
pub mod record;
pub mod writer;
