pub mod error;
pub mod grading;
pub mod input;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod roster;
pub mod stats;
pub mod tokenizer;
