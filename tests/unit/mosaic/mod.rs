pub mod library;
pub mod pipeline;
