//! Text processing: tokenization, keyword extraction, cleaning, detection
//! and resume quality analysis

pub mod analysis;
pub mod detector;
pub mod patterns;
pub mod text_processor;
