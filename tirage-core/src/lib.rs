pub mod error;
pub mod frequency;
pub mod generator;
pub mod models;
pub mod parser;
pub mod profile;
pub mod random;
pub mod sampler;
pub mod session;
pub mod synthesis;
pub mod weights;
