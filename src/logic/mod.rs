pub mod advisor;
pub mod calculations;
pub mod crops;
pub mod fertilizer;
pub mod market;
pub mod pest;
pub mod rules;
pub mod soil;
pub mod translations;
pub mod weather;

pub use advisor::Advisor;
pub use rules::SoilRulesEngine;
