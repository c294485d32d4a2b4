// src/flows/mod.rs
//! Follow-up actions on a completed analysis

pub mod career;
pub mod comparison;
pub mod enhancement;
pub mod market;

pub use career::CareerFlow;
pub use comparison::ComparisonFlow;
pub use enhancement::EnhancementFlow;
pub use market::MarketFlow;
