pub mod constants;
pub mod evaluator;
pub mod membership;
pub mod rules;
pub mod types;

pub use evaluator::*;
pub use membership::*;
pub use rules::*;
pub use types::*;
