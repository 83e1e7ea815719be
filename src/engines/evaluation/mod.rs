pub mod context;
pub mod expression;

pub use context::NumberContext;
pub use expression::Expression;
