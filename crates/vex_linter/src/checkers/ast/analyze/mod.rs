pub(crate) use annotation::annotation;
pub(crate) use expression::expression;
pub(crate) use statement::statement;

mod annotation;
mod expression;
mod statement;
