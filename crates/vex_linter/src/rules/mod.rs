pub(crate) use call_in_default_initializer::*;
pub(crate) use invalid_type_var_use::*;
pub(crate) use missing_parameter_type::*;
pub(crate) use missing_type_argument::*;
pub(crate) use unnecessary_cast::*;
pub(crate) use unnecessary_isinstance::*;

mod call_in_default_initializer;
mod invalid_type_var_use;
mod missing_parameter_type;
mod missing_type_argument;
mod unnecessary_cast;
mod unnecessary_isinstance;
