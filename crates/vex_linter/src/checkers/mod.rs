pub(crate) mod ast;
