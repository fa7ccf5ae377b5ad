#![allow(dead_code)]

//! A tiny builder for synthetic modules.
//!
//! There is no parser in the workspace, so tests construct the AST directly.
//! The builder hands out non-overlapping, monotonically increasing spans, so
//! nodes built in source order get source-ordered ranges and every node has
//! a distinct key for the fact tables.

use text_size::{TextRange, TextSize};

use vex_python_ast::*;

#[derive(Default)]
pub struct SourceBuilder {
    cursor: u32,
}

impl SourceBuilder {
    /// A fresh span of `len` bytes, followed by one byte of padding.
    pub fn span(&mut self, len: u32) -> TextRange {
        let start = self.cursor;
        self.cursor += len + 1;
        TextRange::at(TextSize::from(start), TextSize::from(len))
    }

    /// A span from `start` to the current cursor, for a node enclosing
    /// already-built children.
    fn enclosing(&mut self, start: TextSize) -> TextRange {
        let end = TextSize::from(self.cursor);
        self.cursor += 1;
        TextRange::new(start, end)
    }

    pub fn ident(&mut self, id: &str) -> Identifier {
        Identifier {
            range: self.span(id.len() as u32),
            id: id.to_string(),
        }
    }

    pub fn name(&mut self, id: &str) -> Expr {
        Expr::Name(ExprName {
            range: self.span(id.len() as u32),
            id: id.to_string(),
        })
    }

    pub fn int(&mut self, value: i64) -> Expr {
        Expr::NumberLiteral(ExprNumberLiteral {
            range: self.span(1),
            value: Number::Int(value),
        })
    }

    pub fn string(&mut self, value: &str) -> Expr {
        Expr::StringLiteral(ExprStringLiteral {
            range: self.span(value.len() as u32 + 2),
            value: value.to_string(),
        })
    }

    pub fn none(&mut self) -> Expr {
        Expr::NoneLiteral(ExprNoneLiteral {
            range: self.span(4),
        })
    }

    pub fn call(&mut self, func: Expr, args: Vec<Expr>) -> ExprCall {
        let range = self.enclosing(func.start());
        ExprCall {
            range,
            func: Box::new(func),
            arguments: Arguments {
                range,
                args,
                keywords: Vec::new(),
            },
        }
    }

    pub fn call_expr(&mut self, func: Expr, args: Vec<Expr>) -> Expr {
        Expr::Call(self.call(func, args))
    }

    pub fn attribute(&mut self, value: Expr, attr: &str) -> Expr {
        let attr = self.ident(attr);
        Expr::Attribute(ExprAttribute {
            range: self.enclosing(value.start()),
            value: Box::new(value),
            attr,
        })
    }

    pub fn subscript(&mut self, value: Expr, slice: Expr) -> Expr {
        Expr::Subscript(ExprSubscript {
            range: self.enclosing(value.start()),
            value: Box::new(value),
            slice: Box::new(slice),
        })
    }

    pub fn tuple(&mut self, elts: Vec<Expr>) -> Expr {
        let start = match elts.first() {
            Some(first) => first.start(),
            Option::None => self.span(2).start(),
        };
        Expr::Tuple(ExprTuple {
            range: self.enclosing(start),
            elts,
        })
    }

    pub fn list(&mut self, elts: Vec<Expr>) -> Expr {
        let start = match elts.first() {
            Some(first) => first.start(),
            Option::None => self.span(2).start(),
        };
        Expr::List(ExprList {
            range: self.enclosing(start),
            elts,
        })
    }

    pub fn lambda(&mut self, parameters: Parameters, body: Expr) -> Expr {
        let start = parameters
            .iter_non_variadic_params()
            .next()
            .map_or_else(|| body.start(), |parameter| parameter.parameter.start());
        Expr::Lambda(ExprLambda {
            range: self.enclosing(start),
            parameters: Box::new(parameters),
            body: Box::new(body),
        })
    }

    pub fn param(
        &mut self,
        name: &str,
        annotation: Option<Expr>,
        default: Option<Expr>,
    ) -> ParameterWithDefault {
        let name = self.ident(name);
        let range = name.range;
        ParameterWithDefault {
            range,
            parameter: Parameter {
                range,
                name,
                annotation: annotation.map(Box::new),
            },
            default: default.map(Box::new),
        }
    }

    pub fn parameters(&mut self, args: Vec<ParameterWithDefault>) -> Parameters {
        Parameters {
            range: self.span(0),
            args,
            ..Parameters::default()
        }
    }

    pub fn type_var(&mut self, name: &str) -> TypeParam {
        let name = self.ident(name);
        TypeParam::TypeVar(TypeParamTypeVar {
            range: name.range,
            name,
            bound: None,
        })
    }

    pub fn type_params(&mut self, type_params: Vec<TypeParam>) -> TypeParams {
        let start = match type_params.first() {
            Some(first) => first.start(),
            Option::None => self.span(0).start(),
        };
        TypeParams {
            range: self.enclosing(start),
            type_params,
        }
    }

    pub fn function_def(
        &mut self,
        name: Identifier,
        type_params: Option<TypeParams>,
        parameters: Parameters,
        returns: Option<Expr>,
        body: Vec<Stmt>,
    ) -> Stmt {
        let start = name.start();
        let body = if body.is_empty() {
            vec![self.pass()]
        } else {
            body
        };
        Stmt::FunctionDef(StmtFunctionDef {
            range: self.enclosing(start),
            name,
            type_params: type_params.map(Box::new),
            parameters: Box::new(parameters),
            returns: returns.map(Box::new),
            body,
        })
    }

    pub fn pass(&mut self) -> Stmt {
        Stmt::Pass(StmtPass {
            range: self.span(4),
        })
    }

    pub fn stmt_expr(&mut self, value: Expr) -> Stmt {
        let range = self.enclosing(value.start());
        Stmt::Expr(StmtExpr {
            range,
            value: Box::new(value),
        })
    }
}
