//! AST visitor trait and walk functions.

use crate::nodes::{
    DictItem, Expr, Keyword, Parameter, Parameters, Stmt, TypeParam, TypeParams,
};

/// A trait for AST visitors. Visits all nodes in the AST recursively in
/// evaluation order.
pub trait Visitor<'a> {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        walk_stmt(self, stmt);
    }
    fn visit_annotation(&mut self, expr: &'a Expr) {
        walk_annotation(self, expr);
    }
    fn visit_expr(&mut self, expr: &'a Expr) {
        walk_expr(self, expr);
    }
    fn visit_parameters(&mut self, parameters: &'a Parameters) {
        walk_parameters(self, parameters);
    }
    fn visit_parameter(&mut self, parameter: &'a Parameter) {
        walk_parameter(self, parameter);
    }
    fn visit_keyword(&mut self, keyword: &'a Keyword) {
        walk_keyword(self, keyword);
    }
    fn visit_type_params(&mut self, type_params: &'a TypeParams) {
        walk_type_params(self, type_params);
    }
    fn visit_type_param(&mut self, type_param: &'a TypeParam) {
        walk_type_param(self, type_param);
    }
    fn visit_body(&mut self, body: &'a [Stmt]) {
        walk_body(self, body);
    }
}

pub fn walk_body<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, body: &'a [Stmt]) {
    for stmt in body {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, stmt: &'a Stmt) {
    match stmt {
        Stmt::FunctionDef(stmt) => {
            if let Some(type_params) = &stmt.type_params {
                visitor.visit_type_params(type_params);
            }
            visitor.visit_parameters(&stmt.parameters);
            if let Some(returns) = &stmt.returns {
                visitor.visit_annotation(returns);
            }
            visitor.visit_body(&stmt.body);
        }
        Stmt::ClassDef(stmt) => {
            if let Some(type_params) = &stmt.type_params {
                visitor.visit_type_params(type_params);
            }
            for base in &stmt.bases {
                visitor.visit_expr(base);
            }
            visitor.visit_body(&stmt.body);
        }
        Stmt::Return(stmt) => {
            if let Some(value) = &stmt.value {
                visitor.visit_expr(value);
            }
        }
        Stmt::Assign(stmt) => {
            visitor.visit_expr(&stmt.value);
            for target in &stmt.targets {
                visitor.visit_expr(target);
            }
        }
        Stmt::AnnAssign(stmt) => {
            visitor.visit_annotation(&stmt.annotation);
            if let Some(value) = &stmt.value {
                visitor.visit_expr(value);
            }
            visitor.visit_expr(&stmt.target);
        }
        Stmt::If(stmt) => {
            visitor.visit_expr(&stmt.test);
            visitor.visit_body(&stmt.body);
            visitor.visit_body(&stmt.orelse);
        }
        Stmt::Expr(stmt) => visitor.visit_expr(&stmt.value),
        Stmt::Pass(_) => {}
    }
}

pub fn walk_annotation<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, expr: &'a Expr) {
    visitor.visit_expr(expr);
}

pub fn walk_expr<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, expr: &'a Expr) {
    match expr {
        Expr::Name(_) => {}
        Expr::Attribute(expr) => visitor.visit_expr(&expr.value),
        Expr::Call(expr) => {
            visitor.visit_expr(&expr.func);
            for arg in &expr.arguments.args {
                visitor.visit_expr(arg);
            }
            for keyword in &expr.arguments.keywords {
                visitor.visit_keyword(keyword);
            }
        }
        Expr::Subscript(expr) => {
            visitor.visit_expr(&expr.value);
            visitor.visit_expr(&expr.slice);
        }
        Expr::BinOp(expr) => {
            visitor.visit_expr(&expr.left);
            visitor.visit_expr(&expr.right);
        }
        Expr::UnaryOp(expr) => visitor.visit_expr(&expr.operand),
        Expr::Lambda(expr) => {
            visitor.visit_parameters(&expr.parameters);
            visitor.visit_expr(&expr.body);
        }
        Expr::Tuple(expr) => {
            for elt in &expr.elts {
                visitor.visit_expr(elt);
            }
        }
        Expr::List(expr) => {
            for elt in &expr.elts {
                visitor.visit_expr(elt);
            }
        }
        Expr::Set(expr) => {
            for elt in &expr.elts {
                visitor.visit_expr(elt);
            }
        }
        Expr::Dict(expr) => {
            for DictItem { key, value } in &expr.items {
                if let Some(key) = key {
                    visitor.visit_expr(key);
                }
                visitor.visit_expr(value);
            }
        }
        Expr::NumberLiteral(_)
        | Expr::StringLiteral(_)
        | Expr::BooleanLiteral(_)
        | Expr::NoneLiteral(_) => {}
    }
}

pub fn walk_parameters<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, parameters: &'a Parameters) {
    for parameter in parameters
        .posonlyargs
        .iter()
        .chain(&parameters.args)
        .chain(&parameters.kwonlyargs)
    {
        visitor.visit_parameter(&parameter.parameter);
        if let Some(default) = &parameter.default {
            visitor.visit_expr(default);
        }
    }
    if let Some(vararg) = &parameters.vararg {
        visitor.visit_parameter(vararg);
    }
    if let Some(kwarg) = &parameters.kwarg {
        visitor.visit_parameter(kwarg);
    }
}

pub fn walk_parameter<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, parameter: &'a Parameter) {
    if let Some(annotation) = &parameter.annotation {
        visitor.visit_annotation(annotation);
    }
}

pub fn walk_keyword<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, keyword: &'a Keyword) {
    visitor.visit_expr(&keyword.value);
}

pub fn walk_type_params<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, type_params: &'a TypeParams) {
    for type_param in &type_params.type_params {
        visitor.visit_type_param(type_param);
    }
}

pub fn walk_type_param<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, type_param: &'a TypeParam) {
    match type_param {
        TypeParam::TypeVar(type_param) => {
            if let Some(bound) = &type_param.bound {
                visitor.visit_annotation(bound);
            }
        }
    }
}
