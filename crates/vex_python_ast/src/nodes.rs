use std::fmt;
use std::ops::Deref;

use text_size::{TextRange, TextSize};

/// A node that knows its source span.
pub trait Ranged {
    fn range(&self) -> TextRange;

    fn start(&self) -> TextSize {
        self.range().start()
    }

    fn end(&self) -> TextSize {
        self.range().end()
    }
}

impl Ranged for TextRange {
    fn range(&self) -> TextRange {
        *self
    }
}

impl<T: Ranged> Ranged for &T {
    fn range(&self) -> TextRange {
        T::range(self)
    }
}

macro_rules! impl_ranged {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Ranged for $ty {
                fn range(&self) -> TextRange {
                    self.range
                }
            }
        )+
    };
}

/// An identifier with its source span, e.g. a function or parameter name.
#[derive(Clone, Debug, PartialEq)]
pub struct Identifier {
    pub range: TextRange,
    pub id: String,
}

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// See also [stmt](https://docs.python.org/3/library/ast.html#ast.stmt)
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    FunctionDef(StmtFunctionDef),
    ClassDef(StmtClassDef),
    Return(StmtReturn),
    Assign(StmtAssign),
    AnnAssign(StmtAnnAssign),
    If(StmtIf),
    Expr(StmtExpr),
    Pass(StmtPass),
}

/// See also [FunctionDef](https://docs.python.org/3/library/ast.html#ast.FunctionDef)
#[derive(Clone, Debug, PartialEq)]
pub struct StmtFunctionDef {
    pub range: TextRange,
    pub name: Identifier,
    pub type_params: Option<Box<TypeParams>>,
    pub parameters: Box<Parameters>,
    pub returns: Option<Box<Expr>>,
    pub body: Vec<Stmt>,
}

/// See also [ClassDef](https://docs.python.org/3/library/ast.html#ast.ClassDef)
#[derive(Clone, Debug, PartialEq)]
pub struct StmtClassDef {
    pub range: TextRange,
    pub name: Identifier,
    pub type_params: Option<Box<TypeParams>>,
    pub bases: Vec<Expr>,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtReturn {
    pub range: TextRange,
    pub value: Option<Box<Expr>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtAssign {
    pub range: TextRange,
    pub targets: Vec<Expr>,
    pub value: Box<Expr>,
}

/// An assignment with a type annotation, e.g. `x: list[int] = []`.
#[derive(Clone, Debug, PartialEq)]
pub struct StmtAnnAssign {
    pub range: TextRange,
    pub target: Box<Expr>,
    pub annotation: Box<Expr>,
    pub value: Option<Box<Expr>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtIf {
    pub range: TextRange,
    pub test: Box<Expr>,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtExpr {
    pub range: TextRange,
    pub value: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtPass {
    pub range: TextRange,
}

impl Ranged for Stmt {
    fn range(&self) -> TextRange {
        match self {
            Stmt::FunctionDef(node) => node.range,
            Stmt::ClassDef(node) => node.range,
            Stmt::Return(node) => node.range,
            Stmt::Assign(node) => node.range,
            Stmt::AnnAssign(node) => node.range,
            Stmt::If(node) => node.range,
            Stmt::Expr(node) => node.range,
            Stmt::Pass(node) => node.range,
        }
    }
}

/// See also [expr](https://docs.python.org/3/library/ast.html#ast.expr)
#[derive(Clone, Debug, PartialEq, is_macro::Is)]
pub enum Expr {
    Name(ExprName),
    Attribute(ExprAttribute),
    Call(ExprCall),
    Subscript(ExprSubscript),
    BinOp(ExprBinOp),
    UnaryOp(ExprUnaryOp),
    Lambda(ExprLambda),
    Tuple(ExprTuple),
    List(ExprList),
    Set(ExprSet),
    Dict(ExprDict),
    NumberLiteral(ExprNumberLiteral),
    StringLiteral(ExprStringLiteral),
    BooleanLiteral(ExprBooleanLiteral),
    NoneLiteral(ExprNoneLiteral),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprName {
    pub range: TextRange,
    pub id: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprAttribute {
    pub range: TextRange,
    pub value: Box<Expr>,
    pub attr: Identifier,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprCall {
    pub range: TextRange,
    pub func: Box<Expr>,
    pub arguments: Arguments,
}

/// A subscript expression, e.g. the annotation `list[int]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprSubscript {
    pub range: TextRange,
    pub value: Box<Expr>,
    pub slice: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprBinOp {
    pub range: TextRange,
    pub left: Box<Expr>,
    pub op: Operator,
    pub right: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprUnaryOp {
    pub range: TextRange,
    pub op: UnaryOp,
    pub operand: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprLambda {
    pub range: TextRange,
    pub parameters: Box<Parameters>,
    pub body: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprTuple {
    pub range: TextRange,
    pub elts: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprList {
    pub range: TextRange,
    pub elts: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprSet {
    pub range: TextRange,
    pub elts: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprDict {
    pub range: TextRange,
    pub items: Vec<DictItem>,
}

/// A single `key: value` entry of a dictionary display. `key` is `None` for
/// a `**mapping` expansion.
#[derive(Clone, Debug, PartialEq)]
pub struct DictItem {
    pub key: Option<Expr>,
    pub value: Expr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprNumberLiteral {
    pub range: TextRange,
    pub value: Number,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprStringLiteral {
    pub range: TextRange,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprBooleanLiteral {
    pub range: TextRange,
    pub value: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprNoneLiteral {
    pub range: TextRange,
}

impl Ranged for Expr {
    fn range(&self) -> TextRange {
        match self {
            Expr::Name(node) => node.range,
            Expr::Attribute(node) => node.range,
            Expr::Call(node) => node.range,
            Expr::Subscript(node) => node.range,
            Expr::BinOp(node) => node.range,
            Expr::UnaryOp(node) => node.range,
            Expr::Lambda(node) => node.range,
            Expr::Tuple(node) => node.range,
            Expr::List(node) => node.range,
            Expr::Set(node) => node.range,
            Expr::Dict(node) => node.range,
            Expr::NumberLiteral(node) => node.range,
            Expr::StringLiteral(node) => node.range,
            Expr::BooleanLiteral(node) => node.range,
            Expr::NoneLiteral(node) => node.range,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    /// The PEP 604 union operator when it appears in an annotation.
    BitOr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Invert,
    Not,
    UAdd,
    USub,
}

/// See also [arguments](https://docs.python.org/3/library/ast.html#ast.arguments)
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Parameters {
    pub range: TextRange,
    pub posonlyargs: Vec<ParameterWithDefault>,
    pub args: Vec<ParameterWithDefault>,
    pub vararg: Option<Box<Parameter>>,
    pub kwonlyargs: Vec<ParameterWithDefault>,
    pub kwarg: Option<Box<Parameter>>,
}

impl Parameters {
    /// Returns an iterator over all non-variadic parameters in declaration
    /// order (positional-only, then positional-or-keyword, then
    /// keyword-only). `*args` and `**kwargs` are excluded.
    pub fn iter_non_variadic_params(&self) -> impl Iterator<Item = &ParameterWithDefault> {
        self.posonlyargs
            .iter()
            .chain(&self.args)
            .chain(&self.kwonlyargs)
    }
}

/// A parameter together with its (optional) default value expression.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterWithDefault {
    pub range: TextRange,
    pub parameter: Parameter,
    pub default: Option<Box<Expr>>,
}

/// See also [arg](https://docs.python.org/3/library/ast.html#ast.arg)
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub range: TextRange,
    pub name: Identifier,
    pub annotation: Option<Box<Expr>>,
}

impl Parameter {
    pub fn annotation(&self) -> Option<&Expr> {
        self.annotation.as_deref()
    }
}

/// The arguments of a call expression.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Arguments {
    pub range: TextRange,
    pub args: Vec<Expr>,
    pub keywords: Vec<Keyword>,
}

/// See also [keyword](https://docs.python.org/3/library/ast.html#ast.keyword)
#[derive(Clone, Debug, PartialEq)]
pub struct Keyword {
    pub range: TextRange,
    pub arg: Option<Identifier>,
    pub value: Expr,
}

/// The PEP 695 type parameter list of a generic function or class.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeParams {
    pub range: TextRange,
    pub type_params: Vec<TypeParam>,
}

#[derive(Clone, Debug, PartialEq, is_macro::Is)]
pub enum TypeParam {
    TypeVar(TypeParamTypeVar),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeParamTypeVar {
    pub range: TextRange,
    pub name: Identifier,
    pub bound: Option<Box<Expr>>,
}

impl Ranged for TypeParam {
    fn range(&self) -> TextRange {
        match self {
            TypeParam::TypeVar(node) => node.range,
        }
    }
}

impl_ranged!(
    Identifier,
    StmtFunctionDef,
    StmtClassDef,
    StmtReturn,
    StmtAssign,
    StmtAnnAssign,
    StmtIf,
    StmtExpr,
    StmtPass,
    ExprName,
    ExprAttribute,
    ExprCall,
    ExprSubscript,
    ExprBinOp,
    ExprUnaryOp,
    ExprLambda,
    ExprTuple,
    ExprList,
    ExprSet,
    ExprDict,
    ExprNumberLiteral,
    ExprStringLiteral,
    ExprBooleanLiteral,
    ExprNoneLiteral,
    Parameters,
    ParameterWithDefault,
    Parameter,
    Arguments,
    Keyword,
    TypeParams,
    TypeParamTypeVar,
);
