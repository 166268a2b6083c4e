// SPDX: CC0-1.0

use crate::{lex::SubStr, stdlib, Number};
use core::fmt;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorTyp {
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

impl OperatorTyp {
    pub const fn precedence(&self) -> i8 {
        match self {
            Self::Add => 2,
            Self::Sub => 2,
            Self::Mul => 3,
            Self::Div => 3,
            Self::Neg => 4,
            Self::Exp => 5,
        }
    }

    pub const fn associativity(&self) -> Associativity {
        use Associativity::{Left, Right};
        match self {
            // prefix, so it never pops an operator to its left
            Self::Neg => Right,
            Self::Add => Left,
            Self::Sub => Left,
            Self::Mul => Left,
            Self::Div => Left,
            Self::Exp => Right,
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Neg | Self::Sub => "-",
            Self::Add => "+",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
        }
    }

    pub const fn fun(&self) -> Fun {
        match self {
            Self::Neg => Fun::new("neg", 1, stdlib::neg),
            Self::Add => Fun::new("add", 2, stdlib::add),
            Self::Sub => Fun::new("sub", 2, stdlib::sub),
            Self::Mul => Fun::new("mul", 2, stdlib::mul),
            Self::Div => Fun::new("div", 2, stdlib::div),
            Self::Exp => Fun::new("exp", 2, stdlib::pow),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Fun {
    pub name: &'static str,
    pub arity: usize,
    pub fun: fn(&[Number]) -> Number,
}

impl Fun {
    pub const fn new(name: &'static str, arity: usize, fun: fn(&[Number]) -> Number) -> Self {
        Self { name, arity, fun }
    }
}

impl PartialEq for Fun {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arity == other.arity
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ident {
    /// The free variable.
    Var,
    Const(Number),
    Fun(Fun),
}

impl Ident {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Var => "variable",
            Self::Const(_) => "constant",
            Self::Fun(_) => "function",
        }
    }
}

pub type Idents = HashMap<&'static str, Ident>;

#[derive(Clone, Debug, PartialEq)]
pub enum ExprTyp {
    Val(Number),
    Var,
    Operator { typ: OperatorTyp, args: Vec<Expr> },
    Call { fun: Fun, args: Vec<Expr> },
}

/// Syntax tree of an expression in one free variable.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub typ: ExprTyp,
    pub loc: SubStr,
}

impl Expr {
    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match &self.typ {
            ExprTyp::Val(_) | ExprTyp::Var => 1,
            ExprTyp::Operator { args, .. } | ExprTyp::Call { args, .. } => {
                1 + args.iter().map(Self::size).sum::<usize>()
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.typ {
            ExprTyp::Val(val) => write!(f, "{val}"),
            ExprTyp::Var => f.write_str(stdlib::X),
            ExprTyp::Operator { typ, args } => match args.as_slice() {
                [arg] => write!(f, "({}{arg})", typ.symbol()),
                [lhs, rhs] => write!(f, "({lhs} {} {rhs})", typ.symbol()),
                _ => unreachable!("operators are unary or binary"),
            },
            ExprTyp::Call { fun, args } => {
                write!(f, "{}(", fun.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// A function was applied outside its domain.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalErr {
    pub name: &'static str,
    pub args: Vec<Number>,
    pub loc: SubStr,
}

impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is undefined for ", self.name)?;
        match self.args.as_slice() {
            [arg] => write!(f, "{arg}"),
            args => {
                f.write_str("(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl std::error::Error for EvalErr {}

pub fn eval(expr: &Expr, x: Number) -> Result<Number, EvalErr> {
    fn apply(fun: &Fun, args: &[Expr], x: Number, loc: &SubStr) -> Result<Number, EvalErr> {
        let args = args
            .iter()
            .map(|arg| eval(arg, x))
            .collect::<Result<Vec<Number>, _>>()?;
        let val = (fun.fun)(&args);
        if val.is_finite() {
            Ok(val)
        } else {
            Err(EvalErr {
                name: fun.name,
                args,
                loc: loc.clone(),
            })
        }
    }

    match &expr.typ {
        ExprTyp::Val(val) => Ok(*val),
        ExprTyp::Var => Ok(x),
        ExprTyp::Operator { typ, args } => apply(&typ.fun(), args, x, &expr.loc),
        ExprTyp::Call { fun, args } => apply(fun, args, x, &expr.loc),
    }
}
