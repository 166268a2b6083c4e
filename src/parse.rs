// SPDX: CC0-1.0

// shunting yard algorithm by dijkstra (see https://en.wikipedia.org/wiki/Shunting_yard_algorithm),
// reducing straight into a syntax tree instead of emitting postfix

use crate::{
    eval::{Associativity, Expr, ExprTyp, Fun, Ident, Idents, OperatorTyp},
    lex::{LexErr, LexErrTyp, Lexer, SubStr, TokTyp},
    Number,
};
use core::{fmt, num::ParseFloatError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrTyp {
    LexErr(LexErrTyp),
    ParseNum(ParseFloatError),
    NonFinite,
    ParenMismatch,
    Empty,
    UndefinedIdent,
    ExpectedCall,
    MissingOperand,
    Leftover,
    UnexpectedComma,
    Arity {
        name: &'static str,
        arity: usize,
        found: usize,
    },
}

impl fmt::Display for ParseErrTyp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LexErr(err) => write!(f, "{err}"),
            Self::ParseNum(err) => write!(f, "invalid number: {err}"),
            Self::NonFinite => write!(f, "number is too large"),
            Self::ParenMismatch => write!(f, "mismatched parentheses"),
            Self::Empty => write!(f, "empty expression"),
            Self::UndefinedIdent => write!(f, "undefined identifier"),
            Self::ExpectedCall => write!(f, "function is not called"),
            Self::MissingOperand => write!(f, "missing operand"),
            Self::Leftover => write!(f, "unexpected operand"),
            Self::UnexpectedComma => write!(f, "comma outside of a function call"),
            Self::Arity { name, arity, found } => write!(
                f,
                "function '{name}' requires {arity} argument{s}, but found {found}",
                s = if *arity == 1 { "" } else { "s" }
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{typ}")]
pub struct ParseErr {
    pub typ: ParseErrTyp,
    pub loc: SubStr,
}

impl From<LexErr> for ParseErr {
    fn from(err: LexErr) -> Self {
        Self {
            typ: ParseErrTyp::LexErr(err.typ),
            loc: err.loc,
        }
    }
}

#[derive(Clone, Debug)]
enum ShuntOp {
    Operator {
        typ: OperatorTyp,
        loc: SubStr,
    },
    Fun {
        fun: Fun,
        loc: SubStr,
    },
    OpenParen {
        loc: SubStr,
        // length of the output stack when the paren was opened
        out_len: usize,
        commas: usize,
    },
}

/// Index into the output stack below which operators must not reach.
fn floor(ops: &[ShuntOp]) -> usize {
    ops.iter()
        .rev()
        .find_map(|op| match op {
            ShuntOp::OpenParen { out_len, .. } => Some(*out_len),
            _ => None,
        })
        .unwrap_or(0)
}

fn reduce(typ: OperatorTyp, loc: SubStr, out: &mut Vec<Expr>, floor: usize) -> Result<(), ParseErr> {
    let arity = typ.fun().arity;
    if out.len().saturating_sub(floor) < arity {
        return Err(ParseErr {
            typ: ParseErrTyp::MissingOperand,
            loc,
        });
    }
    let args = out.split_off(out.len() - arity);
    let loc = args.iter().fold(loc, |acc, arg| acc.join(&arg.loc));
    out.push(Expr {
        typ: ExprTyp::Operator { typ, args },
        loc,
    });
    Ok(())
}

/// Checks that exactly one operand was produced since the paren at `out_len`
/// was opened or its last comma was seen.
fn expect_arg(out: &[Expr], out_len: usize, commas: usize, at: &SubStr) -> Result<(), ParseErr> {
    let found = out.len() - out_len;
    let expected = commas + 1;
    if found < expected {
        Err(ParseErr {
            typ: ParseErrTyp::MissingOperand,
            loc: at.clone(),
        })
    } else if found > expected {
        Err(ParseErr {
            typ: ParseErrTyp::Leftover,
            loc: out[out_len + expected].loc.clone(),
        })
    } else {
        Ok(())
    }
}

pub fn parse(lex: Lexer<'_>, idents: &Idents) -> Result<Expr, ParseErr> {
    let mut out: Vec<Expr> = Vec::new(); // output
    let mut ops: Vec<ShuntOp> = Vec::new(); // operator stack
    let mut pending_fun: Option<SubStr> = None; // function name awaiting its '('
    let end = SubStr::end(lex.src());

    // lex errors take priority over parse errors
    let toks = lex.collect::<Result<Vec<_>, _>>()?;
    for tok in toks {
        if let Some(loc) = pending_fun.take() {
            if tok.typ != TokTyp::OpenParen {
                return Err(ParseErr {
                    typ: ParseErrTyp::ExpectedCall,
                    loc,
                });
            }
        }

        match tok.typ {
            TokTyp::Number => {
                let num: Number = tok.loc.get().parse().map_err(|err| ParseErr {
                    typ: ParseErrTyp::ParseNum(err),
                    loc: tok.loc.clone(),
                })?;
                if !num.is_finite() {
                    return Err(ParseErr {
                        typ: ParseErrTyp::NonFinite,
                        loc: tok.loc,
                    });
                }
                out.push(Expr {
                    typ: ExprTyp::Val(num),
                    loc: tok.loc,
                });
            }

            TokTyp::Ident => match idents.get(tok.loc.get()) {
                Some(Ident::Var) => out.push(Expr {
                    typ: ExprTyp::Var,
                    loc: tok.loc,
                }),
                Some(Ident::Const(val)) => out.push(Expr {
                    typ: ExprTyp::Val(*val),
                    loc: tok.loc,
                }),
                Some(Ident::Fun(fun)) => {
                    pending_fun = Some(tok.loc.clone());
                    ops.push(ShuntOp::Fun {
                        fun: *fun,
                        loc: tok.loc,
                    });
                }
                None => {
                    return Err(ParseErr {
                        typ: ParseErrTyp::UndefinedIdent,
                        loc: tok.loc,
                    })
                }
            },

            TokTyp::Op(o1) => {
                // a prefix operator has nothing to its left to bind
                if o1 != OperatorTyp::Neg {
                    while let Some(ShuntOp::Operator { typ: o2, .. }) = ops.last() {
                        let o2 = *o2;
                        if (o2.precedence() > o1.precedence())
                            || ((o1.precedence() == o2.precedence())
                                && (o1.associativity() == Associativity::Left))
                        {
                            if let Some(ShuntOp::Operator { typ, loc }) = ops.pop() {
                                reduce(typ, loc, &mut out, floor(&ops))?;
                            }
                        } else {
                            break;
                        }
                    }
                }
                ops.push(ShuntOp::Operator {
                    typ: o1,
                    loc: tok.loc,
                });
            }

            TokTyp::Comma => {
                while let Some(ShuntOp::Operator { .. }) = ops.last() {
                    if let Some(ShuntOp::Operator { typ, loc }) = ops.pop() {
                        reduce(typ, loc, &mut out, floor(&ops))?;
                    }
                }
                match ops.last_mut() {
                    Some(ShuntOp::OpenParen {
                        out_len, commas, ..
                    }) => {
                        expect_arg(&out, *out_len, *commas, &tok.loc)?;
                        *commas += 1;
                    }
                    _ => {
                        return Err(ParseErr {
                            typ: ParseErrTyp::UnexpectedComma,
                            loc: tok.loc,
                        })
                    }
                }
            }

            TokTyp::OpenParen => {
                ops.push(ShuntOp::OpenParen {
                    loc: tok.loc,
                    out_len: out.len(),
                    commas: 0,
                });
            }

            TokTyp::CloseParen => {
                while let Some(ShuntOp::Operator { .. }) = ops.last() {
                    if let Some(ShuntOp::Operator { typ, loc }) = ops.pop() {
                        reduce(typ, loc, &mut out, floor(&ops))?;
                    }
                }

                let Some(ShuntOp::OpenParen {
                    loc: open,
                    out_len,
                    commas,
                }) = ops.pop()
                else {
                    return Err(ParseErr {
                        typ: ParseErrTyp::ParenMismatch,
                        loc: tok.loc,
                    });
                };
                expect_arg(&out, out_len, commas, &tok.loc)?;

                if let Some(ShuntOp::Fun { .. }) = ops.last() {
                    if let Some(ShuntOp::Fun { fun, loc }) = ops.pop() {
                        if commas + 1 != fun.arity {
                            return Err(ParseErr {
                                typ: ParseErrTyp::Arity {
                                    name: fun.name,
                                    arity: fun.arity,
                                    found: commas + 1,
                                },
                                loc: loc.join(&tok.loc),
                            });
                        }
                        let args = out.split_off(out_len);
                        out.push(Expr {
                            typ: ExprTyp::Call { fun, args },
                            loc: loc.join(&tok.loc),
                        });
                    }
                } else if commas != 0 {
                    return Err(ParseErr {
                        typ: ParseErrTyp::UnexpectedComma,
                        loc: open.join(&tok.loc),
                    });
                } else if let Some(inner) = out.last_mut() {
                    // widen the span so errors underline the parentheses too
                    inner.loc = open.join(&tok.loc);
                }
            }

            TokTyp::XGreater
            | TokTyp::XLess
            | TokTyp::XEqual
            | TokTyp::XPipe
            | TokTyp::XOpenSquareBracket
            | TokTyp::XCloseSquareBracket
            | TokTyp::XOpenCurly
            | TokTyp::XCloseCurly => unreachable!("unsupported token survived until parsing"),
        }
    }

    if let Some(loc) = pending_fun {
        return Err(ParseErr {
            typ: ParseErrTyp::ExpectedCall,
            loc,
        });
    }

    while let Some(op) = ops.pop() {
        match op {
            ShuntOp::Operator { typ, loc } => reduce(typ, loc, &mut out, floor(&ops))?,
            ShuntOp::OpenParen { loc, .. } | ShuntOp::Fun { loc, .. } => {
                return Err(ParseErr {
                    typ: ParseErrTyp::ParenMismatch,
                    loc,
                });
            }
        }
    }

    let mut out = out.into_iter();
    match (out.next(), out.next()) {
        (Some(expr), None) => Ok(expr),
        (Some(_), Some(extra)) => Err(ParseErr {
            typ: ParseErrTyp::Leftover,
            loc: extra.loc,
        }),
        (None, _) => Err(ParseErr {
            typ: ParseErrTyp::Empty,
            loc: end,
        }),
    }
}
