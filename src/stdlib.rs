// SPDX: CC0-1.0

//! Every name an expression may use. Nothing outside this table can be
//! called.

use crate::{eval::*, Number};
use core::f64::consts; // assumes Number = f64
use std::collections::HashMap;

pub const X: &str = "x";

pub fn standard_idents() -> Idents {
    let mut ret = HashMap::new();

    ret.insert(X, Ident::Var);

    for fun in [
        Fun::new("abs", 1, abs),
        Fun::new("sqrt", 1, sqrt),
        Fun::new("exp", 1, exp),
        Fun::new("ln", 1, ln),
        Fun::new("log", 2, log),
        Fun::new("log10", 1, log10),
        Fun::new("floor", 1, floor),
        Fun::new("ceil", 1, ceil),
        // trig
        Fun::new("sin", 1, sin),
        Fun::new("cos", 1, cos),
        Fun::new("tan", 1, tan),
        Fun::new("asin", 1, arcsin),
        Fun::new("acos", 1, arccos),
        Fun::new("atan", 1, arctan),
        Fun::new("arcsin", 1, arcsin),
        Fun::new("arccos", 1, arccos),
        Fun::new("arctan", 1, arctan),
        Fun::new("sinh", 1, sinh),
        Fun::new("cosh", 1, cosh),
        Fun::new("tanh", 1, tanh),
    ] {
        ret.insert(fun.name, Ident::Fun(fun));
    }

    ret.insert("pi", Ident::Const(consts::PI));
    ret.insert("tau", Ident::Const(consts::TAU));
    ret.insert("e", Ident::Const(consts::E));
    ret
}

/// Arity is checked by the parser, so a mismatch only happens if a table
/// entry is wrong. NaN arguments turn that into a domain error.
fn expect_n<const N: usize>(args: &[Number]) -> [Number; N] {
    <[Number; N]>::try_from(args).unwrap_or([Number::NAN; N])
}

pub fn neg(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    -x
}

pub fn add(args: &[Number]) -> Number {
    let [x, y] = expect_n(args);
    x + y
}

pub fn sub(args: &[Number]) -> Number {
    let [x, y] = expect_n(args);
    x - y
}

pub fn mul(args: &[Number]) -> Number {
    let [x, y] = expect_n(args);
    x * y
}

pub fn div(args: &[Number]) -> Number {
    let [x, y] = expect_n(args);
    x / y
}

pub fn pow(args: &[Number]) -> Number {
    let [x, exp] = expect_n(args);
    x.powf(exp)
}

pub fn abs(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.abs()
}

pub fn sqrt(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.sqrt()
}

pub fn exp(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.exp()
}

pub fn ln(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.ln()
}

pub fn log(args: &[Number]) -> Number {
    let [x, base] = expect_n(args);
    x.log(base)
}

pub fn log10(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.log10()
}

pub fn floor(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.floor()
}

pub fn ceil(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.ceil()
}

pub fn sin(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.sin()
}

pub fn cos(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.cos()
}

pub fn tan(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.tan()
}

pub fn arcsin(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.asin()
}

pub fn arccos(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.acos()
}

pub fn arctan(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.atan()
}

pub fn sinh(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.sinh()
}

pub fn cosh(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.cosh()
}

pub fn tanh(args: &[Number]) -> Number {
    let [x] = expect_n(args);
    x.tanh()
}
