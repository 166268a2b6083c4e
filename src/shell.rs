// SPDX: CC0-1.0

use crate::{
    calc::Calculator,
    lex::{LexErrTyp, SubStr, TokTyp},
    parse::{ParseErr, ParseErrTyp},
};
use anyhow::Context;
use core::fmt;
use std::{
    io::{self, BufRead, Write},
    sync::Arc,
};

/// Prompt for one line. `None` once input is exhausted.
pub fn input<I: BufRead, W: Write>(
    mut inp: I,
    out: W,
    prompt: impl fmt::Display,
) -> anyhow::Result<Option<String>> {
    fn inner<I: BufRead, W: Write>(
        inp: &mut I,
        mut out: W,
        prompt: impl fmt::Display,
    ) -> io::Result<Option<String>> {
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut s = String::new();
        if inp.read_line(&mut s)? == 0 {
            return Ok(None);
        }
        Ok(Some(s.trim().to_string()))
    }

    let s = inner(&mut inp, out, prompt).context("read from standard input failed")?;
    Ok(s)
}

/// Prompt until the answer parses as a `T`, explaining each failure.
pub fn read_fromstr<I: BufRead, W: Write, T: core::str::FromStr>(
    mut inp: I,
    mut out: W,
    prompt: impl fmt::Display,
) -> anyhow::Result<T>
where
    <T as core::str::FromStr>::Err: fmt::Display,
{
    loop {
        let Some(input) = input(&mut inp, &mut out, &prompt)? else {
            anyhow::bail!("standard input closed before a value was given");
        };
        let input = Arc::new(input);
        match input.parse::<T>() {
            Ok(new) => return Ok(new),
            Err(err) => {
                writeln!(out)?;
                underline(&mut out, &SubStr::all(input))?;
                writeln!(out, "parse error: {err}")?;
                writeln!(out)?;
            }
        }
    }
}

/// Print the source of `span` with carets under it. Columns count chars, not
/// bytes.
pub fn underline<W: Write>(mut out: W, span: &SubStr) -> io::Result<()> {
    let src = span.src();
    writeln!(out, "{src}")?;
    writeln!(
        out,
        "{}{}",
        " ".repeat(src[..span.start()].chars().count()),
        "^".repeat(span.get().chars().count().max(1))
    )?;
    Ok(())
}

/// Underline where `err` happened and add whatever hint applies.
pub fn report_parse_err<W: Write>(mut out: W, err: &ParseErr, calc: &Calculator) -> io::Result<()> {
    underline(&mut out, &err.loc)?;
    writeln!(out, "parse error: {}", err.typ)?;
    match err.typ {
        ParseErrTyp::LexErr(LexErrTyp::InvalidChar) => writeln!(
            out,
            "note: available tokens are numbers, alphabetic identifiers, and symbols +-*/^,()"
        )?,
        ParseErrTyp::LexErr(LexErrTyp::Unsupported(typ)) => match typ {
            TokTyp::XGreater | TokTyp::XLess => {
                writeln!(out, "note: expected an expression but found an inequality")?
            }
            TokTyp::XEqual => writeln!(
                out,
                "note: expected an expression but found an equation, leave out the 'y ='"
            )?,
            TokTyp::XPipe => writeln!(
                out,
                "note: use the 'abs' function to compute absolute value"
            )?,
            TokTyp::XOpenSquareBracket
            | TokTyp::XCloseSquareBracket
            | TokTyp::XOpenCurly
            | TokTyp::XCloseCurly => writeln!(out, "note: only round parentheses group")?,
            TokTyp::Ident
            | TokTyp::Number
            | TokTyp::Op(_)
            | TokTyp::Comma
            | TokTyp::OpenParen
            | TokTyp::CloseParen => {}
        },
        ParseErrTyp::ParseNum(_) => writeln!(out, "note: parsing as floating point number")?,
        ParseErrTyp::Leftover => writeln!(
            out,
            "note: implicit multiplication is not supported, so for example '5x' would be '5*x'"
        )?,
        ParseErrTyp::ExpectedCall => writeln!(
            out,
            "note: function arguments go in parentheses, for example 'sin(x)'"
        )?,
        ParseErrTyp::UndefinedIdent => {
            if let Some((key, ident)) = calc.suggest(err.loc.get()) {
                writeln!(out, "note: {} '{key}' has a similar name", ident.kind())?;
            }
        }
        ParseErrTyp::NonFinite
        | ParseErrTyp::ParenMismatch
        | ParseErrTyp::Empty
        | ParseErrTyp::MissingOperand
        | ParseErrTyp::UnexpectedComma
        | ParseErrTyp::Arity { .. } => {}
    }
    Ok(())
}
