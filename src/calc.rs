// SPDX: CC0-1.0

use crate::{
    curve::ExpressionEvaluator,
    eval::{self, EvalErr, Expr, Ident, Idents},
    lex::Lexer,
    parse::{self, ParseErr},
    stdlib, Number,
};
use log::debug;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CalcErr {
    #[error("parse error: {0}")]
    Parse(#[from] ParseErr),
    #[error(transparent)]
    Eval(#[from] EvalErr),
}

/// Evaluates expressions written in the built-in arithmetic language.
///
/// The most recently seen expression stays compiled, so sampling one curve
/// parses its text once.
#[derive(Debug)]
pub struct Calculator {
    idents: Idents,
    cache: Option<(Arc<String>, Result<Expr, ParseErr>)>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(stdlib::standard_idents())
    }
}

impl Calculator {
    pub fn new(idents: Idents) -> Self {
        Self {
            idents,
            cache: None,
        }
    }

    pub fn compile(&mut self, expr: &str) -> Result<&Expr, ParseErr> {
        if self
            .cache
            .as_ref()
            .is_some_and(|(src, _)| src.as_str() != expr)
        {
            self.cache = None;
        }
        let (_, compiled) = self.cache.get_or_insert_with(|| {
            let src = Arc::new(expr.to_owned());
            let compiled = parse::parse(Lexer::new(&src), &self.idents);
            match compiled {
                Ok(ref tree) => {
                    debug!("compiled {expr:?} into {tree} ({} nodes)", tree.size())
                }
                Err(ref err) => debug!("failed to compile {expr:?}: {err}"),
            }
            (src, compiled)
        });
        compiled.as_ref().map_err(Clone::clone)
    }

    /// Known name most similar to `name`, if any is similar enough to be
    /// worth suggesting.
    pub fn suggest(&self, name: &str) -> Option<(&'static str, &Ident)> {
        let name = name.to_ascii_lowercase();
        self.idents
            .iter()
            .map(|(key, ident)| {
                (
                    strsim::normalized_damerau_levenshtein(&name, &key.to_ascii_lowercase()),
                    (*key, ident),
                )
            })
            .filter(|(sim, _)| *sim > 0.3)
            // ties go to the alphabetically first name so the answer is stable
            .max_by(|(a, (ka, _)), (b, (kb, _))| a.total_cmp(b).then_with(|| kb.cmp(ka)))
            .map(|(_, kv)| kv)
    }
}

impl ExpressionEvaluator for Calculator {
    type Err = CalcErr;

    fn evaluate(&mut self, expr: &str, x: Number) -> Result<Number, Self::Err> {
        let tree = self.compile(expr)?;
        Ok(eval::eval(tree, x)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ParseErrTyp;
    use approx::assert_relative_eq;

    #[test]
    fn evaluates_the_free_variable() {
        let mut calc = Calculator::default();
        assert_eq!(calc.evaluate("x^2 - 1", 3.0), Ok(8.0));
        assert_eq!(calc.evaluate("x^2 - 1", -1.0), Ok(0.0));
        assert_relative_eq!(calc.evaluate("sin(pi * x)", 0.5).unwrap(), 1.0);
        assert_relative_eq!(calc.evaluate("log(x, 2)", 8.0).unwrap(), 3.0);
    }

    #[test]
    fn recompiles_when_the_text_changes() {
        let mut calc = Calculator::default();
        assert_eq!(calc.evaluate("x", 2.0), Ok(2.0));
        assert_eq!(calc.evaluate("-x", 2.0), Ok(-2.0));
    }

    #[test]
    fn domain_errors_are_per_sample() {
        let mut calc = Calculator::default();
        assert!(matches!(calc.evaluate("1/x", 0.0), Err(CalcErr::Eval(_))));
        assert_eq!(calc.evaluate("1/x", 4.0), Ok(0.25));
        assert!(matches!(calc.evaluate("sqrt(x)", -1.0), Err(CalcErr::Eval(_))));
    }

    #[test]
    fn syntax_errors_surface_lazily() {
        let mut calc = Calculator::default();
        let err = calc.evaluate("x +", 1.0).unwrap_err();
        let CalcErr::Parse(err) = err else {
            panic!("expected a parse error, got {err:?}");
        };
        assert_eq!(err.typ, ParseErrTyp::MissingOperand);
        // still an error on the next sample
        assert!(calc.evaluate("x +", 2.0).is_err());
    }

    #[test]
    fn suggests_similar_names() {
        let calc = Calculator::default();
        assert_eq!(calc.suggest("sine").map(|(k, _)| k), Some("sin"));
        assert_eq!(calc.suggest("SQRT").map(|(k, _)| k), Some("sqrt"));
        assert_eq!(calc.suggest("qwertyuiop"), None);
    }
}
