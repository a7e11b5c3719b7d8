use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse2, Error, Expr, ExprLit, ExprUnary, Lit, LitInt, Result, UnOp};

use super::width::IntType;

/// Expand `factorial!(n)` into the literal `n!`, or into a `compile_error!`.
pub fn expand_factorial(input: TokenStream) -> TokenStream {
  try_expand(input).unwrap_or_else(|err| err.to_compile_error())
}

fn try_expand(input: TokenStream) -> Result<TokenStream> {
  let expr: Expr = parse2(input)?;
  let (negative, lit) = parse_operand(&expr)?;

  let typ = IntType::try_from(lit.suffix()).map_err(|_| {
    Error::new(
      lit.span(),
      format!("unsupported integer suffix `{}`", lit.suffix()),
    )
  })?;
  let n: u128 = lit.base10_parse()?;

  if negative && n != 0 {
    return Err(Error::new_spanned(
      &expr,
      format!("unsupported domain: factorial of negative integer -{}", n),
    ));
  }

  let value = factorial_of(n)
    .filter(|value| *value <= typ.max())
    .ok_or_else(|| {
      Error::new_spanned(
        &expr,
        format!("factorial of {} overflows {}", n, typ.name()),
      )
    })?;

  let literal = LitInt::new(&format!("{}{}", value, typ.name()), Span::call_site());
  Ok(quote! { #literal })
}

/// Accepts `5`, `-5`, and either of those wrapped in parentheses or an invisible
/// group (what `macro_rules!` produces for an `$n:expr` fragment).
fn parse_operand(expr: &Expr) -> Result<(bool, &LitInt)> {
  match expr {
    Expr::Lit(ExprLit {
      lit: Lit::Int(lit), ..
    }) => Ok((false, lit)),
    Expr::Unary(ExprUnary {
      op: UnOp::Neg(_),
      expr: inner,
      ..
    }) => match parse_operand(inner)? {
      (false, lit) => Ok((true, lit)),
      (true, _) => Err(Error::new_spanned(expr, "expected an integer literal")),
    },
    Expr::Paren(paren) => parse_operand(&paren.expr),
    Expr::Group(group) => parse_operand(&group.expr),
    _ => Err(Error::new_spanned(expr, "expected an integer literal")),
  }
}

fn factorial_of(n: u128) -> Option<u128> {
  if n == 0 {
    return Some(1);
  }
  (1..=n).try_fold(1u128, |acc, k| acc.checked_mul(k))
}
