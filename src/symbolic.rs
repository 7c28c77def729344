#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a reverse polish expression into a symbolic tree
///
///# Example
/// ```
/// use RustedIntegrator::symbolic::symbolic_engine::Expr;
/// let parsed_expression = Expr::from_postfix("x2H");
/// // x squared, halved
/// println!("parsed_expression {}", parsed_expression);
/// assert_eq!(parsed_expression.simplify().to_string(), "x ^ 2 / 2");
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_rpn;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) holds the tagged expression tree with its precedence table
/// 2) renders a tree into a human-readable infix string
/// 3) turns a tree into a Rust closure for numerical evaluation
///# Example#
/// ```
/// use RustedIntegrator::symbolic::symbolic_engine::Expr;
/// let expr = Expr::from_postfix("xS");
/// assert_eq!(expr.to_string(), "sin(x)");
/// let func = expr.lambdify1D();
/// assert!((func(0.0)).abs() < 1e-15);
/// ```
pub mod symbolic_engine;
///____________________________________________________________________________________________________________________________
/// repeated bottom-up rewrites: constant folding, double negation and the
/// multiplicative identity
pub mod symbolic_simplify;
