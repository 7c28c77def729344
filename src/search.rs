#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// # Random search for antiderivatives
/// the module generates random postfix expressions, compiles them into dense
/// opcode programs, evaluates them against a stack machine and checks whether
/// the numerical derivative of the candidate reproduces the integrand samples
///# Example
/// ```rust, ignore
/// use RustedIntegrator::search::search_driver::search;
/// use RustedIntegrator::symbolic::parse_rpn::infix_from_postfix;
/// // samples of the integrand f(x) = 1, so F(x) = x + const is expected
/// let points = vec![(0.5, 1.0), (1.0, 1.0), (2.0, 1.0)];
/// let (raw_expr, attempts) = search(&points, 4, 4, 100_000_000);
/// println!("found {} after {} attempts", raw_expr, attempts);
/// println!("{}", infix_from_postfix(&raw_expr));
/// ```
/// ________________________________________________________________________________________________________________________________
/// xorshift random number generator, the heart of the hot loop
pub mod custom_rng;
///____________________________________________________________________________________________________________________________
/// # Composer
/// a module
/// 1) generates random stack-balanced postfix strings over the token alphabet
/// 2) compiles a postfix string into a dense opcode sequence
/// 3) evaluates a compiled program against the operand stack for a given x
pub mod composer;
///____________________________________________________________________________________________________________________________
/// central difference derivative oracle and the loss cutoff test
pub mod verifier;
///____________________________________________________________________________________________________________________________
/// worker pool, shared result slot and attempt accounting
pub mod search_driver;
pub mod search_tests;
