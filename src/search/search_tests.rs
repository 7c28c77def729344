//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::search::composer::{Composer, BINARY_POOL, EXPR_MAX_SIZE, NULLARY_POOL, UNARY_POOL};
    use crate::search::custom_rng::Xorshift32;
    use crate::search::search_driver::{search, IntegralSearcher};
    use crate::search::verifier::{derivative, integral_loss, is_correct_integral, LOSS_CUTOFF};
    use crate::symbolic::parse_rpn::infix_from_postfix;
    use approx::assert_relative_eq;
    use rand::Rng;

    // interprets the token string the slow way, tracking stack depth;
    // None means the string would underflow or contains a foreign token
    fn reference_stack_depth(expr: &str) -> Option<usize> {
        let mut depth: usize = 0;
        for c in expr.chars() {
            if NULLARY_POOL.contains(&c) {
                depth += 1;
            } else if UNARY_POOL.contains(&c) || c == 'T' {
                if depth < 1 {
                    return None;
                }
            } else if BINARY_POOL.contains(&c) {
                if depth < 2 {
                    return None;
                }
                depth -= 1;
            } else {
                return None;
            }
        }
        Some(depth)
    }

    // reference stack machine over a growable Vec, kept independent of the
    // composer's fixed-buffer implementation
    fn reference_eval(expr: &str, x: f64) -> f64 {
        let mut stack: Vec<f64> = Vec::new();
        for c in expr.chars() {
            match c {
                '0' => stack.push(0.0),
                '1' => stack.push(1.0),
                'x' => stack.push(x),
                '+' | '-' | '*' | '/' => {
                    let b = stack.pop().unwrap();
                    let a = stack.pop().unwrap();
                    stack.push(match c {
                        '+' => a + b,
                        '-' => a - b,
                        '*' => a * b,
                        _ => a / b,
                    });
                }
                _ => {
                    let v = stack.pop().unwrap();
                    stack.push(match c {
                        '\\' => 1.0 / v,
                        '~' => -v,
                        '>' => v + 1.0,
                        '<' => v - 1.0,
                        'S' => v.sin(),
                        'C' => v.cos(),
                        'T' => v.tan(),
                        '2' => v * v,
                        'R' => v.sqrt(),
                        'L' => v.ln(),
                        'H' => v / 2.0,
                        _ => panic!("unexpected token '{}'", c),
                    });
                }
            }
        }
        assert_eq!(stack.len(), 1);
        stack[0]
    }

    #[test]
    fn test_xorshift_known_values() {
        let mut rng = Xorshift32::new(1);
        assert_eq!(rng.next(), 270369);

        let mut rng = Xorshift32::new(42);
        assert_eq!(rng.next(), 11355432);
    }

    #[test]
    fn test_xorshift_determinism() {
        let mut a = Xorshift32::new(123456789);
        let mut b = Xorshift32::new(123456789);
        for _ in 0..1000 {
            let value = a.next();
            assert_eq!(value, b.next());
            assert_ne!(value, 0);
        }
    }

    #[test]
    #[should_panic]
    fn test_xorshift_rejects_zero_seed() {
        Xorshift32::new(0);
    }

    #[test]
    fn test_generated_expressions_are_stack_balanced() {
        for seed in 1..=50u32 {
            let mut composer = Composer::new(seed);
            for _ in 0..500 {
                composer.compose(20);
                let expr = composer.raw_expr();
                assert_eq!(
                    reference_stack_depth(expr),
                    Some(1),
                    "unbalanced expression {:?}",
                    expr
                );
                assert!(expr.len() >= 2);
                assert!(expr.len() <= EXPR_MAX_SIZE);
            }
        }
    }

    #[test]
    fn test_generated_expressions_never_contain_tan() {
        let mut composer = Composer::new(9);
        for _ in 0..2000 {
            composer.compose(20);
            assert!(!composer.raw_expr().contains('T'));
        }
    }

    #[test]
    fn test_compiled_program_has_source_length() {
        let mut composer = Composer::new(5);
        for _ in 0..200 {
            composer.compose(20);
            assert_eq!(composer.compiled().len(), composer.raw_expr().len());
        }
    }

    #[test]
    fn test_compile_eval_round_trip() {
        let handcrafted = [
            "x", "1", "0x+", "xx+", "xx*", "x2H", "x1+2", "xS", "xC", "xT", "xL", "xR", "x\\",
            "x~", "x>", "x<", "1x/", "xxx**", "xSxC*", "x2x2+R",
        ];
        let mut composer = Composer::new(17);
        let mut rng = rand::thread_rng();

        for expr in handcrafted {
            composer.compile_expr(expr);
            for _ in 0..20 {
                let x: f64 = rng.gen_range(-3.0..3.0);
                let fast = composer.eval(x);
                let slow = reference_eval(expr, x);
                assert!(
                    (fast.is_nan() && slow.is_nan()) || fast == slow,
                    "{:?} at x = {}: {} vs {}",
                    expr,
                    x,
                    fast,
                    slow
                );
            }
        }
    }

    #[test]
    fn test_random_expressions_round_trip() {
        let mut generator = Composer::new(31);
        let mut evaluator = Composer::new(1);
        for _ in 0..300 {
            generator.compose(20);
            let expr = generator.raw_expr().to_string();
            evaluator.compile_expr(&expr);
            for &x in &[0.3, 1.1, 2.7, -0.8] {
                let fast = evaluator.eval(x);
                let slow = reference_eval(&expr, x);
                assert!(
                    (fast.is_nan() && slow.is_nan()) || fast == slow,
                    "{:?} at x = {}: {} vs {}",
                    expr,
                    x,
                    fast,
                    slow
                );
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_compile_rejects_unknown_token() {
        let mut composer = Composer::new(3);
        composer.compile_expr("xq+");
    }

    #[test]
    fn test_derivative_oracle() {
        assert_relative_eq!(
            derivative(|x| x.sin(), 1.0),
            1.0f64.cos(),
            epsilon = 1e-9
        );
        assert_relative_eq!(derivative(|x| x * x / 2.0, 2.0), 2.0, epsilon = 1e-9);
        assert_relative_eq!(derivative(|x| x.exp(), 0.5), 0.5f64.exp(), epsilon = 1e-8);
    }

    #[test]
    fn test_verifier_accepts_identity_for_constant_integrand() {
        // f = 1 on the sample, F(x) = x
        let mut composer = Composer::new(2);
        composer.compile_expr("x");
        assert!(is_correct_integral(&mut composer, &[(1.0, 1.0)]));
    }

    #[test]
    fn test_verifier_accepts_half_square_for_linear_integrand() {
        let points = [(0.5, 0.5), (1.0, 1.0), (2.0, 2.0)];
        let mut composer = Composer::new(2);
        composer.compile_expr("x2H");
        assert!(is_correct_integral(&mut composer, &points));
    }

    #[test]
    fn test_verifier_rejects_square_for_constant_integrand() {
        // F = x^2 has derivative 2x, so the residual at (1, 1) is 1
        let mut composer = Composer::new(2);
        composer.compile_expr("xx*");
        let loss = integral_loss(&mut composer, &[(1.0, 1.0)]);
        assert_relative_eq!(loss, 1.0, epsilon = 1e-6);
        assert!(!is_correct_integral(&mut composer, &[(1.0, 1.0)]));
    }

    #[test]
    fn test_verifier_is_monotone_in_loss() {
        let points = [(0.5, 0.5), (1.0, 1.0), (2.0, 2.0)];
        let mut composer = Composer::new(2);

        composer.compile_expr("x2H");
        let good_loss = integral_loss(&mut composer, &points);
        composer.compile_expr("xx*");
        let bad_loss = integral_loss(&mut composer, &points);

        assert!(good_loss < bad_loss);
        assert!(good_loss < LOSS_CUTOFF && bad_loss >= LOSS_CUTOFF);
    }

    #[test]
    fn test_verifier_fails_on_non_finite_loss() {
        let mut composer = Composer::new(2);
        composer.compile_expr("xL");
        // log of a negative argument is NaN, which poisons the loss
        assert!(!is_correct_integral(&mut composer, &[(-5.0, 1.0)]));
    }

    #[test]
    fn test_search_finds_antiderivative_of_constant() {
        let points = vec![(0.5, 1.0), (1.0, 1.0), (2.0, 1.0)];
        let (raw_expr, attempts) = search(&points, 7, 2, 5_000_000);

        assert!(!raw_expr.is_empty(), "budget spent without a hit");
        assert!(attempts >= 1);

        let mut composer = Composer::new(1);
        composer.compile_expr(&raw_expr);
        assert!(is_correct_integral(&mut composer, &points));

        // the winner renders without panicking
        let infix = infix_from_postfix(&raw_expr);
        assert!(!infix.is_empty());
    }

    #[test]
    fn test_search_reports_exhausted_budget() {
        // an unreachable target: the loss is NaN for every candidate
        let points = vec![(1.0, f64::NAN)];
        let (raw_expr, attempts) = search(&points, 11, 2, 30_000);

        assert!(raw_expr.is_empty());
        assert!(attempts > 30_000);
    }

    #[test]
    #[should_panic]
    fn test_search_rejects_zero_seed() {
        search(&[(1.0, 1.0)], 0, 1, 1000);
    }

    #[test]
    fn test_searcher_struct_api() {
        let points = vec![(0.5, 1.0), (1.0, 1.0), (2.0, 1.0)];
        let mut searcher = IntegralSearcher::new(points, 7, 2, 5_000_000);
        searcher.loglevel = Some("off".to_string());

        let result = searcher.solve();
        assert!(result.is_some());
        assert_eq!(searcher.get_result(), result.as_deref());
        assert!(searcher.attempts >= 1);
        assert!(searcher.elapsed.is_some());
        assert!(searcher.get_infix().is_some());
    }
}
