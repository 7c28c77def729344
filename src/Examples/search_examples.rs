use crate::search::search_driver::IntegralSearcher;

/// the classic stress case: no elementary antiderivative is known, so the
/// search grinds through its whole budget
pub fn hard_integrand(x: f64) -> f64 {
    x / x.tan()
}

/// samples of f(x) = x on a uniform grid over [0.5, 2.0]; the
/// antiderivative x^2/2 is two tokens away
pub fn easy_points() -> Vec<(f64, f64)> {
    (0..5)
        .map(|i| {
            let x = 0.5 + 0.375 * i as f64;
            (x, x)
        })
        .collect()
}

pub fn search_examples(example: usize) {
    match example {
        0 => {
            // search an antiderivative of x / tan(x) from five samples
            let xs = [0.2, 0.5, 0.9, 1.5, 2.0];
            let points: Vec<(f64, f64)> = xs.iter().map(|&x| (x, hard_integrand(x))).collect();

            let mut searcher = IntegralSearcher::new(points, 4, 4, 100_000_000);
            searcher.loglevel = Some("info".to_string());
            searcher.solve();
            searcher.print_statistics();
        }
        1 => {
            // quick run: f(x) = x, the searcher finds x^2/2 in a moment
            let mut searcher = IntegralSearcher::new(easy_points(), 4, 4, 100_000_000);
            searcher.loglevel = Some("info".to_string());
            let result = searcher.solve();
            searcher.print_statistics();

            if let Some(raw_expr) = result {
                println!("{}", raw_expr);
                println!("{}", searcher.get_infix().unwrap());
            }
        }
        2 => {
            // single thread, fully reproducible attempt count
            let mut searcher = IntegralSearcher::new(easy_points(), 4, 1, 100_000_000);
            searcher.loglevel = Some("info".to_string());
            searcher.solve();
            searcher.print_statistics();
        }
        _ => {
            panic!("there is no search example with number {}", example);
        }
    }
}
