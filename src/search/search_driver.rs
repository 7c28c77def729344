use crate::Utils::logger::init_search_logger;
use crate::search::composer::Composer;
use crate::search::custom_rng::Xorshift32;
use crate::search::verifier::is_correct_integral;
use crate::symbolic::parse_rpn::infix_from_postfix;
use log::{info, warn};
use rayon::prelude::*;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tabled::{builder::Builder, settings::Style};

/// attempts performed between two visits to the shared mutex
pub const BATCH_SIZE: u64 = 10_000;

/// default tentative length handed to the composer
pub const DEFAULT_TENTATIVE_LEN: u32 = 20;

/// everything the workers share: the winning raw string (written at most
/// once, first writer wins) and the cumulative attempt counter
struct SearchShared {
    result: String,
    attempts: u64,
}

/// Searches for a postfix expression whose numerical derivative reproduces
/// the integrand samples.
///
/// `seed` must be non-zero, `num_threads` positive; `max_attempts == 0`
/// means unlimited. Returns the winning raw postfix string (empty when the
/// attempt budget ran out) together with the total number of attempts spent
/// across all workers.
pub fn search(
    integrand_points: &[(f64, f64)],
    seed: u32,
    num_threads: usize,
    max_attempts: u64,
) -> (String, u64) {
    run_search(
        integrand_points,
        seed,
        num_threads,
        max_attempts,
        DEFAULT_TENTATIVE_LEN,
    )
}

fn run_search(
    integrand_points: &[(f64, f64)],
    seed: u32,
    num_threads: usize,
    max_attempts: u64,
    tentative_len: u32,
) -> (String, u64) {
    assert!(num_threads >= 1, "at least one worker thread is required");
    let max_attempts = if max_attempts == 0 {
        u64::MAX
    } else {
        max_attempts
    };

    // worker seeds come from a second xorshift stream so that runs are
    // reproducible for a given (seed, num_threads) on every platform;
    // xorshift never emits 0 from a non-zero state, so every worker seed
    // is a valid seed in its own right
    let mut seed_rng = Xorshift32::new(seed);
    let worker_seeds: Vec<u32> = (0..num_threads).map(|_| seed_rng.next()).collect();

    let shared = Mutex::new(SearchShared {
        result: String::new(),
        attempts: 0,
    });

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .expect("failed to build the worker thread pool");

    pool.install(|| {
        worker_seeds.into_par_iter().for_each(|worker_seed| {
            searcher(
                worker_seed,
                integrand_points,
                &shared,
                max_attempts,
                tentative_len,
            );
        });
    });

    let shared = shared.into_inner().expect("result mutex poisoned");
    (shared.result, shared.attempts)
}

/// One worker: purely local batches of [compose -> verify], with the mutex
/// taken only at a batch boundary or on a win. A worker that reaches a
/// boundary after another worker has already written the result slot, or
/// after the budget is spent, terminates.
fn searcher(
    seed: u32,
    integrand_points: &[(f64, f64)],
    shared: &Mutex<SearchShared>,
    max_attempts: u64,
    tentative_len: u32,
) {
    let mut composer = Composer::new(seed);

    loop {
        for attempt in 1..=BATCH_SIZE {
            composer.compose(tentative_len);
            if is_correct_integral(&mut composer, integrand_points) {
                let mut shared = shared.lock().unwrap();
                shared.attempts += attempt;
                if shared.result.is_empty() {
                    shared.result = composer.raw_expr().to_string();
                    info!(
                        "worker (seed {}) found {} after {} attempts of its last batch",
                        seed,
                        composer.raw_expr(),
                        attempt
                    );
                }
                return;
            }
        }
        let mut shared = shared.lock().unwrap();
        shared.attempts += BATCH_SIZE;
        if !shared.result.is_empty() || shared.attempts > max_attempts {
            return;
        }
    }
}

/// Searcher with a solver-struct API: mandatory inputs in the constructor,
/// tunables as public fields, results kept on the struct after `solve`.
pub struct IntegralSearcher {
    pub integrand_points: Vec<(f64, f64)>,
    pub seed: u32,
    pub num_threads: usize,
    pub max_attempts: u64,
    /// tentative expression length handed to the composer (default 20)
    pub tentative_len: u32,
    /// "debug", "info", "warn", "error"; "off"/"none" disables logging
    pub loglevel: Option<String>,
    /// also write the log into a timestamped file
    pub save_log: bool,
    pub result: Option<String>,
    pub attempts: u64,
    pub elapsed: Option<Duration>,
}

impl IntegralSearcher {
    pub fn new(
        integrand_points: Vec<(f64, f64)>,
        seed: u32,
        num_threads: usize,
        max_attempts: u64,
    ) -> Self {
        IntegralSearcher {
            integrand_points,
            seed,
            num_threads,
            max_attempts,
            tentative_len: DEFAULT_TENTATIVE_LEN,
            loglevel: None,
            save_log: false,
            result: None,
            attempts: 0,
            elapsed: None,
        }
    }

    pub fn solve(&mut self) -> Option<String> {
        let is_logging_disabled = self
            .loglevel
            .as_ref()
            .map(|level| level == "off" || level == "none")
            .unwrap_or(false);

        if is_logging_disabled {
            self.solver()
        } else {
            match init_search_logger(&self.loglevel, self.save_log) {
                Ok(()) => {
                    let res = self.solver();
                    info!(" \n \n Search ended");
                    res
                }
                // a logger is already installed, proceed with it
                Err(_) => self.solver(),
            }
        }
    }

    fn solver(&mut self) -> Option<String> {
        info!(
            "searching with {} workers, seed {}, budget {}",
            self.num_threads, self.seed, self.max_attempts
        );
        let begin = Instant::now();
        let (result, attempts) = run_search(
            &self.integrand_points,
            self.seed,
            self.num_threads,
            self.max_attempts,
            self.tentative_len,
        );
        self.elapsed = Some(begin.elapsed());
        self.attempts = attempts;

        if result.is_empty() {
            warn!("attempt budget exhausted after {} attempts", attempts);
            self.result = None;
            None
        } else {
            info!("found {} after {} attempts", result, attempts);
            self.result = Some(result.clone());
            Some(result)
        }
    }

    /// infix rendering of the winning expression, if any
    pub fn get_infix(&self) -> Option<String> {
        self.result.as_ref().map(|raw| infix_from_postfix(raw))
    }

    pub fn get_result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn print_statistics(&self) {
        let mut stats: Vec<Vec<String>> = Vec::new();
        stats.push(vec![
            "raw expression".to_string(),
            self.result.clone().unwrap_or_else(|| "-".to_string()),
        ]);
        stats.push(vec![
            "infix expression".to_string(),
            self.get_infix().unwrap_or_else(|| "-".to_string()),
        ]);
        stats.push(vec!["attempts".to_string(), self.attempts.to_string()]);
        stats.push(vec!["workers".to_string(), self.num_threads.to_string()]);
        stats.push(vec!["seed".to_string(), self.seed.to_string()]);
        stats.push(vec![
            "elapsed, ms".to_string(),
            self.elapsed
                .map(|dur| dur.as_millis().to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);

        let mut table = Builder::from(stats).build();
        table.with(Style::modern_rounded());
        info!("\n \n SEARCH STATISTICS \n \n {}", table.to_string());
    }
}
