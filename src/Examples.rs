#![allow(non_snake_case)]
/// runnable search scenarios, also used by the benchmark harness
pub mod search_examples;
