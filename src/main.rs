#![allow(non_snake_case)]
use RustedIntegrator::Examples::search_examples::search_examples;

fn main() {
    let example = 1;
    search_examples(example);
}
