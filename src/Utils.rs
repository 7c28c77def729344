#![allow(non_snake_case)]
/// logger initialisation for the search driver
pub mod logger;
