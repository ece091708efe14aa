pub mod around;
pub mod fizzbuzz;
pub mod linkedlist;
pub mod powers;
pub mod words;
