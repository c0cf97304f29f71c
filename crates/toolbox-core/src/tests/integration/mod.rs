#![cfg(test)]

pub mod common;
pub mod dictionary_tests;
pub mod settings_tests;
pub mod error_tests;
