/*!
Semi-private stuff that you usually don't need to access directly
 */

pub mod algorithm;
pub mod tables;

#[cfg(test)]
mod unit_tests;
