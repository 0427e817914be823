//! Weighted letter grading.
//!
//! A [`GradingScheme`] holds the per-component weights and the ordered
//! threshold/letter table. [`grade`] turns one record's scores into a letter
//! under a scheme and [`grade_all`] applies it across a roster.

pub mod grade;
pub mod scheme;

pub use grade::{grade, grade_all, weighted_sum};
pub use scheme::{Component, GradingScheme, Threshold};
