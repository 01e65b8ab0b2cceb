//! Hoops Roster Library
//!
//! This library models a basketball team's roster and in-game statistics,
//! including jersey validation, scoring, team aggregates, and reporting.

pub mod config;
pub mod console;
pub mod domain;
pub mod report;
