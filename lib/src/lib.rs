//! Calorie burn prediction: fit a linear model on a workout dataset once at
//! startup, then serve point predictions over HTTP.

pub mod model;
pub mod subcommands;
pub mod utils;
