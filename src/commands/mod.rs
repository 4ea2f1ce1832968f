//! Command handlers for the Classcord CLI

pub mod reset;
pub mod run;
