mod cost;
mod merge;
mod parse;
mod register;
mod ruleset;
