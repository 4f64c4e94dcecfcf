pub mod search;
pub mod searchconfig;
