//! 合法手生成

mod generator;

pub use generator::generate_moves;
