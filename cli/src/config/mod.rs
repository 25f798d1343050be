mod board;
mod sim;

pub use board::*;
pub use sim::*;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub board: BoardConfig,
    pub sim: SimConfig,
}
