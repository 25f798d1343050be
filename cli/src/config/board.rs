use clap::ValueEnum;

use torcell_core::prelude::CellState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub size: usize,
    pub rule: String,
    pub default_state: CellState,
    /// Starting pattern, or `None` to pick one that suits the rule.
    pub pattern: Option<Pattern>,
}
impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: 64,
            rule: "life".to_owned(),
            default_state: 0,
            pattern: None,
        }
    }
}
impl BoardConfig {
    /// Returns the starting pattern, falling back to one that does something
    /// interesting under the configured rule.
    pub fn pattern(&self) -> Pattern {
        self.pattern
            .unwrap_or_else(|| match self.rule.to_ascii_lowercase().as_str() {
                "wireworld" => Pattern::WireLoop,
                "ant" | "langton" => Pattern::Ant,
                _ => Pattern::Glider,
            })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    Empty,
    Glider,
    WireLoop,
    Ant,
}
