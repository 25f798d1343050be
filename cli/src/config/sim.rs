use log::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub generations: u64,
    pub step_size: u64,
    /// Generation at which to stop early, if any.
    pub breakpoint_gen: Option<u64>,
    pub log_level: Level,
}
impl Default for SimConfig {
    fn default() -> Self {
        Self {
            generations: 256,
            step_size: 16,
            breakpoint_gen: None,
            log_level: Level::Info,
        }
    }
}
impl SimConfig {
    /// Returns the generation at which the run ends.
    pub fn last_gen(&self) -> u64 {
        match self.breakpoint_gen {
            Some(gen) => gen.min(self.generations),
            None => self.generations,
        }
    }
}
