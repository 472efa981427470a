use anyhow::Result;
use log::info;

use crate::engine::{Board, GameSession, Layout, RuleSet};
use crate::terminal::{Command, Console, Control};

/// Starts a fresh game every time it is invoked.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChessCommand {
    layout: Layout,
    rules: RuleSet,
}

impl ChessCommand {
    pub fn new(layout: Layout, rules: RuleSet) -> Self {
        ChessCommand { layout, rules }
    }
}

impl Command for ChessCommand {
    fn on_command(&mut self, console: &mut Console<'_>, _args: Option<&[&str]>) -> Result<Control> {
        let mut session = GameSession::new(Board::setup(self.layout, self.rules));
        let state = session.run(console)?;
        info!("Chess session finished: {state:?}");
        Ok(Control::Continue)
    }

    fn name(&self) -> &str {
        "chess"
    }

    fn description(&self) -> &str {
        "a simple chess game in the terminal."
    }
}
