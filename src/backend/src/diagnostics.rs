use derive_more::Display;

/// 1-based location of a character in the source, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{line}:{column}")]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }

    pub(crate) fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

/// Problems that were worked around during translation. None of them stop it.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Warning {
    #[display("Invalid command `{}` at {position}, skipping...", command.escape_default())]
    UnrecognizedInstruction { command: char, position: Position },
    #[display("Unmatched `]` at {position}, emitting an empty loop")]
    UnmatchedLoopClose { position: Position },
    #[display("Unclosed `[` at {position}, discarding its body")]
    UnclosedLoop { position: Position },
}

impl Warning {
    /// Bracket mismatches, as opposed to unknown characters.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Warning::UnmatchedLoopClose { .. } | Warning::UnclosedLoop { .. }
        )
    }
}
