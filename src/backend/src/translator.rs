use {
    crate::{
        c::{self, Program},
        compile_command, Position, Warning,
    },
    frontend::Token,
};

/// Something seen inside the outermost open loop, kept in source order until
/// that loop closes.
#[derive(Debug)]
enum Pending {
    Command { command: char, position: Position },
    Open,
    Close,
}

/// State for a single translation. Commands outside any loop are compiled as
/// they are seen; commands inside a loop are buffered until the outermost loop
/// closes and are only checked then.
struct Translator {
    output: String,
    /// Where each currently open `[` was, innermost last.
    open_loops: Vec<Position>,
    /// Body of the outermost open loop, nested loops flattened.
    pending: Vec<Pending>,
    warnings: Vec<Warning>,
}

impl Translator {
    fn new() -> Self {
        Translator {
            output: c::preamble(),
            open_loops: Vec::new(),
            pending: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn command(&mut self, command: char, position: Position) {
        if self.open_loops.is_empty() {
            self.emit_command(command, position, 1);
        } else {
            self.pending.push(Pending::Command { command, position });
        }
    }

    fn open_loop(&mut self, position: Position) {
        if !self.open_loops.is_empty() {
            self.pending.push(Pending::Open);
        }
        self.open_loops.push(position);
    }

    fn close_loop(&mut self, position: Position) {
        if self.open_loops.pop().is_none() {
            self.warnings.push(Warning::UnmatchedLoopClose { position });
            self.open_while(1);
            self.close_while(1);
        } else if self.open_loops.is_empty() {
            self.flush();
        } else {
            self.pending.push(Pending::Close);
        }
    }

    /// Emits the outermost loop once it has closed.
    fn flush(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        self.open_while(1);
        let mut depth = 2;
        for event in pending {
            match event {
                Pending::Command { command, position } => {
                    self.emit_command(command, position, depth)
                }
                Pending::Open => {
                    self.open_while(depth);
                    depth += 1;
                }
                Pending::Close => {
                    depth -= 1;
                    self.close_while(depth);
                }
            }
        }
        self.close_while(1);
    }

    fn emit_command(&mut self, command: char, position: Position, depth: usize) {
        match compile_command(command, depth) {
            Some(fragment) => self.output.push_str(&fragment),
            None => self
                .warnings
                .push(Warning::UnrecognizedInstruction { command, position }),
        }
    }

    fn open_while(&mut self, depth: usize) {
        c::push_line(&mut self.output, depth);
        self.output.push_str("while(cells[currentCell] != 0) {");
    }

    fn close_while(&mut self, depth: usize) {
        c::push_line(&mut self.output, depth);
        self.output.push('}');
    }

    fn finish(mut self) -> Program {
        // bodies of loops that never closed are dropped without being checked
        self.warnings.extend(
            self.open_loops
                .drain(..)
                .map(|position| Warning::UnclosedLoop { position }),
        );
        self.output.push_str(c::EPILOGUE);
        Program {
            code: self.output,
            warnings: self.warnings,
        }
    }
}

pub(crate) fn translate(tokens: &[Token]) -> Program {
    let mut translator = Translator::new();
    let mut position = Position::start();
    for &token in tokens {
        match token {
            Token::Layout(_) => {}
            Token::OpenBracket => translator.open_loop(position),
            Token::CloseBracket => translator.close_loop(position),
            Token::Command(command) => translator.command(command, position),
        }
        position.advance(token.source_char());
    }
    translator.finish()
}
