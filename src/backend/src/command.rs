use {
    crate::c::{self, TAPE_LEN},
    derive_more::Display,
};

/// The brainfuck commands that compile to a single C statement. Loops are
/// handled by the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Command {
    #[display("+")]
    Increment,
    #[display("-")]
    Decrement,
    #[display("<")]
    Left,
    #[display(">")]
    Right,
    #[display(",")]
    Input,
    #[display(".")]
    Output,
}

impl TryFrom<char> for Command {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            '+' => Command::Increment,
            '-' => Command::Decrement,
            '<' => Command::Left,
            '>' => Command::Right,
            ',' => Command::Input,
            '.' => Command::Output,
            _ => return Err(c),
        })
    }
}

impl Command {
    fn push_statement(self, output: &mut String) {
        match self {
            Command::Increment => output.push_str("cells[currentCell] += 1;"),
            // cells never go below zero
            Command::Decrement => {
                output.push_str("if(cells[currentCell] != 0){cells[currentCell] -= 1;}")
            }
            // the pointer stays on the tape
            Command::Left => output.push_str("if(currentCell != 0){currentCell -= 1;}"),
            Command::Right => output.push_str(&format!(
                "if(currentCell != {}){{currentCell += 1;}}",
                TAPE_LEN - 1
            )),
            Command::Input => output.push_str("cells[currentCell] = (int)getchar();"),
            Command::Output => output.push_str("printf(\"%c\", cells[currentCell]);"),
        }
    }

    fn emit(self, output: &mut String, depth: usize) {
        c::push_line(output, depth);
        self.push_statement(output);
    }
}

/// Compiles one command character to a C statement on its own line, indented
/// `depth` levels. Returns `None` for characters that are not commands.
pub fn compile_command(command: char, depth: usize) -> Option<String> {
    let command = Command::try_from(command).ok()?;
    let mut output = String::new();
    command.emit(&mut output, depth);
    Some(output)
}
