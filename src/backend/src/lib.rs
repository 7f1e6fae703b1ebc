pub mod c;
mod command;
mod diagnostics;
mod translator;

pub use {
    command::{compile_command, Command},
    diagnostics::{Position, Warning},
};

use frontend::Source;

impl From<&Source> for c::Program {
    fn from(source: &Source) -> Self {
        translator::translate(&source.tokens)
    }
}
