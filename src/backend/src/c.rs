//! Shape of the generated C program.

use {crate::Warning, std::fmt};

/// Number of cells on the generated program's tape.
pub const TAPE_LEN: usize = 30000;

/// Cell the generated program's pointer starts on.
pub const START_CELL: usize = 15000;

pub(crate) const INDENT: char = '\t';

pub(crate) fn preamble() -> String {
    format!(
        "// Generated by bf2c
#include <stdio.h>

int main() {{
{INDENT}int cells[{TAPE_LEN}];
{INDENT}int currentCell = {START_CELL};

{INDENT}for (int i = 0; i < {TAPE_LEN}; i++) {{
{INDENT}{INDENT}cells[i] = 0;
{INDENT}}}
"
    )
}

pub(crate) const EPILOGUE: &str = "\n}";

/// Starts a new statement line at the given indentation depth.
pub(crate) fn push_line(output: &mut String, depth: usize) {
    output.push('\n');
    output.extend(std::iter::repeat(INDENT).take(depth));
}

/// A translated program together with what was skipped to produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub code: String,
    pub warnings: Vec<Warning>,
}

impl Program {
    pub fn structural_warnings(&self) -> impl Iterator<Item = &Warning> {
        self.warnings.iter().filter(|warning| warning.is_structural())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.code)
    }
}
