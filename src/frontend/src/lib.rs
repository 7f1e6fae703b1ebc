mod lexer;

pub use lexer::Token;

/// A brainfuck source file, classified character by character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub tokens: Vec<Token>,
}

impl TryFrom<&str> for Source {
    type Error = anyhow::Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        use chumsky::Parser;

        let tokens = match lexer::lexer().parse(src).into_result() {
            Ok(tokens) => tokens,
            Err(errs) => anyhow::bail!(errs
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")),
        };

        Ok(Source { tokens })
    }
}
