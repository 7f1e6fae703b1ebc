use {
    chumsky::prelude::{Parser as ChumskyParser, *},
    derive_more::Display,
};

pub(super) trait Parser<'src, Output>:
    ChumskyParser<'src, &'src str, Output, extra::Err<Rich<'src, char>>> + Clone
{
}
impl<
        'src,
        Output,
        T: ChumskyParser<'src, &'src str, Output, extra::Err<Rich<'src, char>>> + Clone,
    > Parser<'src, Output> for T
{
}

/// Characters that carry no meaning in brainfuck source.
const LAYOUT: &str = " \t\n\r\x0c";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Token {
    // loop delimiters
    #[display("[")]
    OpenBracket,
    #[display("]")]
    CloseBracket,
    // whitespace
    #[display("{}", _0.escape_default())]
    Layout(char),
    // anything else; recognized or rejected by the code generator
    Command(char),
}

impl Token {
    pub fn source_char(self) -> char {
        match self {
            Token::OpenBracket => '[',
            Token::CloseBracket => ']',
            Token::Layout(c) | Token::Command(c) => c,
        }
    }
}

fn bracket_lexer<'src>() -> impl Parser<'src, Token> {
    choice([
        just('[').to(Token::OpenBracket),
        just(']').to(Token::CloseBracket),
    ])
}

fn layout_lexer<'src>() -> impl Parser<'src, Token> {
    one_of(LAYOUT).map(Token::Layout)
}

fn command_lexer<'src>() -> impl Parser<'src, Token> {
    any().map(Token::Command)
}

pub(super) fn lexer<'src>() -> impl Parser<'src, Vec<Token>> {
    choice((bracket_lexer(), layout_lexer(), command_lexer()))
        .repeated()
        .collect()
        .then_ignore(end())
}

#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    fn lex(src: &str) -> Vec<Token> {
        lexer().parse(src).into_result().unwrap()
    }

    #[rstest]
    #[case('[', Token::OpenBracket)]
    #[case(']', Token::CloseBracket)]
    #[case('\n', Token::Layout('\n'))]
    #[case('\t', Token::Layout('\t'))]
    #[case(' ', Token::Layout(' '))]
    #[case('\r', Token::Layout('\r'))]
    #[case('+', Token::Command('+'))]
    #[case('.', Token::Command('.'))]
    #[case('x', Token::Command('x'))]
    #[case('é', Token::Command('é'))]
    fn classifies_single_characters(#[case] c: char, #[case] expected: Token) {
        assert_eq!(lex(&c.to_string()), [expected]);
        assert_eq!(expected.source_char(), c);
    }

    #[test]
    fn keeps_every_character_in_order() {
        assert_eq!(
            lex("+[-]\n"),
            [
                Token::Command('+'),
                Token::OpenBracket,
                Token::Command('-'),
                Token::CloseBracket,
                Token::Layout('\n'),
            ]
        );
    }

    #[test]
    fn empty_source_has_no_tokens() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn displays_layout_escaped() {
        assert_eq!(Token::Layout('\n').to_string(), "\\n");
        assert_eq!(Token::Command('x').to_string(), "x");
        assert_eq!(Token::CloseBracket.to_string(), "]");
    }
}
