use super::token::{self, Token};
use unic_emoji_char::is_emoji_presentation;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Lex a whole source string into one token vector per physical line.
/// Empty lines are preserved and every line ends with a newline token.
pub fn lex(source: &str) -> Vec<Vec<Token>> {
    source.split('\n').map(LineLexer::lex).collect()
}

fn is_general(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '_' || c == '.' || is_emoji(c)
}

fn is_operator(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '!' | '|' | '^' | '&'
    )
}

fn is_separator(c: char) -> bool {
    matches!(c, ';' | ',' | '(' | ')' | '{' | '}' | '[' | ']')
}

// A scalar with emoji presentation or in Other_Symbol starts an emoji;
// join controls and variation selectors keep multi-scalar clusters
// (ZWJ sequences, keycaps, flags) inside a single token.
fn is_emoji(c: char) -> bool {
    matches!(c, '\u{200C}' | '\u{200D}')
        || ('\u{FE00}'..='\u{FE0F}').contains(&c)
        || is_emoji_presentation(c)
        || c.general_category() == GeneralCategory::OtherSymbol
}

struct LineLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Iterator for LineLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pk) = self.chars.peek() {
            if pk.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
        let pk = *self.chars.peek()?;
        if is_general(pk) {
            return self.general();
        }
        if is_operator(pk) {
            return self.operator();
        }
        if token::is_quote(pk) {
            return self.string();
        }
        if is_separator(pk) {
            self.chars.next();
            return Some(Token::from_text(pk.to_string()));
        }
        // Anything else (the dict-literal colon included) is taken one
        // character at a time; the classifier sorts it out.
        self.chars.next();
        Some(Token::from_text(pk.to_string()))
    }
}

impl<'a> LineLexer<'a> {
    fn lex(source_line: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = LineLexer {
            chars: source_line.chars().peekable(),
        }
        .collect();
        tokens.push(Token::newline());
        tokens
    }

    fn general(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(ch) = self.chars.next() {
            s.push(ch);
            if let Some(pk) = self.chars.peek() {
                if is_general(*pk) {
                    continue;
                }
            }
            break;
        }
        Some(Token::from_text(s))
    }

    fn operator(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(ch) = self.chars.next() {
            s.push(ch);
            if let Some(pk) = self.chars.peek() {
                if is_operator(*pk) {
                    continue;
                }
            }
            break;
        }
        Some(Token::from_text(s))
    }

    fn string(&mut self) -> Option<Token> {
        let mut s = String::new();
        if let Some(quote) = self.chars.next() {
            s.push(quote);
        }
        while let Some(ch) = self.chars.next() {
            s.push(ch);
            if token::is_quote(ch) {
                break;
            }
        }
        Some(Token::from_text(s))
    }
}
