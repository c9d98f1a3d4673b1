use std::collections::HashMap;

thread_local!(
    static STRING_TO_KIND: HashMap<&'static str, Kind> = STRINGS.iter().cloned().collect();
);

/// Decimal text of π, folded in by the classifier so `pi` and `π`
/// behave as ordinary double literals downstream.
const PI_TEXT: &str = "3.141592653589793";

#[rustfmt::skip]
const STRINGS: &[(&str, Kind)] = &[
    ("print", Kind::Word(Word::Print)),
    ("if", Kind::Word(Word::If)),
    ("then", Kind::Word(Word::Then)),
    ("input", Kind::Word(Word::Input)),
    ("let", Kind::Word(Word::Let)),
    ("goto", Kind::Word(Word::Goto)),
    ("gosub", Kind::Word(Word::Gosub)),
    ("return", Kind::Word(Word::Return)),
    ("clear", Kind::Word(Word::Clear)),
    ("list", Kind::Word(Word::List)),
    ("end", Kind::Word(Word::End)),
    ("rem", Kind::Word(Word::Rem)),
    ("for", Kind::Word(Word::For)),
    ("in", Kind::Word(Word::In)),
    ("to", Kind::Word(Word::To)),
    ("next", Kind::Word(Word::Next)),
    ("dict", Kind::Word(Word::Dict)),
    ("+", Kind::Operator(Operator::Plus)),
    ("-", Kind::Operator(Operator::Minus)),
    ("*", Kind::Operator(Operator::Multiply)),
    ("/", Kind::Operator(Operator::Divide)),
    ("%", Kind::Operator(Operator::Modulus)),
    ("**", Kind::Operator(Operator::Power)),
    ("<<", Kind::Operator(Operator::ShiftLeft)),
    (">>", Kind::Operator(Operator::ShiftRight)),
    ("&", Kind::Operator(Operator::And)),
    ("|", Kind::Operator(Operator::Or)),
    ("^", Kind::Operator(Operator::Xor)),
    ("=", Kind::Assignment(Assignment::Assign)),
    ("+=", Kind::Assignment(Assignment::AddAssign)),
    ("-=", Kind::Assignment(Assignment::SubAssign)),
    ("*=", Kind::Assignment(Assignment::MulAssign)),
    ("/=", Kind::Assignment(Assignment::DivAssign)),
    ("%=", Kind::Assignment(Assignment::ModAssign)),
    ("==", Kind::Relation(Relation::Equal)),
    ("!=", Kind::Relation(Relation::NotEqual)),
    ("<", Kind::Relation(Relation::Less)),
    (">", Kind::Relation(Relation::Greater)),
    ("<=", Kind::Relation(Relation::LessEqual)),
    (">=", Kind::Relation(Relation::GreaterEqual)),
    ("sin", Kind::Function(Function::Sin)),
    ("cos", Kind::Function(Function::Cos)),
    ("tan", Kind::Function(Function::Tan)),
    ("sec", Kind::Function(Function::Sec)),
    ("csc", Kind::Function(Function::Csc)),
    ("cot", Kind::Function(Function::Cot)),
    ("asin", Kind::Function(Function::Asin)),
    ("acos", Kind::Function(Function::Acos)),
    ("atan", Kind::Function(Function::Atan)),
    ("rand", Kind::Function(Function::Rand)),
    ("len", Kind::Function(Function::Len)),
    ("count", Kind::Function(Function::Count)),
    ("(", Kind::LParen),
    (")", Kind::RParen),
    ("[", Kind::LBracket),
    ("]", Kind::RBracket),
    ("{", Kind::LBrace),
    ("}", Kind::RBrace),
    (",", Kind::Comma),
    (";", Kind::Semicolon),
    (":", Kind::Colon),
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Kind {
    Identifier,
    Word(Word),
    Operator(Operator),
    Assignment(Assignment),
    Relation(Relation),
    Function(Function),
    Literal(Literal),
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Colon,
    Newline,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Word {
    Print,
    If,
    Then,
    Input,
    Let,
    Goto,
    Gosub,
    Return,
    Clear,
    List,
    End,
    Rem,
    For,
    In,
    To,
    Next,
    Dict,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
    Power,
    ShiftLeft,
    ShiftRight,
    And,
    Or,
    Xor,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Assignment {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Relation {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Sec,
    Csc,
    Cot,
    Asin,
    Acos,
    Atan,
    Rand,
    Len,
    Count,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Literal {
    Integer,
    Double,
    String,
}

pub fn is_quote(c: char) -> bool {
    matches!(c, '"' | '“' | '”' | '«' | '»' | '「' | '」')
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: Kind,
    text: String,
    label: bool,
}

impl Token {
    /// Classify raw text into a token. Keywords and operators match
    /// case-insensitively; `pi`/`π` fold to a double literal; the rest
    /// falls through integer, double, and string detection to identifier.
    pub fn from_text(text: String) -> Token {
        let lower = text.to_lowercase();
        if lower == "pi" || lower == "π" {
            return Token {
                kind: Kind::Literal(Literal::Double),
                text: PI_TEXT.to_string(),
                label: false,
            };
        }
        let kind = match STRING_TO_KIND.with(|map| map.get(lower.as_str()).copied()) {
            Some(kind) => kind,
            None => {
                if text.parse::<i64>().is_ok() {
                    Kind::Literal(Literal::Integer)
                } else if text.parse::<f64>().is_ok() {
                    Kind::Literal(Literal::Double)
                } else if Token::is_quoted(&text) {
                    Kind::Literal(Literal::String)
                } else {
                    Kind::Identifier
                }
            }
        };
        Token {
            kind,
            text,
            label: false,
        }
    }

    pub fn newline() -> Token {
        Token {
            kind: Kind::Newline,
            text: "\n".to_string(),
            label: false,
        }
    }

    fn is_quoted(text: &str) -> bool {
        let mut chars = text.chars();
        match (chars.next(), chars.next_back()) {
            (Some(first), Some(last)) => is_quote(first) && is_quote(last),
            _ => false,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_label(&self) -> bool {
        self.label
    }

    pub fn mark_label(&mut self) {
        self.label = true;
    }

    pub fn is_relation(&self) -> bool {
        matches!(self.kind, Kind::Relation(_))
    }

    pub fn is_assignment(&self) -> bool {
        matches!(self.kind, Kind::Assignment(_))
    }

    /// The contents of a string literal without its surrounding quotes.
    pub fn string_value(&self) -> &str {
        let mut indices = self.text.char_indices();
        let start = match indices.next() {
            Some((_, c)) => c.len_utf8(),
            None => return "",
        };
        let end = match indices.next_back() {
            Some((i, _)) => i,
            None => return "",
        };
        if end < start {
            return "";
        }
        &self.text[start..end]
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_fold_case() {
        assert_eq!(Token::from_text("PRINT".into()).kind(), Kind::Word(Word::Print));
        assert_eq!(Token::from_text("GoSub".into()).kind(), Kind::Word(Word::Gosub));
        assert_eq!(Token::from_text("pickles".into()).kind(), Kind::Identifier);
    }

    #[test]
    fn test_pi_folds_to_double() {
        let t = Token::from_text("pi".into());
        assert_eq!(t.kind(), Kind::Literal(Literal::Double));
        assert_eq!(t.text(), "3.141592653589793");
        let t = Token::from_text("π".into());
        assert_eq!(t.text(), "3.141592653589793");
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            Token::from_text("**".into()).kind(),
            Kind::Operator(Operator::Power)
        );
        assert_eq!(
            Token::from_text("<=".into()).kind(),
            Kind::Relation(Relation::LessEqual)
        );
        assert!(Token::from_text("+=".into()).is_assignment());
        assert!(Token::from_text(">=".into()).is_relation());
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            Token::from_text("42".into()).kind(),
            Kind::Literal(Literal::Integer)
        );
        assert_eq!(
            Token::from_text("4.25".into()).kind(),
            Kind::Literal(Literal::Double)
        );
        assert_eq!(
            Token::from_text("\"hi\"".into()).kind(),
            Kind::Literal(Literal::String)
        );
    }

    #[test]
    fn test_string_value_strips_quotes() {
        assert_eq!(Token::from_text("\"hi\"".into()).string_value(), "hi");
        assert_eq!(Token::from_text("«hi»".into()).string_value(), "hi");
        assert_eq!(Token::from_text("「こんにちは」".into()).string_value(), "こんにちは");
        assert_eq!(Token::from_text("\"\"".into()).string_value(), "");
    }
}
