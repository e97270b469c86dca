//! Tokenizer for schema-document text.
//!
//! Produces a flat token stream with line/column positions. `#` comments are
//! not discarded: each comment line is attached to the following token as
//! leading trivia, which is how hand-written commentary survives a
//! parse/print cycle.

use crate::error::{SdlError, SdlResult};

/// A single token with its position and any comment lines preceding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
    /// Comment lines (without the leading `#`) seen before this token.
    pub leading_comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Name(String),
    Int(i64),
    Str(String),
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Colon,
    At,
    Bang,
    Comma,
    Eof,
}

impl TokenKind {
    /// Human-readable description for error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Name(n) => format!("name `{n}`"),
            TokenKind::Int(i) => format!("integer `{i}`"),
            TokenKind::Str(_) => "string literal".to_string(),
            TokenKind::LBrace => "`{`".to_string(),
            TokenKind::RBrace => "`}`".to_string(),
            TokenKind::LParen => "`(`".to_string(),
            TokenKind::RParen => "`)`".to_string(),
            TokenKind::LBracket => "`[`".to_string(),
            TokenKind::RBracket => "`]`".to_string(),
            TokenKind::Colon => "`:`".to_string(),
            TokenKind::At => "`@`".to_string(),
            TokenKind::Bang => "`!`".to_string(),
            TokenKind::Comma => "`,`".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// Tokenizes the whole input, ending with a single `Eof` token.
pub(crate) fn tokenize(text: &str) -> SdlResult<Vec<Token>> {
    Lexer::new(text).run()
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
    pending_comments: Vec<String>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            line: 1,
            column: 1,
            pending_comments: Vec::new(),
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> SdlResult<Vec<Token>> {
        while let Some(&c) = self.chars.peek() {
            match c {
                ' ' | '\t' | '\r' | '\n' => {
                    self.bump();
                }
                '#' => self.comment(),
                '{' => self.punct(TokenKind::LBrace),
                '}' => self.punct(TokenKind::RBrace),
                '(' => self.punct(TokenKind::LParen),
                ')' => self.punct(TokenKind::RParen),
                '[' => self.punct(TokenKind::LBracket),
                ']' => self.punct(TokenKind::RBracket),
                ':' => self.punct(TokenKind::Colon),
                '@' => self.punct(TokenKind::At),
                '!' => self.punct(TokenKind::Bang),
                ',' => self.punct(TokenKind::Comma),
                '"' => self.string()?,
                c if c == '_' || c.is_ascii_alphabetic() => self.name(),
                c if c.is_ascii_digit() || c == '-' => self.int()?,
                other => {
                    return Err(SdlError::parse(
                        self.line,
                        self.column,
                        format!("unexpected character `{other}`"),
                    ));
                }
            }
        }
        let (line, column) = (self.line, self.column);
        self.push(TokenKind::Eof, line, column);
        Ok(self.tokens)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn push(&mut self, kind: TokenKind, line: usize, column: usize) {
        let leading_comments = std::mem::take(&mut self.pending_comments);
        self.tokens.push(Token {
            kind,
            line,
            column,
            leading_comments,
        });
    }

    fn punct(&mut self, kind: TokenKind) {
        let (line, column) = (self.line, self.column);
        self.bump();
        self.push(kind, line, column);
    }

    fn comment(&mut self) {
        self.bump(); // consume `#`
        // one optional space after `#` is formatting, not content
        if self.chars.peek() == Some(&' ') {
            self.bump();
        }
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.bump();
        }
        self.pending_comments.push(text);
    }

    fn name(&mut self) {
        let (line, column) = (self.line, self.column);
        let mut name = String::new();
        while let Some(&c) = self.chars.peek() {
            if c == '_' || c.is_ascii_alphanumeric() {
                name.push(c);
                self.bump();
            } else {
                break;
            }
        }
        self.push(TokenKind::Name(name), line, column);
    }

    fn int(&mut self) -> SdlResult<()> {
        let (line, column) = (self.line, self.column);
        let mut digits = String::new();
        if self.chars.peek() == Some(&'-') {
            digits.push('-');
            self.bump();
        }
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.bump();
            } else {
                break;
            }
        }
        let value: i64 = digits
            .parse()
            .map_err(|_| SdlError::parse(line, column, format!("invalid integer `{digits}`")))?;
        self.push(TokenKind::Int(value), line, column);
        Ok(())
    }

    fn string(&mut self) -> SdlResult<()> {
        let (line, column) = (self.line, self.column);
        self.bump(); // opening quote
        let mut value = String::new();
        loop {
            match self.bump() {
                None => {
                    return Err(SdlError::parse(line, column, "unterminated string literal"));
                }
                Some('"') => break,
                Some('\\') => match self.bump() {
                    Some('"') => value.push('"'),
                    Some('\\') => value.push('\\'),
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some(other) => {
                        return Err(SdlError::parse(
                            self.line,
                            self.column,
                            format!("unknown escape `\\{other}`"),
                        ));
                    }
                    None => {
                        return Err(SdlError::parse(line, column, "unterminated string literal"));
                    }
                },
                Some('\n') => {
                    return Err(SdlError::parse(line, column, "unterminated string literal"));
                }
                Some(c) => value.push(c),
            }
        }
        self.push(TokenKind::Str(value), line, column);
        Ok(())
    }
}
