//! Recursive-descent parser for schema-document text.

use crate::ast::{
    Argument, Definition, Directive, Document, EnumDefinition, FieldDefinition, ScalarDefinition,
    TypeDefinition, TypeKeyword, TypeRef, Value,
};
use crate::error::{SdlError, SdlResult};
use crate::lexer::{tokenize, Token, TokenKind};

/// Parses schema text into a [`Document`].
///
/// Fails with a positioned [`SdlError::Parse`] on malformed input; callers
/// must not assume partial results.
pub fn parse(text: &str) -> SdlResult<Document> {
    let tokens = tokenize(text)?;
    Parser::new(tokens).document()
}

/// Non-failing variant of [`parse`] for contexts that must never error
/// (e.g. UI polling). Blank or malformed input yields an empty document.
#[must_use]
pub fn parse_or_empty(text: &str) -> Document {
    if text.trim().is_empty() {
        return Document::new();
    }
    parse(text).unwrap_or_default()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn error_at(&self, token: &Token, message: impl Into<String>) -> SdlError {
        SdlError::parse(token.line, token.column, message)
    }

    fn expect(&mut self, kind: &TokenKind) -> SdlResult<Token> {
        let token = self.advance();
        if &token.kind == kind {
            Ok(token)
        } else {
            Err(self.error_at(
                &token,
                format!("expected {}, found {}", kind.describe(), token.kind.describe()),
            ))
        }
    }

    fn expect_name(&mut self) -> SdlResult<(String, Token)> {
        let token = self.advance();
        match token.kind.clone() {
            TokenKind::Name(name) => Ok((name, token)),
            other => Err(self.error_at(&token, format!("expected a name, found {}", other.describe()))),
        }
    }

    fn document(&mut self) -> SdlResult<Document> {
        let mut doc = Document::new();
        loop {
            let token = self.peek().clone();
            match &token.kind {
                TokenKind::Eof => break,
                TokenKind::Name(keyword) => {
                    let definition = match keyword.as_str() {
                        "type" => Definition::Type(self.type_definition(TypeKeyword::Type)?),
                        "input" => Definition::Type(self.type_definition(TypeKeyword::Input)?),
                        "scalar" => Definition::Scalar(self.scalar_definition()?),
                        "enum" => Definition::Enum(self.enum_definition()?),
                        other => {
                            return Err(self.error_at(
                                &token,
                                format!("expected `type`, `input`, `scalar`, or `enum`, found `{other}`"),
                            ));
                        }
                    };
                    doc.definitions.push(definition);
                }
                other => {
                    return Err(self
                        .error_at(&token, format!("expected a definition, found {}", other.describe())));
                }
            }
        }
        // comments after the last definition attach to the Eof token
        doc.trailing_comments = self.peek().leading_comments.clone();
        Ok(doc)
    }

    fn type_definition(&mut self, keyword: TypeKeyword) -> SdlResult<TypeDefinition> {
        let keyword_token = self.advance();
        let (name, _) = self.expect_name()?;
        let directives = self.directives()?;
        self.expect(&TokenKind::LBrace)?;

        let mut fields = Vec::new();
        let trailing_comments;
        loop {
            let token = self.peek().clone();
            match &token.kind {
                TokenKind::RBrace => {
                    // comments just before `}` belong to this type's body
                    trailing_comments = self.advance().leading_comments;
                    break;
                }
                TokenKind::Name(_) => fields.push(self.field_definition()?),
                other => {
                    return Err(self.error_at(
                        &token,
                        format!("expected a field or `}}`, found {}", other.describe()),
                    ));
                }
            }
        }

        Ok(TypeDefinition {
            keyword,
            name,
            comments: keyword_token.leading_comments,
            directives,
            fields,
            trailing_comments,
        })
    }

    fn field_definition(&mut self) -> SdlResult<FieldDefinition> {
        let (name, name_token) = self.expect_name()?;
        self.expect(&TokenKind::Colon)?;
        let ty = self.type_ref()?;
        let directives = self.directives()?;
        Ok(FieldDefinition {
            name,
            ty,
            comments: name_token.leading_comments,
            directives,
        })
    }

    fn type_ref(&mut self) -> SdlResult<TypeRef> {
        let token = self.peek().clone();
        let mut ty = match &token.kind {
            TokenKind::LBracket => {
                self.advance();
                let inner = self.type_ref()?;
                self.expect(&TokenKind::RBracket)?;
                TypeRef::List(Box::new(inner))
            }
            TokenKind::Name(name) => {
                let name = name.clone();
                self.advance();
                TypeRef::Named(name)
            }
            other => {
                return Err(self
                    .error_at(&token, format!("expected a type reference, found {}", other.describe())));
            }
        };
        if self.peek().kind == TokenKind::Bang {
            self.advance();
            ty = TypeRef::NonNull(Box::new(ty));
        }
        Ok(ty)
    }

    fn directives(&mut self) -> SdlResult<Vec<Directive>> {
        let mut directives = Vec::new();
        while self.peek().kind == TokenKind::At {
            self.advance();
            let (name, _) = self.expect_name()?;
            let arguments = if self.peek().kind == TokenKind::LParen {
                self.arguments()?
            } else {
                Vec::new()
            };
            directives.push(Directive { name, arguments });
        }
        Ok(directives)
    }

    fn arguments(&mut self) -> SdlResult<Vec<Argument>> {
        self.expect(&TokenKind::LParen)?;
        let mut arguments = Vec::new();
        loop {
            let token = self.peek().clone();
            match &token.kind {
                TokenKind::RParen => {
                    self.advance();
                    break;
                }
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::Name(_) => {
                    let (name, _) = self.expect_name()?;
                    self.expect(&TokenKind::Colon)?;
                    let value = self.value()?;
                    arguments.push(Argument { name, value });
                }
                other => {
                    return Err(self.error_at(
                        &token,
                        format!("expected an argument or `)`, found {}", other.describe()),
                    ));
                }
            }
        }
        Ok(arguments)
    }

    fn value(&mut self) -> SdlResult<Value> {
        let token = self.advance();
        match token.kind.clone() {
            TokenKind::Str(s) => Ok(Value::Str(s)),
            TokenKind::Int(i) => Ok(Value::Int(i)),
            TokenKind::Name(n) => match n.as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Ok(Value::Enum(n)),
            },
            other => Err(self.error_at(&token, format!("expected a value, found {}", other.describe()))),
        }
    }

    fn scalar_definition(&mut self) -> SdlResult<ScalarDefinition> {
        let keyword_token = self.advance();
        let (name, _) = self.expect_name()?;
        let directives = self.directives()?;
        Ok(ScalarDefinition {
            name,
            comments: keyword_token.leading_comments,
            directives,
        })
    }

    fn enum_definition(&mut self) -> SdlResult<EnumDefinition> {
        let keyword_token = self.advance();
        let (name, _) = self.expect_name()?;
        let directives = self.directives()?;
        self.expect(&TokenKind::LBrace)?;
        let mut values = Vec::new();
        let trailing_comments;
        loop {
            let token = self.peek().clone();
            match &token.kind {
                TokenKind::RBrace => {
                    trailing_comments = self.advance().leading_comments;
                    break;
                }
                TokenKind::Name(_) => {
                    let (value, _) = self.expect_name()?;
                    values.push(value);
                }
                other => {
                    return Err(self.error_at(
                        &token,
                        format!("expected an enum value or `}}`, found {}", other.describe()),
                    ));
                }
            }
        }
        Ok(EnumDefinition {
            name,
            comments: keyword_token.leading_comments,
            directives,
            values,
            trailing_comments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_empty_document() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \n\t").unwrap().is_empty());
    }

    #[test]
    fn parse_or_empty_swallows_errors() {
        assert!(parse_or_empty("type {{{").is_empty());
        assert!(parse_or_empty("").is_empty());
    }

    #[test]
    fn reports_position_of_bad_definition() {
        let err = parse("type Order {\n  id ID!\n}").unwrap_err();
        match err {
            SdlError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
