//! 规则字符串词法分析器
//!
//! 将规则字符串切分为带位置信息的 token 序列。
//! `AND`/`OR` 关键字不区分大小写，在标识符扫描之后识别；
//! 比较符采用最长匹配（`>=` 优先于 `>`）。

use crate::error::{Result, RuleError};
use crate::operators::{Comparator, LogicalOperator};
use serde_json::Number;
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

/// 词法单元类型
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Identifier(String),
    Number(Number),
    Str(String),
    Comparator(Comparator),
    Logical(LogicalOperator),
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "标识符 '{}'", name),
            Self::Number(n) => write!(f, "数字 {}", n),
            Self::Str(s) => write!(f, "字符串 '{}'", s),
            Self::Comparator(op) => write!(f, "'{}'", op),
            Self::Logical(op) => write!(f, "'{}'", op),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
        }
    }
}

/// 词法单元，`position` 为其在输入中的字节偏移
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// 切分规则字符串
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}

struct Lexer<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        while let Some(&(pos, c)) = self.chars.peek() {
            match c {
                c if c.is_whitespace() => {
                    self.chars.next();
                }
                '(' => {
                    self.chars.next();
                    tokens.push(Token::new(TokenKind::LParen, pos));
                }
                ')' => {
                    self.chars.next();
                    tokens.push(Token::new(TokenKind::RParen, pos));
                }
                '>' => {
                    self.chars.next();
                    let op = if self.eat('=') {
                        Comparator::Gte
                    } else {
                        Comparator::Gt
                    };
                    tokens.push(Token::new(TokenKind::Comparator(op), pos));
                }
                '<' => {
                    self.chars.next();
                    let op = if self.eat('=') {
                        Comparator::Lte
                    } else {
                        Comparator::Lt
                    };
                    tokens.push(Token::new(TokenKind::Comparator(op), pos));
                }
                '=' => {
                    self.chars.next();
                    tokens.push(Token::new(TokenKind::Comparator(Comparator::Eq), pos));
                }
                '!' => {
                    self.chars.next();
                    if !self.eat('=') {
                        return Err(RuleError::Lex {
                            position: pos,
                            message: "'!' 之后必须是 '='".to_string(),
                        });
                    }
                    tokens.push(Token::new(TokenKind::Comparator(Comparator::Neq), pos));
                }
                '\'' | '"' => {
                    let s = self.scan_string(pos, c)?;
                    tokens.push(Token::new(TokenKind::Str(s), pos));
                }
                '0'..='9' => {
                    let n = self.scan_number(pos)?;
                    tokens.push(Token::new(TokenKind::Number(n), pos));
                }
                c if c.is_ascii_alphabetic() || c == '_' => {
                    tokens.push(Token::new(self.scan_word(), pos));
                }
                other => {
                    return Err(RuleError::Lex {
                        position: pos,
                        message: format!("无法识别的字符 '{}'", other),
                    });
                }
            }
        }

        Ok(tokens)
    }

    fn eat(&mut self, expected: char) -> bool {
        if matches!(self.chars.peek(), Some(&(_, c)) if c == expected) {
            self.chars.next();
            return true;
        }
        false
    }

    /// 扫描单引号或双引号字符串，不处理转义
    fn scan_string(&mut self, start: usize, quote: char) -> Result<String> {
        self.chars.next();
        let mut text = String::new();

        loop {
            match self.chars.next() {
                Some((_, c)) if c == quote => return Ok(text),
                Some((_, c)) => text.push(c),
                None => {
                    return Err(RuleError::Lex {
                        position: start,
                        message: "未闭合的字符串字面量".to_string(),
                    });
                }
            }
        }
    }

    /// 扫描整数或小数字面量，整数优先保留为整型
    fn scan_number(&mut self, start: usize) -> Result<Number> {
        let mut text = String::new();
        let mut seen_dot = false;

        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_ascii_digit() || (c == '.' && !seen_dot) {
                seen_dot |= c == '.';
                text.push(c);
                self.chars.next();
            } else {
                break;
            }
        }

        let invalid = || RuleError::Lex {
            position: start,
            message: format!("无效的数字字面量 '{}'", text),
        };

        if !seen_dot {
            if let Ok(int) = text.parse::<i64>() {
                return Ok(Number::from(int));
            }
        }

        let value: f64 = text.parse().map_err(|_| invalid())?;
        Number::from_f64(value).ok_or_else(invalid)
    }

    /// 扫描标识符，随后判定是否为逻辑关键字
    fn scan_word(&mut self) -> TokenKind {
        let mut word = String::new();

        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                word.push(c);
                self.chars.next();
            } else {
                break;
            }
        }

        if word.eq_ignore_ascii_case("AND") {
            TokenKind::Logical(LogicalOperator::And)
        } else if word.eq_ignore_ascii_case("OR") {
            TokenKind::Logical(LogicalOperator::Or)
        } else {
            TokenKind::Identifier(word)
        }
    }
}
