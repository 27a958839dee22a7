//! 规则语法分析器
//!
//! 对 token 序列做算符优先级递归下降，产出规则 AST：
//!
//! ```text
//! expr       := term (OR term)*
//! term       := factor (AND factor)*
//! factor     := '(' expr ')' | comparison
//! comparison := IDENTIFIER COMPARATOR (NUMBER | STRING)
//! ```
//!
//! OR 优先级最低，AND 次之，括号强制分组。
//! 同级操作符左结合，折叠为左倾二叉树：
//! `a AND b AND c` 解析为 `AND(AND(a, b), c)`。

use crate::error::{Result, RuleError};
use crate::lexer::{Token, TokenKind, tokenize};
use crate::models::AstNode;
use crate::operators::LogicalOperator;
use serde_json::Value;
use std::sync::Arc;

/// 解析规则字符串为 AST
pub fn parse_rule(input: &str) -> Result<Arc<AstNode>> {
    RuleParser::new(tokenize(input)?).parse()
}

/// 括号嵌套深度上限
///
/// 解析按嵌套层级递归，深度必须有界，否则恶意输入可以耗尽调用栈。
/// 取值与 serde_json 反序列化的默认递归保护一致。
const MAX_NESTING_DEPTH: usize = 128;

/// 规则语法分析器
pub struct RuleParser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl RuleParser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// 解析完整表达式，拒绝末尾多余的 token
    pub fn parse(mut self) -> Result<Arc<AstNode>> {
        let root = self.expr()?;

        if let Some(token) = self.peek() {
            return Err(RuleError::Syntax {
                position: token.position,
                expected: "输入结束".to_string(),
                found: token.kind.to_string(),
            });
        }

        Ok(root)
    }

    // expr := term (OR term)*
    fn expr(&mut self) -> Result<Arc<AstNode>> {
        let mut left = self.term()?;

        while self.eat_logical(LogicalOperator::Or) {
            let right = self.term()?;
            left = Arc::new(AstNode::join(LogicalOperator::Or, left, right));
        }

        Ok(left)
    }

    // term := factor (AND factor)*
    fn term(&mut self) -> Result<Arc<AstNode>> {
        let mut left = self.factor()?;

        while self.eat_logical(LogicalOperator::And) {
            let right = self.factor()?;
            left = Arc::new(AstNode::join(LogicalOperator::And, left, right));
        }

        Ok(left)
    }

    // factor := '(' expr ')' | comparison
    fn factor(&mut self) -> Result<Arc<AstNode>> {
        if let Some(position) = self.eat_lparen() {
            self.depth += 1;
            if self.depth > MAX_NESTING_DEPTH {
                return Err(RuleError::Syntax {
                    position,
                    expected: format!("括号嵌套深度不超过 {MAX_NESTING_DEPTH}"),
                    found: "'('".to_string(),
                });
            }

            let inner = self.expr()?;
            self.depth -= 1;

            match self.next() {
                Some(Token {
                    kind: TokenKind::RParen,
                    ..
                }) => Ok(inner),
                other => Err(self.unexpected("')'", other)),
            }
        } else {
            self.comparison()
        }
    }

    // comparison := IDENTIFIER COMPARATOR (NUMBER | STRING)
    fn comparison(&mut self) -> Result<Arc<AstNode>> {
        let attribute = match self.next() {
            Some(Token {
                kind: TokenKind::Identifier(name),
                ..
            }) => name,
            other => return Err(self.unexpected("属性标识符", other)),
        };

        let comparator = match self.next() {
            Some(Token {
                kind: TokenKind::Comparator(op),
                ..
            }) => op,
            other => return Err(self.unexpected("比较操作符", other)),
        };

        let value = match self.next() {
            Some(Token {
                kind: TokenKind::Number(n),
                ..
            }) => Value::Number(n),
            Some(Token {
                kind: TokenKind::Str(s),
                ..
            }) => Value::String(s),
            other => return Err(self.unexpected("数字或字符串字面量", other)),
        };

        Ok(Arc::new(AstNode::Operand {
            attribute,
            comparator,
            value,
        }))
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat_logical(&mut self, op: LogicalOperator) -> bool {
        if matches!(self.peek(), Some(t) if t.kind == TokenKind::Logical(op)) {
            self.pos += 1;
            return true;
        }
        false
    }

    /// 消费一个左括号，返回其字节偏移
    fn eat_lparen(&mut self) -> Option<usize> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::LParen => {
                let position = t.position;
                self.pos += 1;
                Some(position)
            }
            _ => None,
        }
    }

    fn unexpected(&self, expected: &str, found: Option<Token>) -> RuleError {
        match found {
            Some(token) => RuleError::Syntax {
                position: token.position,
                expected: expected.to_string(),
                found: token.kind.to_string(),
            },
            None => RuleError::Syntax {
                position: self.tokens.last().map(|t| t.position).unwrap_or(0),
                expected: expected.to_string(),
                found: "输入结束".to_string(),
            },
        }
    }
}
