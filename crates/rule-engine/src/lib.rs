//! 规则 DSL 引擎
//!
//! 提供规则表达式的完整处理能力：
//! - 词法与语法分析，将规则字符串编译为 AST
//! - 短路求值，对属性记录评估规则
//! - 多规则组合，按频次启发式确定连接操作符
//!
//! 三个操作都是纯函数，无共享可变状态，可在并发任务中安全调用。

pub mod combiner;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod models;
pub mod operators;
pub mod parser;

pub use combiner::RuleCombiner;
pub use error::{Result, RuleError};
pub use evaluator::RuleEvaluator;
pub use lexer::{Token, TokenKind, tokenize};
pub use models::{AstNode, Record};
pub use operators::{Comparator, LogicalOperator};
pub use parser::{RuleParser, parse_rule};
