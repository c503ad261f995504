//! Expression parser
//!
//! A recursive descent parser for rendered expression text with
//! conventional operator precedence. The grammar is deliberately closed:
//! numeric literals, `+ - * / ^ %`, and parenthesised grouping. Nothing
//! else is accepted, so expression text can never reach a general
//! code-execution facility.

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{EvalError, EvalResult};

/// Parse expression text into an AST
///
/// # Example
/// ```rust
/// use tally_formula::parse_expression;
///
/// let ast = parse_expression("1+2*3").unwrap();
/// let ast = parse_expression("(100-50)*0.4").unwrap();
/// assert!(parse_expression("1+*2").is_err());
/// ```
pub fn parse_expression(input: &str) -> EvalResult<Expr> {
    let mut parser = ExprParser::new(input)?;
    let expr = parser.parse_expression()?;

    // Make sure we consumed all input
    if !matches!(parser.current_token(), ScanToken::Eof) {
        return Err(EvalError::Syntax(format!(
            "Unexpected trailing input: '{}'",
            &parser.input[parser.token_start..]
        )));
    }

    Ok(expr)
}

/// Token types produced by the scanner
#[derive(Debug, Clone, PartialEq)]
enum ScanToken {
    Number(f64),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Percent,

    // Delimiters
    LeftParen,
    RightParen,

    // End of input
    Eof,
}

impl ScanToken {
    fn describe(&self) -> String {
        match self {
            ScanToken::Number(n) => format!("number {}", n),
            ScanToken::Plus => "'+'".into(),
            ScanToken::Minus => "'-'".into(),
            ScanToken::Star => "'*'".into(),
            ScanToken::Slash => "'/'".into(),
            ScanToken::Caret => "'^'".into(),
            ScanToken::Percent => "'%'".into(),
            ScanToken::LeftParen => "'('".into(),
            ScanToken::RightParen => "')'".into(),
            ScanToken::Eof => "end of input".into(),
        }
    }
}

/// Expression parser
struct ExprParser<'a> {
    input: &'a str,
    pos: usize,
    /// Start offset of the current token, for error reporting
    token_start: usize,
    current_token: ScanToken,
}

impl<'a> ExprParser<'a> {
    fn new(input: &'a str) -> EvalResult<Self> {
        let mut parser = Self {
            input,
            pos: 0,
            token_start: 0,
            current_token: ScanToken::Eof,
        };
        parser.advance_token()?;
        Ok(parser)
    }

    // === Token scanning ===

    fn advance_token(&mut self) -> EvalResult<()> {
        self.skip_whitespace();
        self.token_start = self.pos;
        self.current_token = self.scan_token()?;
        Ok(())
    }

    fn scan_token(&mut self) -> EvalResult<ScanToken> {
        if self.is_at_end() {
            return Ok(ScanToken::Eof);
        }

        let c = self.peek_char().unwrap();

        match c {
            '+' => {
                self.advance();
                return Ok(ScanToken::Plus);
            }
            '-' => {
                self.advance();
                return Ok(ScanToken::Minus);
            }
            '*' => {
                self.advance();
                return Ok(ScanToken::Star);
            }
            '/' => {
                self.advance();
                return Ok(ScanToken::Slash);
            }
            '^' => {
                self.advance();
                return Ok(ScanToken::Caret);
            }
            '%' => {
                self.advance();
                return Ok(ScanToken::Percent);
            }
            '(' => {
                self.advance();
                return Ok(ScanToken::LeftParen);
            }
            ')' => {
                self.advance();
                return Ok(ScanToken::RightParen);
            }
            _ => {}
        }

        if c.is_ascii_digit() || c == '.' {
            return self.scan_number();
        }

        Err(EvalError::Syntax(format!("Unexpected character: '{}'", c)))
    }

    fn scan_number(&mut self) -> EvalResult<ScanToken> {
        let start = self.pos;

        // Integer part
        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }

        // Decimal part
        if self.peek_char() == Some('.') {
            self.advance();
            while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // Exponent part
        if self.peek_char().map_or(false, |c| c == 'e' || c == 'E') {
            self.advance();
            if self.peek_char().map_or(false, |c| c == '+' || c == '-') {
                self.advance();
            }
            while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let num_str = &self.input[start..self.pos];
        let num: f64 = num_str
            .parse()
            .map_err(|_| EvalError::Syntax(format!("Invalid number: '{}'", num_str)))?;
        Ok(ScanToken::Number(num))
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_whitespace()) {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn current_token(&self) -> &ScanToken {
        &self.current_token
    }

    fn consume(&mut self) -> EvalResult<ScanToken> {
        let token = self.current_token.clone();
        self.advance_token()?;
        Ok(token)
    }

    fn expect(&mut self, expected: &ScanToken) -> EvalResult<()> {
        if self.current_token() == expected {
            self.consume()?;
            Ok(())
        } else {
            Err(EvalError::Syntax(format!(
                "Expected {}, got {}",
                expected.describe(),
                self.current_token().describe()
            )))
        }
    }

    // === Expression parsing with precedence ===
    // Precedence (lowest to highest):
    // 1. Addition/Subtraction: +, -
    // 2. Multiplication/Division/Modulo: *, /, %
    // 3. Exponentiation: ^ (right associative)
    // 4. Unary: -, +
    // 5. Primary: numeric literals, parentheses

    fn parse_expression(&mut self) -> EvalResult<Expr> {
        self.parse_additive()
    }

    fn parse_additive(&mut self) -> EvalResult<Expr> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.current_token() {
                ScanToken::Plus => BinaryOperator::Add,
                ScanToken::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.consume()?;
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> EvalResult<Expr> {
        let mut left = self.parse_exponent()?;

        loop {
            let op = match self.current_token() {
                ScanToken::Star => BinaryOperator::Multiply,
                ScanToken::Slash => BinaryOperator::Divide,
                ScanToken::Percent => BinaryOperator::Modulo,
                _ => break,
            };

            self.consume()?;
            let right = self.parse_exponent()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_exponent(&mut self) -> EvalResult<Expr> {
        let left = self.parse_unary()?;

        if matches!(self.current_token(), ScanToken::Caret) {
            self.consume()?;
            let right = self.parse_exponent()?; // Right associative
            return Ok(Expr::BinaryOp {
                op: BinaryOperator::Power,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> EvalResult<Expr> {
        // Prefix minus
        if matches!(self.current_token(), ScanToken::Minus) {
            self.consume()?;
            let operand = self.parse_unary()?;
            return Ok(Expr::UnaryOp {
                op: UnaryOperator::Negate,
                operand: Box::new(operand),
            });
        }

        // Prefix plus (no-op)
        if matches!(self.current_token(), ScanToken::Plus) {
            self.consume()?;
            return self.parse_unary();
        }

        self.parse_primary()
    }

    fn parse_primary(&mut self) -> EvalResult<Expr> {
        match self.current_token().clone() {
            ScanToken::Number(n) => {
                self.consume()?;
                Ok(Expr::Number(n))
            }

            ScanToken::LeftParen => {
                self.consume()?;
                if matches!(self.current_token(), ScanToken::RightParen) {
                    return Err(EvalError::Syntax("Empty parentheses".into()));
                }
                let expr = self.parse_expression()?;
                self.expect(&ScanToken::RightParen)?;
                Ok(expr)
            }

            other => Err(EvalError::Syntax(format!(
                "Unexpected {}",
                other.describe()
            ))),
        }
    }
}
