//! Assignment, conditional and binary expression parsing

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::Parser;
use c2ssa_common::CompilerError;

/// Binary operator and its C precedence level (higher binds tighter)
fn binary_precedence(token_type: &TokenType) -> Option<(BinaryOp, u8)> {
    let entry = match token_type {
        TokenType::PipePipe => (BinaryOp::LogicalOr, 1),
        TokenType::AmpersandAmpersand => (BinaryOp::LogicalAnd, 2),
        TokenType::Pipe => (BinaryOp::BitOr, 3),
        TokenType::Caret => (BinaryOp::BitXor, 4),
        TokenType::Ampersand => (BinaryOp::BitAnd, 5),
        TokenType::EqualEqual => (BinaryOp::Equal, 6),
        TokenType::BangEqual => (BinaryOp::NotEqual, 6),
        TokenType::Less => (BinaryOp::Less, 7),
        TokenType::LessEqual => (BinaryOp::LessEqual, 7),
        TokenType::Greater => (BinaryOp::Greater, 7),
        TokenType::GreaterEqual => (BinaryOp::GreaterEqual, 7),
        TokenType::LeftShift => (BinaryOp::LeftShift, 8),
        TokenType::RightShift => (BinaryOp::RightShift, 8),
        TokenType::Plus => (BinaryOp::Add, 9),
        TokenType::Minus => (BinaryOp::Sub, 9),
        TokenType::Star => (BinaryOp::Mul, 10),
        TokenType::Slash => (BinaryOp::Div, 10),
        TokenType::Percent => (BinaryOp::Mod, 10),
        _ => return None,
    };
    Some(entry)
}

fn assignment_operator(token_type: &TokenType) -> Option<AssignOp> {
    let op = match token_type {
        TokenType::Equal => AssignOp::Assign,
        TokenType::StarEqual => AssignOp::MulAssign,
        TokenType::SlashEqual => AssignOp::DivAssign,
        TokenType::PercentEqual => AssignOp::ModAssign,
        TokenType::PlusEqual => AssignOp::AddAssign,
        TokenType::MinusEqual => AssignOp::SubAssign,
        TokenType::LeftShiftEqual => AssignOp::LeftShiftAssign,
        TokenType::RightShiftEqual => AssignOp::RightShiftAssign,
        TokenType::AmpersandEqual => AssignOp::BitAndAssign,
        TokenType::CaretEqual => AssignOp::BitXorAssign,
        TokenType::PipeEqual => AssignOp::BitOrAssign,
        _ => return None,
    };
    Some(op)
}

impl<'src> Parser<'src> {
    /// Parse expression (top level)
    pub fn parse_expression(&mut self) -> Result<Expression, CompilerError> {
        self.parse_assignment_expression()
    }

    /// Parse assignment expression (right associative)
    pub fn parse_assignment_expression(&mut self) -> Result<Expression, CompilerError> {
        let start = self.current_location();
        let target = self.parse_conditional_expression()?;

        let op = match self.peek().and_then(|t| assignment_operator(&t.token_type)) {
            Some(op) => op,
            None => return Ok(target),
        };
        self.advance();

        let value = self.parse_initializer()?;
        Ok(self.finish(
            ExpressionKind::Assignment {
                op,
                target: Some(Box::new(target)),
                value: Some(Box::new(value)),
            },
            start,
        ))
    }

    /// Parse conditional expression (ternary operator)
    pub fn parse_conditional_expression(&mut self) -> Result<Expression, CompilerError> {
        let start = self.current_location();
        let condition = self.parse_binary_expression(1)?;

        if !self.match_token(&TokenType::Question) {
            return Ok(condition);
        }

        let then_expr = self.parse_expression()?;
        self.expect(TokenType::Colon, "conditional expression")?;
        let else_expr = self.parse_conditional_expression()?;

        Ok(self.finish(
            ExpressionKind::Conditional {
                condition: Some(Box::new(condition)),
                then_expr: Some(Box::new(then_expr)),
                else_expr: Some(Box::new(else_expr)),
            },
            start,
        ))
    }

    /// Precedence climbing over the binary operators, left associative
    pub fn parse_binary_expression(&mut self, min_precedence: u8) -> Result<Expression, CompilerError> {
        let start = self.current_location();
        let mut left = self.parse_cast_expression()?;

        while let Some((op, precedence)) = self.peek().and_then(|t| binary_precedence(&t.token_type)) {
            if precedence < min_precedence {
                break;
            }
            self.advance();
            let right = self.parse_binary_expression(precedence + 1)?;
            left = self.finish(
                ExpressionKind::Binary {
                    op,
                    left: Some(Box::new(left)),
                    right: Some(Box::new(right)),
                },
                start.clone(),
            );
        }

        Ok(left)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::parser::tests::parse;

    fn binary_parts(expr: &Expression) -> (BinaryOp, &Expression, &Expression) {
        match &expr.kind {
            ExpressionKind::Binary { op, left: Some(left), right: Some(right) } => (*op, left, right),
            other => panic!("Expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_precedence() {
        let expr = parse("a + b * c");
        let (op, left, right) = binary_parts(&expr);
        assert_eq!(op, BinaryOp::Add);
        assert_eq!(left.text, "a");
        assert_eq!(right.text, "b * c");
    }

    #[test]
    fn test_left_associativity() {
        let expr = parse("a - b - c");
        let (op, left, right) = binary_parts(&expr);
        assert_eq!(op, BinaryOp::Sub);
        assert_eq!(left.text, "a - b");
        assert_eq!(right.text, "c");
    }

    #[test]
    fn test_logical_operators_bind_loosest() {
        let expr = parse("a == 1 || b < 2 && c");
        let (op, left, right) = binary_parts(&expr);
        assert_eq!(op, BinaryOp::LogicalOr);
        assert_eq!(left.text, "a == 1");
        assert_eq!(right.text, "b < 2 && c");
    }

    #[test]
    fn test_assignment_is_right_associative() {
        let expr = parse("a = b += 2");
        match expr.kind {
            ExpressionKind::Assignment { op: AssignOp::Assign, value: Some(value), .. } => match value.kind {
                InitializerKind::Expression(inner) => assert!(matches!(
                    inner.kind,
                    ExpressionKind::Assignment { op: AssignOp::AddAssign, .. }
                )),
                other => panic!("Expected expression initializer, got {:?}", other),
            },
            other => panic!("Expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_conditional() {
        let expr = parse("a ? b : c ? d : e");
        match expr.kind {
            ExpressionKind::Conditional { else_expr: Some(else_expr), .. } => {
                assert_eq!(else_expr.text, "c ? d : e");
            }
            other => panic!("Expected conditional, got {:?}", other),
        }
    }
}
