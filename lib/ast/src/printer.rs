use scanner::Token;

use crate::{Expr, ExprVisitor, LiteralValue};

/// Renders a tree in fully parenthesized prefix notation, operator first:
/// `1 + 2` becomes `(+ 1 2)`.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = format!("({}", name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }
        out + ")"
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_grouping(&mut self, expression: &Expr) -> String {
        self.parenthesize("group", &[expression])
    }

    fn visit_literal(&mut self, value: &LiteralValue) -> String {
        value.to_string()
    }

    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[right])
    }
}

/// Renders a tree in reverse Polish notation, operands before operator and
/// no parentheses: `(1 + 2) * (4 - 3)` becomes `1 2 + 4 3 - *`. A grouping
/// keeps its identity as a trailing `group` tag.
pub struct RpnPrinter;

impl RpnPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }
}

impl ExprVisitor<String> for RpnPrinter {
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        format!("{} {} {}", left.accept(self), right.accept(self), operator.lexeme)
    }

    fn visit_grouping(&mut self, expression: &Expr) -> String {
        format!("{} group", expression.accept(self))
    }

    fn visit_literal(&mut self, value: &LiteralValue) -> String {
        value.to_string()
    }

    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> String {
        format!("{} {}", right.accept(self), operator.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scanner::TokenKind;

    use super::*;

    fn operator(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, None, 1)
    }

    // -123 * (45.67)
    fn example_tree() -> Expr {
        Expr::binary(
            Expr::unary(operator(TokenKind::Minus, "-"), Expr::literal(123.0)),
            operator(TokenKind::Star, "*"),
            Expr::grouping(Expr::literal(45.67)),
        )
    }

    #[test]
    fn prefix_notation() {
        assert_eq!(AstPrinter.print(&example_tree()), "(* (- 123) (group 45.67))");
    }

    #[test]
    fn reverse_polish_notation() {
        assert_eq!(RpnPrinter.print(&example_tree()), "123 - 45.67 group *");
    }

    #[test]
    fn nested_groupings_and_nil() {
        // -123 * (45.67 + nil), twice, joined by `-`.
        let half = Expr::binary(
            Expr::unary(operator(TokenKind::Minus, "-"), Expr::literal(123.0)),
            operator(TokenKind::Star, "*"),
            Expr::grouping(Expr::binary(
                Expr::literal(45.67),
                operator(TokenKind::Plus, "+"),
                Expr::literal(LiteralValue::Nil),
            )),
        );
        let expr = Expr::binary(half.clone(), operator(TokenKind::Minus, "-"), half);

        assert_eq!(
            AstPrinter.print(&expr),
            "(- (* (- 123) (group (+ 45.67 nil))) (* (- 123) (group (+ 45.67 nil))))"
        );
    }

    #[test]
    fn printers_agree_on_bare_literals() {
        for value in
            [LiteralValue::Number(7.0), LiteralValue::from("hi"), LiteralValue::from(true)]
        {
            let expr = Expr::literal(value);
            assert_eq!(AstPrinter.print(&expr), RpnPrinter.print(&expr));
        }
    }

    #[test]
    fn printing_is_pure() {
        let expr = example_tree();
        let mut printer = AstPrinter;
        assert_eq!(printer.print(&expr), printer.print(&expr));
        let mut printer = RpnPrinter;
        assert_eq!(printer.print(&expr), printer.print(&expr));
    }

    #[test]
    fn literal_rendering() {
        assert_eq!(AstPrinter.print(&Expr::literal(LiteralValue::Nil)), "nil");
        assert_eq!(AstPrinter.print(&Expr::literal(123.0)), "123");
        assert_eq!(AstPrinter.print(&Expr::literal(0.5)), "0.5");
        assert_eq!(AstPrinter.print(&Expr::literal("hello")), "hello");
        assert_eq!(AstPrinter.print(&Expr::literal(false)), "false");
    }
}
