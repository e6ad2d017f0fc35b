//! Parser for the slate language.
//!
//! Transforms a token stream into an arena-allocated abstract syntax tree.

mod error;
mod expr;
mod hints;
mod parser;
mod stmt;
mod ty;

pub use error::ParseError;
pub use parser::{ParseResult, Parser, MAX_DEPTH, MAX_ERRORS};

/// Parse a whole source file with default settings.
pub fn parse(source: &str) -> ParseResult {
    Parser::new(source).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_ast::expr::ExprKind;
    use slate_ast::print;
    use slate_ast::stmt::StmtKind;
    use slate_ast::Pos;

    fn expr(src: &str) -> String {
        let mut parser = Parser::new(src);
        let id = parser.parse_expr();
        assert!(parser.errors().is_empty(), "Parse errors: {:?}", parser.errors());
        assert!(parser.at_end(), "input not fully consumed: {src}");
        print::expr_to_string(parser.arena(), id)
    }

    fn ty(src: &str) -> String {
        let mut parser = Parser::new(src);
        let id = parser.parse_ty();
        assert!(parser.errors().is_empty(), "Parse errors: {:?}", parser.errors());
        assert!(parser.at_end(), "input not fully consumed: {src}");
        print::ty_to_string(parser.arena(), id)
    }

    fn stmts(src: &str) -> Vec<String> {
        let result = parse(src);
        assert!(result.is_ok(), "Parse errors: {:?} {:?}", result.errors, result.lex_errors);
        result
            .file
            .stmts
            .iter()
            .map(|&id| print::stmt_to_string(&result.arena, id))
            .collect()
    }

    #[test]
    fn precedence_per_tier() {
        assert_eq!(expr("1 + 2 * 3"), "(+ 1 (* 2 3))");
        assert_eq!(expr("a * b / c"), "(/ (* a b) c)");
        assert_eq!(expr("a + b > c"), "(> (+ a b) c)");
        assert_eq!(expr("a == b < c"), "(== a (< b c))");
        assert_eq!(expr("a != b or c"), "(or (!= a b) c)");
    }

    #[test]
    fn left_associativity() {
        assert_eq!(expr("1 - 2 - 3"), "(- (- 1 2) 3)");
        assert_eq!(expr("a == b != c"), "(!= (== a b) c)");
    }

    #[test]
    fn and_or_share_a_tier() {
        assert_eq!(expr("a or b and c"), "(and (or a b) c)");
        assert_eq!(expr("a and b or c"), "(or (and a b) c)");
    }

    #[test]
    fn unary_binds_tighter_than_binary() {
        assert_eq!(expr("-a * b"), "(* (- a) b)");
        assert_eq!(expr("not f(x) and y"), "(and (not (call f x)) y)");
    }

    #[test]
    fn postfix_chains_compose() {
        assert_eq!(expr("f(1)[0].2"), "(.2 (index (call f 1) 0))");
        assert_eq!(expr("pair.0.1"), "(.1 (.0 pair))");
        assert_eq!(expr("f(a, b,)"), "(call f a b)");
        assert_eq!(expr("f()()"), "(call (call f))");
    }

    #[test]
    fn primaries() {
        assert_eq!(expr("true"), "true");
        assert_eq!(expr("false"), "false");
        assert_eq!(expr("\"hi\""), "\"hi\"");
        assert_eq!(expr("()"), "()");
        assert_eq!(expr("(x)"), "x");
        assert_eq!(expr("(x,)"), "(tuple x)");
        assert_eq!(expr("(1, 2, 3)"), "(tuple 1 2 3)");
        assert_eq!(expr("[0; 4]"), "(repeat 0 4)");
        assert_eq!(expr("[1, 2,]"), "(array 1 2)");
        assert_eq!(expr("[x]"), "(array x)");
        assert_eq!(expr("[]"), "(array)");
    }

    #[test]
    fn grouping_overrides_precedence() {
        assert_eq!(expr("(1 + 2) * 3"), "(* (+ 1 2) 3)");
    }

    #[test]
    fn types() {
        assert_eq!(ty("int"), "int");
        assert_eq!(ty("bool"), "bool");
        assert_eq!(ty("str"), "str");
        assert_eq!(ty("Point"), "Point");
        assert_eq!(ty("()"), "()");
        assert_eq!(ty("(int)"), "(tuple int)");
        assert_eq!(ty("(int, str,)"), "(tuple int str)");
        assert_eq!(ty("[int]"), "[int]");
        assert_eq!(ty("[[bool]; n + 1]"), "[[bool]; (+ n 1)]");
    }

    #[test]
    fn fn_statement() {
        assert_eq!(
            stmts("fn add(a: int, b: int,) -> int { return a + b; }"),
            vec!["(fn add ((a int) (b int)) -> int (block (return (+ a b))))"]
        );
        assert_eq!(stmts("fn main() {}"), vec!["(fn main () (block))"]);
    }

    #[test]
    fn let_statement() {
        assert_eq!(
            stmts("let x: [int; 2] = [1, 2]; let y = x;"),
            vec!["(let x: [int; 2] (array 1 2))", "(let y x)"]
        );
    }

    #[test]
    fn if_else_chain() {
        assert_eq!(
            stmts("if a { b; } else if c { d; } else { e; }"),
            vec!["(if a (block b) (if c (block d) (block e)))"]
        );
        assert_eq!(stmts("if a {}"), vec!["(if a (block))"]);
    }

    #[test]
    fn while_break_assign() {
        assert_eq!(
            stmts("while x < 10 { x = x + 1; break; }"),
            vec!["(while (< x 10) (block (= x (+ x 1)) (break)))"]
        );
    }

    #[test]
    fn return_forms() {
        assert_eq!(
            stmts("fn f() { return; return 1; }"),
            vec!["(fn f () (block (return) (return 1)))"]
        );
    }

    #[test]
    fn nested_blocks() {
        assert_eq!(stmts("{ { a; } b; }"), vec!["(block (block a) b)"]);
    }

    #[test]
    fn attributes() {
        let result = parse("#[inline] #[test] fn f() {}");
        assert!(result.is_ok(), "Parse errors: {:?}", result.errors);
        let stmt = &result.arena[result.file.stmts[0]];
        let names: Vec<_> = stmt.attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["inline", "test"]);
        assert_eq!(stmt.attrs[1].pos, Pos::new(10, 1, 11));
        assert!(matches!(stmt.kind, StmtKind::Fn(_)));
    }

    #[test]
    fn node_positions() {
        let result = parse("let a = 1;\n  foo(a);");
        let stmt = &result.arena[result.file.stmts[1]];
        assert_eq!(stmt.pos, Pos::new(13, 2, 3));
        if let StmtKind::Expr(call) = stmt.kind {
            assert_eq!(result.arena[call].pos, stmt.pos);
        } else {
            panic!("Expected expression statement");
        }
    }

    #[test]
    fn ids_unique_and_increasing() {
        let result = parse("fn f(a: int) -> [int; 3] { let x = (a, [1; 3]); if x.0 { f(x.1[0]); } }");
        assert!(result.is_ok(), "Parse errors: {:?}", result.errors);
        let ids: Vec<_> = result.arena.ids().collect();
        assert!(ids.len() > 10);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    // =========================================================================
    // Error recovery
    // =========================================================================

    #[test]
    fn missing_semicolon_is_not_fatal() {
        let result = parse("a b;");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "expected ';' after statement, found a name");
        assert_eq!(result.errors[0].pos, Pos::new(2, 1, 3));
        assert_eq!(result.file.stmts.len(), 2);
    }

    #[test]
    fn bad_statement_recovers_at_semicolon() {
        let result = parse("let x 5; y;");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "expected '=', found a number");
        let kinds: Vec<_> = result.file.stmts.iter().map(|&s| &result.arena[s].kind).collect();
        assert!(matches!(kinds[..], [StmtKind::Error, StmtKind::Expr(_)]));
    }

    #[test]
    fn multiple_errors_reported() {
        let result = parse("let = 1; fn (x) { y; } z;");
        assert_eq!(result.errors.len(), 2, "{:?}", result.errors);
        assert_eq!(result.file.stmts.len(), 3);
        let last = &result.arena[result.file.stmts[2]];
        assert!(matches!(last.kind, StmtKind::Expr(_)));
    }

    #[test]
    fn errors_inside_blocks_keep_enclosing_fn() {
        let result = parse("fn f() { let = 2; g(); }");
        assert_eq!(result.errors.len(), 1);
        let func = result.arena.fn_stmt(result.file.stmts[0]).expect("fn survives");
        assert_eq!(func.body.stmts.len(), 2);
    }

    #[test]
    fn unclosed_block() {
        let result = parse("fn f() { a;");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "unclosed '{' - missing '}'");
        assert!(result.errors[0].hint.is_some());
    }

    #[test]
    fn projection_needs_an_index() {
        let result = parse("x.y;");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "expected element index after '.', found a name");
    }

    #[test]
    fn lex_error_becomes_error_expression() {
        let result = parse("let x = @;");
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        assert_eq!(result.lex_errors.len(), 1);
        if let StmtKind::Let(ref local) = result.arena[result.file.stmts[0]].kind {
            assert_eq!(result.arena[local.init].kind, ExprKind::Error);
        } else {
            panic!("Expected let statement");
        }
    }

    #[test]
    fn entry_points_return_error_nodes() {
        let mut parser = Parser::new(")");
        let id = parser.parse_expr();
        assert_eq!(parser.arena()[id].kind, ExprKind::Error);
        assert_eq!(parser.errors().len(), 1);

        let mut parser = Parser::new("+");
        let id = parser.parse_ty();
        assert_eq!(print::ty_to_string(parser.arena(), id), "<error>");
        assert_eq!(parser.errors()[0].message, "expected type, found '+'");
    }

    #[test]
    fn stray_closing_brace_does_not_hang() {
        let result = parse("} a;");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.file.stmts.len(), 2);
    }

    #[test]
    fn error_cap() {
        let src = "let;".repeat(30);
        assert_eq!(parse(&src).errors.len(), MAX_ERRORS);
        assert_eq!(Parser::new(&src).with_max_errors(5).parse().errors.len(), 5);
    }

    fn nested_parens(depth: usize) -> String {
        format!("let x = {}1{};", "(".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn nesting_below_the_limit_parses() {
        assert!(parse(&nested_parens(100)).is_ok());
        assert!(parse(&format!("fn f() {}{}", "{".repeat(100), "}".repeat(100))).is_ok());
    }

    #[test]
    fn deep_parens_are_an_error() {
        let result = parse(&format!("{} y;", nested_parens(5_000)));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "expression nested too deeply");
        assert_eq!(result.errors[0].pos.line, 1);
        // Recovery resumes after the statement's `;`.
        assert_eq!(result.file.stmts.len(), 2);
        assert!(matches!(result.arena[result.file.stmts[0]].kind, StmtKind::Error));
    }

    #[test]
    fn deep_blocks_are_an_error() {
        let src = format!("fn f() {}{} g();", "{".repeat(5_000), "}".repeat(5_000));
        let result = parse(&src);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "block nested too deeply");
        assert_eq!(result.file.stmts.len(), 2);
        assert!(result.arena.fn_stmt(result.file.stmts[0]).is_some());
    }

    #[test]
    fn deep_types_are_an_error() {
        let src = format!("fn f(a: {}int{}) {{}}", "[".repeat(5_000), "]".repeat(5_000));
        let result = parse(&src);
        assert!(!result.errors.is_empty());
        assert_eq!(result.errors[0].message, "type nested too deeply");
    }

    #[test]
    fn long_else_if_chain_is_an_error() {
        let src = format!("if a {{}}{}", " else if a {}".repeat(5_000));
        let result = parse(&src);
        assert!(!result.errors.is_empty());
        assert!(result.errors.iter().all(|e| e.message == "`else if` chain nested too deeply"));
    }

    #[test]
    fn configurable_depth() {
        let result = Parser::new("let x = (((1)));").with_max_depth(3).parse();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].pos, Pos::new(11, 1, 12));
        assert!(Parser::new("let x = ((1));").with_max_depth(3).parse().is_ok());
    }

    #[test]
    fn long_operator_chains_are_not_nesting() {
        let src = format!("let x = a{};", " + a".repeat(20_000));
        let result = parse(&src);
        assert!(result.is_ok());
        let src = format!("f{};", "(1)".repeat(20_000));
        assert!(parse(&src).is_ok());
    }
}
