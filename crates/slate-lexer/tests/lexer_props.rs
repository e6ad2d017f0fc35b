// SPDX-License-Identifier: (MIT OR Apache-2.0)
use proptest::prelude::*;
use slate_ast::token::TokenKind;
use slate_lexer::Lexer;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn positions_match_a_full_recount(s in "[a-z0-9 ;é\n\r\"+(){}-]{0,200}") {
        for tok in Lexer::new(&s) {
            let prefix = &s[..tok.pos.index];
            let line = prefix.matches('\n').count() + 1;
            let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
            let col = s[line_start..tok.pos.index].chars().count() + 1;
            prop_assert_eq!((tok.pos.line as usize, tok.pos.col as usize), (line, col));
        }
    }

    #[test]
    fn deterministic(s in ".*") {
        let first: Vec<_> = Lexer::new(&s).collect();
        let second: Vec<_> = Lexer::new(&s).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn never_panics_and_progresses(s in ".*") {
        let mut last_index = None;
        let max_steps = s.len() + 1;

        for (steps, tok) in Lexer::new(&s).enumerate() {
            prop_assert!(tok.pos.index < s.len(), "token past end: {tok:?} input={s:?}");
            if let Some(last) = last_index {
                prop_assert!(tok.pos.index > last, "token did not advance: {tok:?} input={s:?}");
            }
            last_index = Some(tok.pos.index);
            prop_assert!(tok.pos.line >= 1 && tok.pos.col >= 1);
            prop_assert!(steps < max_steps, "too many tokens for input={s:?}");
        }
    }

    #[test]
    fn error_tokens_match_reported_errors(s in "[a-z0-9 +@$\"\\\\]{0,40}") {
        let mut lexer = Lexer::new(&s);
        let error_tokens = lexer
            .by_ref()
            .filter(|t| t.kind == TokenKind::Error)
            .count();
        prop_assert_eq!(error_tokens, lexer.errors().len());
    }

    #[test]
    fn integer_literals_round_trip(n in 1i64..i64::MAX) {
        let src = n.to_string();
        let kinds: Vec<_> = Lexer::new(&src).map(|t| t.kind).collect();
        prop_assert_eq!(kinds, vec![TokenKind::Int(n)]);
    }
}
