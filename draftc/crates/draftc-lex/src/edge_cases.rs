//! Edge case tests for draftc-lex
