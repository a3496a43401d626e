//! Lex command implementation.
//!
//! Reads a directive file, one `keyword: body` per line, and prints the
//! statements the lexer produces for it.

use std::path::PathBuf;

use draftc_lex::{DirectiveBlock, LexerOptions, Statement, StatementLexer};
use draftc_util::{DiagnosticCode, Handler};
use tracing::{debug, warn};

use crate::commands::common::{error_messages, read_input_file, LexFormat};
use crate::commands::traits::{self, Command, CommandDescription};
use crate::error::{DrafttError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Directive file to read.
    pub input: PathBuf,
    /// Output rendering.
    pub format: LexFormat,
    /// Require a `with:` prefix before data items.
    pub strict_with: bool,
    /// Log unrecognized directives.
    pub warn_unknown: bool,
    /// Diagnostic codes to silence.
    pub allow: Vec<DiagnosticCode>,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    /// Lex the input file and render the statements.
    pub fn run(&self) -> Result<String> {
        let source = read_input_file(&self.args.input)?;
        let block = parse_directives(&source)?;
        debug!(
            file = %self.args.input.display(),
            directives = block.len(),
            "parsed directive file"
        );

        let statements = self.lex(&block);
        debug!(statements = statements.len(), "lexed directives");

        render(&statements, self.args.format)
    }

    fn lex(&self, block: &DirectiveBlock) -> Vec<Statement> {
        let handler = Handler::new();
        for code in &self.args.allow {
            handler.allow(*code);
        }
        if !self.args.warn_unknown {
            handler.allow(DiagnosticCode::W_UNKNOWN_DIRECTIVE);
        }

        let options = LexerOptions {
            strict_with: self.args.strict_with,
        };
        let statements = StatementLexer::with_options(options)
            .with_handler(&handler)
            .analyze(block);

        for diagnostic in handler.take() {
            warn!("{}", diagnostic);
        }

        statements
    }
}

/// Parse a directive file into an ordered block.
///
/// Blank lines and lines starting with `#` are skipped. A keyword that
/// appears twice keeps its first position and takes the later body.
pub fn parse_directives(source: &str) -> Result<DirectiveBlock> {
    let mut block = DirectiveBlock::new();

    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (keyword, body) = line
            .split_once(':')
            .map(|(keyword, body)| (keyword.trim(), body.trim()))
            .filter(|(keyword, _)| !keyword.is_empty())
            .ok_or_else(|| {
                DrafttError::Validation(format!(
                    "line {}: {}",
                    index + 1,
                    error_messages::MALFORMED_DIRECTIVE_LINE
                ))
            })?;

        if block.insert(keyword, body).is_some() {
            warn!(line = index + 1, keyword, "duplicate directive replaces earlier body");
        }
    }

    Ok(block)
}

fn render(statements: &[Statement], format: LexFormat) -> Result<String> {
    match format {
        LexFormat::Json => Ok(serde_json::to_string_pretty(statements)?),
        LexFormat::Debug => Ok(statements
            .iter()
            .map(|statement| format!("{:#?}", statement))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = String;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "lex"
    }
}

impl CommandDescription for LexCommand {
    fn description() -> &'static str {
        "Lex a directive file into statements"
    }

    fn help() -> &'static str {
        "Reads `keyword: body` lines from a file and prints the statements \
         they describe. Unknown keywords are skipped with a warning."
    }
}

/// Run the lex command and print its output.
pub fn run_lex(args: LexArgs) -> Result<()> {
    let output = traits::run::<LexCommand>(args)?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args_for(input: PathBuf) -> LexArgs {
        LexArgs {
            input,
            format: LexFormat::Json,
            strict_with: false,
            warn_unknown: true,
            allow: Vec::new(),
        }
    }

    #[test]
    fn test_parse_directives() {
        let source = "\
# store action
validate: title, content

dispatch: SyncMedia with:post
flash: post.title
";
        let block = parse_directives(source).unwrap();
        assert_eq!(
            block.keys().collect::<Vec<_>>(),
            ["validate", "dispatch", "flash"]
        );
        assert_eq!(block.get("dispatch"), Some("SyncMedia with:post"));
    }

    #[test]
    fn test_parse_directives_splits_on_first_colon() {
        let block = parse_directives("query: all:posts").unwrap();
        assert_eq!(block.get("query"), Some("all:posts"));
    }

    #[test]
    fn test_parse_directives_duplicate_keeps_position() {
        let block = parse_directives("render: a\nfire: E\nrender: b").unwrap();
        assert_eq!(block.keys().collect::<Vec<_>>(), ["render", "fire"]);
        assert_eq!(block.get("render"), Some("b"));
    }

    #[test]
    fn test_parse_directives_rejects_malformed_lines() {
        let err = parse_directives("render: a\nnot a directive").unwrap_err();
        assert!(matches!(err, DrafttError::Validation(_)));
        assert!(err.to_string().contains("line 2"));

        assert!(parse_directives(": body").is_err());
    }

    #[test]
    fn test_parse_directives_empty_body() {
        let block = parse_directives("update:").unwrap();
        assert_eq!(block.get("update"), Some(""));
    }

    #[test]
    fn test_run_json() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("draft.txt");
        std::fs::write(&input, "render: post.show with:post\nbogus: x\n").unwrap();

        let output = LexCommand::new(args_for(input)).run().unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["type"], "render");
        assert_eq!(value[0]["view"], "post.show");
        assert_eq!(value[0]["data"][0], "post");
    }

    #[test]
    fn test_run_debug() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("draft.txt");
        std::fs::write(&input, "save: post").unwrap();

        let mut args = args_for(input);
        args.format = LexFormat::Debug;
        let output = LexCommand::new(args).run().unwrap();

        assert!(output.contains("Eloquent"));
        assert!(output.contains("Save"));
    }

    #[test]
    fn test_run_strict_with() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("draft.txt");
        std::fs::write(&input, "fire: Event post").unwrap();

        let mut args = args_for(input);
        args.strict_with = true;
        let output = LexCommand::new(args).run().unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["event"], "Event");
        assert_eq!(value[0]["data"], serde_json::json!([]));
    }

    #[test]
    fn test_run_missing_file() {
        let result = LexCommand::new(args_for(PathBuf::from("/nonexistent/draft.txt"))).run();
        assert!(matches!(result, Err(DrafttError::FileOperation(_))));
    }

    #[test]
    fn test_command_name() {
        assert_eq!(LexCommand::name(), "lex");
        assert!(!LexCommand::description().is_empty());
    }
}
