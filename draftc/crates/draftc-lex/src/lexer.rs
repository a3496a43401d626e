//! Statement lexer.
//!
//! Routes each directive of a [`DirectiveBlock`] to the parser for its
//! keyword and collects the resulting [`Statement`]s in block order.
//! Directives with keywords outside [`Command`] produce nothing.
//!
//! Parsing never fails. Bodies that do not fit the expected shape degrade
//! to a best-effort statement; when a [`Handler`] is attached the lexer also
//! reports what it dropped or could not make sense of, without changing the
//! statements it returns.

use std::ops::Range;
use std::sync::LazyLock;

use draftc_util::{Diagnostic, DiagnosticCode, Handler};
use regex::Regex;

use crate::directive::{Command, DirectiveBlock};
use crate::statement::{EloquentAction, QueryOperation, SessionAction, Statement};
use crate::tokens::{extract_tokens, has_with_prefix, split_list, split_with_clause, with_clause_data};

/// `all:relation`, the whole body.
static ALL_WITH_RELATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^all:(\S+)$").unwrap());

/// The leftmost whole word `count` or `exists`.
static COUNT_OR_EXISTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(count|exists)\b").unwrap());

/// A `to:recipient` clause together with the blanks before it.
static RECIPIENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+to:(\S+)").unwrap());

/// Marker that turns a query into a pluck.
const PLUCK_MARKER: &str = "pluck:";

/// Options controlling lexer leniency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerOptions {
    /// Require a `with:`/`with ` prefix before data items.
    ///
    /// When off, the first five characters of a trailing clause are dropped
    /// whatever they are. When on, a clause without the prefix carries no data.
    pub strict_with: bool,
}

/// Statement lexer for one controller action.
///
/// # Examples
///
/// ```
/// use draftc_lex::{DirectiveBlock, Statement, StatementLexer};
/// use draftc_util::Handler;
///
/// let block: DirectiveBlock = [("render", "post.show with:post"), ("respond", "200")]
///     .into_iter()
///     .collect();
///
/// let handler = Handler::new();
/// let statements = StatementLexer::new().with_handler(&handler).analyze(&block);
///
/// assert_eq!(
///     statements,
///     [Statement::Render { view: "post.show".into(), data: vec!["post".into()] }]
/// );
/// assert_eq!(handler.warning_count(), 1);
/// ```
#[derive(Clone, Copy, Default)]
pub struct StatementLexer<'h> {
    options: LexerOptions,
    handler: Option<&'h Handler>,
}

impl StatementLexer<'static> {
    /// Create a lenient lexer with no diagnostics sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lexer with the given options.
    pub fn with_options(options: LexerOptions) -> Self {
        Self {
            options,
            handler: None,
        }
    }
}

impl<'h> StatementLexer<'h> {
    /// Report dropped directives and malformed clauses to `handler`.
    pub fn with_handler<'a>(self, handler: &'a Handler) -> StatementLexer<'a> {
        StatementLexer {
            options: self.options,
            handler: Some(handler),
        }
    }

    /// Options in effect.
    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// Lex every directive in `block`, in block order.
    pub fn analyze(&self, block: &DirectiveBlock) -> Vec<Statement> {
        block
            .iter()
            .filter_map(|(keyword, body)| self.analyze_directive(keyword, body))
            .collect()
    }

    /// Lex a single directive. Returns `None` for unrecognized keywords.
    pub fn analyze_directive(&self, keyword: &str, body: &str) -> Option<Statement> {
        let Some(command) = Command::from_keyword(keyword) else {
            self.report_unknown(keyword);
            return None;
        };

        let statement = match command {
            Command::Query => analyze_query(body),
            Command::Render => {
                let (view, data) = self.parse_with_statement(command, body);
                Statement::Render { view, data }
            }
            Command::Fire => {
                let (event, data) = self.parse_with_statement(command, body);
                Statement::Fire { event, data }
            }
            Command::Dispatch => {
                let (job, data) = self.parse_with_statement(command, body);
                Statement::Dispatch { job, data }
            }
            Command::Redirect => {
                let (route, data) = self.parse_with_statement(command, body);
                Statement::Redirect { route, data }
            }
            Command::Send => self.analyze_mail(body),
            Command::Validate => Statement::Validate {
                rules: split_list(body),
            },
            Command::Save => eloquent(EloquentAction::Save, body),
            Command::Update => eloquent(EloquentAction::Update, body),
            Command::Delete => eloquent(EloquentAction::Delete, body),
            Command::Find => eloquent(EloquentAction::Find, body),
            Command::Flash => session(SessionAction::Flash, body),
            Command::Store => session(SessionAction::Store, body),
        };

        Some(statement)
    }

    fn analyze_mail(&self, body: &str) -> Statement {
        let mut recipient = None;
        let mut remaining = body.to_string();

        if let Some(captures) = RECIPIENT.captures(body) {
            recipient = Some(captures[1].to_string());
            if let Some(clause) = captures.get(0) {
                remaining = cut(body, clause.range());
            }
        }

        let (mailable, data) = self.parse_with_statement(Command::Send, &remaining);
        Statement::Send {
            mailable,
            recipient,
            data,
        }
    }

    fn parse_with_statement(&self, command: Command, body: &str) -> (String, Vec<String>) {
        let (object, rest) = split_with_clause(body);
        let data = match rest {
            Some(rest) => {
                if !has_with_prefix(&rest) {
                    self.report_malformed_with(command, &rest);
                }
                with_clause_data(&rest, self.options.strict_with)
            }
            None => Vec::new(),
        };
        (object, data)
    }

    fn report_unknown(&self, keyword: &str) {
        if let Some(handler) = self.handler {
            let known: Vec<&str> = Command::ALL.iter().map(Command::as_str).collect();
            handler.emit_diagnostic(
                Diagnostic::warning(format!("ignored directive `{}`", keyword))
                    .with_code(DiagnosticCode::W_UNKNOWN_DIRECTIVE)
                    .with_directive(keyword)
                    .with_note(format!("recognized directives: {}", known.join(", "))),
            );
        }
    }

    fn report_malformed_with(&self, command: Command, rest: &str) {
        if let Some(handler) = self.handler {
            let consequence = if self.options.strict_with {
                "no data was extracted"
            } else {
                "its first five characters were dropped"
            };
            handler.emit_diagnostic(
                Diagnostic::warning(format!(
                    "clause `{}` does not start with `with:`",
                    rest
                ))
                .with_code(DiagnosticCode::W_MALFORMED_WITH_CLAUSE)
                .with_directive(command.as_str())
                .with_note(consequence),
            );
        }
    }
}

/// Lex `block` with default options and no diagnostics.
///
/// # Examples
///
/// ```
/// use draftc_lex::{analyze, DirectiveBlock, QueryOperation, Statement};
///
/// let block: DirectiveBlock = [("query", "all"), ("save", "post")].into_iter().collect();
/// let statements = analyze(&block);
///
/// assert_eq!(statements.len(), 2);
/// assert_eq!(
///     statements[0],
///     Statement::Query { operation: QueryOperation::All, arguments: vec![] }
/// );
/// ```
pub fn analyze(block: &DirectiveBlock) -> Vec<Statement> {
    StatementLexer::new().analyze(block)
}

/// Query shapes, first match wins: `all`, `all:X`, `pluck:`, `count`/`exists`, then `get`.
fn analyze_query(body: &str) -> Statement {
    if body == "all" {
        return query(QueryOperation::All, Vec::new());
    }

    if let Some(captures) = ALL_WITH_RELATION.captures(body) {
        return query(QueryOperation::All, vec![captures[1].to_string()]);
    }

    if body.contains(PLUCK_MARKER) {
        return query(QueryOperation::Pluck, extract_tokens(body));
    }

    if let Some(word) = COUNT_OR_EXISTS.find(body) {
        let operation = if word.as_str() == "count" {
            QueryOperation::Count
        } else {
            QueryOperation::Exists
        };
        let remaining = cut(body, word.range());
        return query(operation, extract_tokens(trim_blank(&remaining)));
    }

    query(QueryOperation::Get, extract_tokens(body))
}

fn query(operation: QueryOperation, arguments: Vec<String>) -> Statement {
    Statement::Query {
        operation,
        arguments,
    }
}

fn eloquent(action: EloquentAction, body: &str) -> Statement {
    Statement::Eloquent {
        action,
        body: body.to_string(),
    }
}

fn session(action: SessionAction, body: &str) -> Statement {
    Statement::Session {
        action,
        body: body.to_string(),
    }
}

/// `body` with the byte range of one match cut out.
fn cut(body: &str, range: Range<usize>) -> String {
    let mut out = String::with_capacity(body.len() - range.len());
    out.push_str(&body[..range.start]);
    out.push_str(&body[range.end..]);
    out
}

/// Trim the blank characters a draft line can carry at either end.
fn trim_blank(s: &str) -> &str {
    s.trim_matches([' ', '\t', '\n', '\r', '\0', '\x0B'])
}
