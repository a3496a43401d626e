//! Typed statements produced by the lexer.
//!
//! One [`Statement`] describes what one directive means. Code generation
//! matches on the variant and reads the fields; nothing here knows how the
//! statement will be rendered.

use std::fmt;

use serde::Serialize;

/// The operation a `query` directive performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryOperation {
    /// Fetch every row, optionally eager-loading one relation
    All,
    /// Pluck columns
    Pluck,
    /// Count matching rows
    Count,
    /// Check that a matching row exists
    Exists,
    /// Run the clauses and fetch the result
    Get,
}

impl QueryOperation {
    /// Lowercase name used in drafts and templates.
    pub const fn as_str(&self) -> &'static str {
        match self {
            QueryOperation::All => "all",
            QueryOperation::Pluck => "pluck",
            QueryOperation::Count => "count",
            QueryOperation::Exists => "exists",
            QueryOperation::Get => "get",
        }
    }
}

/// The persistence action of an eloquent directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EloquentAction {
    /// `save`
    Save,
    /// `update`
    Update,
    /// `delete`
    Delete,
    /// `find`
    Find,
}

impl EloquentAction {
    /// Lowercase name used in drafts and templates.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EloquentAction::Save => "save",
            EloquentAction::Update => "update",
            EloquentAction::Delete => "delete",
            EloquentAction::Find => "find",
        }
    }
}

/// The action of a session directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionAction {
    /// `flash`
    Flash,
    /// `store`
    Store,
}

impl SessionAction {
    /// Lowercase name used in drafts and templates.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SessionAction::Flash => "flash",
            SessionAction::Store => "store",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(QueryOperation, EloquentAction, SessionAction);

/// A parsed directive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Statement {
    /// `query: ...`
    Query {
        /// Which query shape to generate
        operation: QueryOperation,
        /// Whitespace-separated clauses, or the relation for `all:X`
        arguments: Vec<String>,
    },
    /// `render: view [with: a, b]`
    Render {
        /// View name
        view: String,
        /// Variables passed to the view
        data: Vec<String>,
    },
    /// `fire: Event [with: a, b]`
    Fire {
        /// Event name
        event: String,
        /// Event constructor arguments
        data: Vec<String>,
    },
    /// `dispatch: Job [with: a, b]`
    Dispatch {
        /// Job name
        job: String,
        /// Job constructor arguments
        data: Vec<String>,
    },
    /// `redirect: route [with: a, b]`
    Redirect {
        /// Route name
        route: String,
        /// Route parameters
        data: Vec<String>,
    },
    /// `send: Mailable [to:recipient] [with: a, b]`
    Send {
        /// Mailable or notification class
        mailable: String,
        /// Recipient expression from the `to:` clause
        recipient: Option<String>,
        /// Mailable constructor arguments
        data: Vec<String>,
    },
    /// `validate: rule, rule`
    Validate {
        /// Field rules, in draft order
        rules: Vec<String>,
    },
    /// `save|update|delete|find: body`
    Eloquent {
        /// Which persistence call
        action: EloquentAction,
        /// Body left for the generator to interpret
        body: String,
    },
    /// `flash|store: body`
    Session {
        /// Which session call
        action: SessionAction,
        /// Body left for the generator to interpret
        body: String,
    },
}

impl Statement {
    /// Keyword naming the statement kind: `query`, `render`, `eloquent`, ...
    pub const fn kind(&self) -> &'static str {
        match self {
            Statement::Query { .. } => "query",
            Statement::Render { .. } => "render",
            Statement::Fire { .. } => "fire",
            Statement::Dispatch { .. } => "dispatch",
            Statement::Redirect { .. } => "redirect",
            Statement::Send { .. } => "send",
            Statement::Validate { .. } => "validate",
            Statement::Eloquent { .. } => "eloquent",
            Statement::Session { .. } => "session",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names() {
        assert_eq!(QueryOperation::Exists.to_string(), "exists");
        assert_eq!(EloquentAction::Find.to_string(), "find");
        assert_eq!(SessionAction::Flash.to_string(), "flash");
    }

    #[test]
    fn test_kind() {
        let stmt = Statement::Eloquent {
            action: EloquentAction::Save,
            body: "post".to_string(),
        };
        assert_eq!(stmt.kind(), "eloquent");

        let stmt = Statement::Validate { rules: vec!["title".to_string()] };
        assert_eq!(stmt.kind(), "validate");
    }

    #[test]
    fn test_serialize_tagged() {
        let stmt = Statement::Send {
            mailable: "ReviewNotification".to_string(),
            recipient: None,
            data: vec!["post".to_string()],
        };
        let json = serde_json::to_value(&stmt).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "send",
                "mailable": "ReviewNotification",
                "recipient": null,
                "data": ["post"],
            })
        );
    }

    #[test]
    fn test_serialize_operation_lowercase() {
        let stmt = Statement::Query {
            operation: QueryOperation::Pluck,
            arguments: vec!["pluck:id".to_string()],
        };
        let json = serde_json::to_value(&stmt).unwrap();
        assert_eq!(json["type"], "query");
        assert_eq!(json["operation"], "pluck");
    }
}
