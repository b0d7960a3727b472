//! Internal `>`-prefixed commands that manage session variables.
//!
//! Supported lines: `>exit`, `>show`, `>clear` and `>set k=v [k=v ...]`.

use std::io::Write;

use crate::error::StoreError;
use crate::session::SessionSignal;
use crate::vars::{SessionVariables, VariableStore};

/// First character that marks a selected line as an internal command.
pub const META_PREFIX: char = '>';

/// Message printed for any unrecognized `>` line.
pub const INVALID_META_MESSAGE: &str = "quiver: invalid internal command..";

/// True when `line` must be routed to the interpreter instead of delivery.
pub fn is_meta_command(line: &str) -> bool {
    line.starts_with(META_PREFIX)
}

/// A parsed internal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
    Show,
    Clear,
    /// One or more `name=value` assignments, in line order.
    Set(Vec<(String, String)>),
    Invalid(String),
}

impl MetaCommand {
    /// Parse one selected line. Lines without the prefix are `Invalid`.
    pub fn parse(line: &str) -> Self {
        let Some(body) = line.strip_prefix(META_PREFIX) else {
            return Self::Invalid(line.to_string());
        };
        match body {
            "exit" => Self::Exit,
            "show" => Self::Show,
            "clear" => Self::Clear,
            _ => body
                .strip_prefix("set")
                .and_then(parse_assignments)
                .map(Self::Set)
                .unwrap_or_else(|| Self::Invalid(line.to_string())),
        }
    }

    /// Run the command against `store`, writing user-facing lines to `out`.
    pub fn execute(
        &self,
        store: &VariableStore,
        out: &mut dyn Write,
    ) -> Result<SessionSignal, StoreError> {
        match self {
            Self::Exit => Ok(SessionSignal::End),
            Self::Show => {
                for (name, value) in store.show()? {
                    writeln!(out, "{name}={value}")?;
                }
                Ok(SessionSignal::End)
            }
            Self::Clear => {
                store.clear()?;
                // Clearing starts a fresh interactive cycle rather than exiting.
                Ok(SessionSignal::Restart)
            }
            Self::Set(pairs) => {
                let updates: SessionVariables = pairs.iter().cloned().collect();
                store.set(&updates)?;
                Ok(SessionSignal::Continue)
            }
            Self::Invalid(line) => {
                tracing::debug!(%line, "rejected internal command");
                writeln!(out, "{INVALID_META_MESSAGE}")?;
                Ok(SessionSignal::End)
            }
        }
    }
}

/// Parse `( " " token "=" token )+` where tokens exclude `=` and space.
fn parse_assignments(rest: &str) -> Option<Vec<(String, String)>> {
    let rest = rest.strip_prefix(' ')?;
    rest.split(' ')
        .map(|pair| {
            let (name, value) = pair.split_once('=')?;
            let valid = |token: &str| !token.is_empty() && !token.contains('=');
            (valid(name) && valid(value)).then(|| (name.to_string(), value.to_string()))
        })
        .collect()
}


#[cfg(all(test, feature = "fuzz-tests"))]
mod property_tests {
    use super::*;
    use crate::testsupport::TestTempDir;
    use proptest::collection::{btree_map, vec};
    use proptest::prelude::*;

    fn token() -> impl Strategy<Value = String> {
        "[^= \n]{1,8}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn set_line_assigns_every_pair_and_keeps_others(
            prior in btree_map(token(), token(), 0..4),
            updates in vec((token(), token()), 1..5),
        ) {
            let dir = TestTempDir::new("meta-prop");
            let store = VariableStore::new(dir.child("vars.json"));
            let prior_vars: SessionVariables = prior.clone().into_iter().collect();
            store.set(&prior_vars).unwrap();

            let line = format!(
                ">set {}",
                updates
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            let mut out = Vec::new();
            let signal = MetaCommand::parse(&line).execute(&store, &mut out).unwrap();
            prop_assert_eq!(signal, SessionSignal::Continue);

            let vars = store.load().unwrap();
            let mut expected = prior;
            for (k, v) in &updates {
                expected.insert(k.clone(), v.clone());
            }
            prop_assert_eq!(vars.len(), expected.len());
            for (k, v) in &expected {
                prop_assert_eq!(vars.get(k), Some(v.as_str()));
            }
        }
    }
}
