//! pest front end for scientific names.
//!
//! The grammar lives in `grammar.pest`. This module only runs it and hands
//! back the root `sci_name` pair; turning that tree into a record is the
//! builders' job.

use pest::{iterators::Pair, Parser};
use pest_derive::Parser;
use tracing::trace;

#[derive(Parser)]
#[grammar = "syntax/grammar.pest"]
struct SciNameParser;

/// Version tag of the rule set in `grammar.pest`. Bump when rule names or
/// tree shapes change.
pub const GRAMMAR_VERSION: &str = "1";

// ============================================================================
// PUBLIC API
// ============================================================================

/// Run the grammar over a preprocessed name body.
///
/// Returns the `sci_name` root, or `None` when the body is not a name the
/// grammar recognizes. Recognition failure is an ordinary outcome, not an
/// error.
pub fn parse_tree(body: &str) -> Option<Pair<'_, Rule>> {
    match SciNameParser::parse(Rule::sci_name, body) {
        Ok(mut pairs) => pairs.next(),
        Err(err) => {
            trace!(body, error = %err, "grammar did not recognize name");
            None
        }
    }
}
