//! Plain-text tables for traces and summaries.
//!
//! Rendering returns a `String`; printing is left to the caller.
//! Absent values are shown as [`PLACEHOLDER`] and failure rows end with
//! the [`Failure`] message.
//!
//! [`Failure`]: super::errors::Failure

use super::record::{BisectionRecord, NewtonRecord, SecantRecord};
use super::report::Summary;

pub const PLACEHOLDER: &str = "----";


/// Formats a record type as one table row.
pub trait TableRow {
    fn header() -> String;
    fn row(&self) -> String;
}

impl TableRow for BisectionRecord {
    fn header() -> String {
        format!("{:>3} {:>12} {:>12} {:>12} {:>14} {:>14}", "k", "a", "b", "c", "f(c)", "error")
    }

    fn row(&self) -> String {
        match self {
            BisectionRecord::Step { iter, a, b, c, fc, error } => {
                format!("{iter:3} {a:12.6} {b:12.6} {c:12.6} {fc:14.6e} {error:14.6e}")
            }
            BisectionRecord::NoBracket { a, b, failure } => {
                format!("{:3} {a:12.6} {b:12.6} {PLACEHOLDER:>12} {PLACEHOLDER:>14} {PLACEHOLDER:>14}  {failure}", 0)
            }
            BisectionRecord::Failed { iter, a, b, c, failure } => {
                format!("{iter:3} {a:12.6} {b:12.6} {c:12.6} {PLACEHOLDER:>14} {PLACEHOLDER:>14}  {failure}")
            }
        }
    }
}

impl TableRow for NewtonRecord {
    fn header() -> String {
        format!("{:>3} {:>14} {:>16} {:>14}", "k", "x", "f(x)", "error")
    }

    fn row(&self) -> String {
        match self {
            NewtonRecord::Step { iter, x, fx, error } => {
                format!("{iter:3} {x:14.8} {fx:16.8e} {error:14.6e}")
            }
            NewtonRecord::Failed { iter, x, fx, failure } => {
                format!("{iter:3} {x:14.8} {fx:16.8e} {PLACEHOLDER:>14}  {failure}")
            }
        }
    }
}

impl TableRow for SecantRecord {
    fn header() -> String {
        format!(
            "{:>3} {:>12} {:>12} {:>14} {:>14} {:>12} {:>14}",
            "k", "x0", "x1", "f(x0)", "f(x1)", "x2", "error"
        )
    }

    fn row(&self) -> String {
        match self {
            SecantRecord::Step { iter, x0, x1, fx0, fx1, x2, error } => {
                format!("{iter:3} {x0:12.6} {x1:12.6} {fx0:14.6e} {fx1:14.6e} {x2:12.6} {error:14.6e}")
            }
            SecantRecord::Failed { iter, x0, x1, fx0, fx1, failure } => {
                format!(
                    "{iter:3} {x0:12.6} {x1:12.6} {fx0:14.6e} {fx1:14.6e} {PLACEHOLDER:>12} {PLACEHOLDER:>14}  {failure}"
                )
            }
        }
    }
}


/// Header line followed by one line per record.
pub fn render_trace<R: TableRow>(trace: &[R]) -> String {
    let mut out = R::header();
    out.push('\n');
    for record in trace {
        out.push_str(&record.row());
        out.push('\n');
    }
    out
}


fn fmt_opt(value: Option<f64>, precision: usize, exp: bool) -> String {
    match value {
        Some(v) if exp => format!("{v:.precision$e}"),
        Some(v)        => format!("{v:.precision$}"),
        None           => PLACEHOLDER.to_string(),
    }
}

/// Method comparison table, one line per [`Summary`].
pub fn render_summaries(summaries: &[Summary]) -> String {
    let mut out = format!(
        "{:<15} {:>5} {:>14} {:>14} {:>14} {:>10}\n",
        "Method", "Iter", "Root", "f(root)", "Error", "Status"
    );
    for s in summaries {
        out.push_str(&format!(
            "{:<15} {:>5} {:>14} {:>14} {:>14} {:>10}\n",
            s.method(),
            s.iterations,
            fmt_opt(s.root, 8, false),
            fmt_opt(s.f_root, 3, true),
            fmt_opt(s.approx_error, 3, true),
            s.termination.label(),
        ));
    }
    out
}
