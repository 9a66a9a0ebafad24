//! Error types for the fallible emitter surface.

use crate::asm::Assembler;

use core::panic::Location;
use core::{fmt, mem};
use std::path::PathBuf;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use thiserror::Error;

/// Where (in the host program) an unresolved branch was emitted.
#[derive(Debug)]
pub(crate) struct UnplacedBranchInfo {
    pub(crate) caller_loc: &'static Location<'static>,
}

#[derive(Debug, Error, Diagnostic)]
#[error("branch at code offset {offset:#x} was never resolved (emitted at {emitted_at})")]
#[diagnostic(
    code(gekko::unresolved_branch),
    help("resolve the branch's label with set_label / set_label_to before calling finish()")
)]
struct UnresolvedBranchDiagnostic {
    offset: u32,
    emitted_at: String,
}

/// The FinishError stores the pre-rendered, pretty error text.
pub struct FinishError {
    /// Rendered miette diagnostic(s)
    pub rendered: String,
}

debug_from_display!(FinishError, newline);

impl fmt::Display for FinishError {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { rendered } = self;
        write!(f, "{rendered}")
    }
}

impl std::error::Error for FinishError {}

impl FinishError {
    pub(crate) fn from_asm(mut asm: Assembler) -> FinishError {
        let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());

        let mut unresolved = mem::take(&mut asm.unresolved)
            .into_iter()
            .collect::<Vec<_>>();
        unresolved.sort_unstable_by_key(|(offset, _)| *offset);

        let reports = unresolved
            .into_iter()
            .map(|(offset, info)| {
                let diag = UnresolvedBranchDiagnostic {
                    offset,
                    emitted_at: format!(
                        "{f}:{l}:{c}",
                        f = info.caller_loc.file(),
                        l = info.caller_loc.line(),
                        c = info.caller_loc.column(),
                    ),
                };

                let mut rendered = String::new();
                handler
                    .render_report(&mut rendered, &diag)
                    .expect("render_report should not fail");
                rendered
            })
            .collect::<Vec<_>>();

        FinishError {
            // join multiple diagnostics with a blank line between them
            rendered: reports.join("\n\n"),
        }
    }
}

/// Writing the emitted bytes to disk failed.
#[derive(Debug, Error, Diagnostic)]
#[error("failed to dump {bytes} emitted bytes to {}", .path.display())]
#[diagnostic(code(gekko::dump))]
pub struct DumpError {
    pub path: PathBuf,
    pub bytes: usize,
    #[source]
    pub source: std::io::Error,
}
