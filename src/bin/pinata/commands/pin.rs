//! `pinata [DIR]` command

use anyhow::{bail, Result};

use crate::cli::PinArgs;
use pinata::ops::pin::{pin_workflows, PinOptions};
use pinata::util::diagnostic::{emit, suggestions};
use pinata::util::{Diagnostic, GlobalContext};

pub fn execute(args: PinArgs, verbose: bool, color: bool) -> Result<()> {
    let mut ctx = GlobalContext::new()?;
    ctx.set_verbose(verbose);
    ctx.set_color(color);
    ctx.set_token(args.token);

    if !ctx.has_token() {
        tracing::debug!("no GITHUB_TOKEN set, using unauthenticated rate limits");
    }

    let dir = ctx.workflow_dir(&args.dir);
    if !dir.is_dir() {
        let diag = Diagnostic::error(format!("workflow directory not found: {}", dir.display()))
            .with_suggestion(suggestions::NO_WORKFLOWS);
        emit(&diag, ctx.color());
        bail!("nothing to pin");
    }

    let mut resolver = ctx.resolver()?;
    let opts = PinOptions {
        dry_run: args.dry_run,
    };

    let report = pin_workflows(&dir, &mut resolver, &opts)?;

    for failure in &report.failed {
        emit(
            &Diagnostic::for_file_error(&failure.path, &failure.error),
            ctx.color(),
        );
    }

    if report.scanned == 0 {
        let diag = Diagnostic::warning(format!("no workflow files in {}", dir.display()))
            .with_context("only .yml and .yaml files are pinned");
        emit(&diag, ctx.color());
    }

    let verb = if args.dry_run { "Would pin" } else { "Pinned" };
    eprintln!(
        "    {} {} of {} workflow files",
        verb,
        report.changed.len(),
        report.scanned
    );

    if !report.is_success() {
        bail!("{} workflow file(s) could not be pinned", report.failed.len());
    }

    Ok(())
}
