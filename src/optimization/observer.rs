//! Iteration logging for the solvers.
//!
//! Solvers carry a `slog::Logger` and report through the helpers below; the
//! default logger discards everything, so the numerical core stays silent
//! unless a caller installs a drain. With the `obs_slog` feature,
//! [`terminal_logger`] builds the same asynchronous terminal drain argmin's
//! slog observer uses, and `verbose` solvers pick it up automatically.
use slog::{Logger, o};

/// Logger that drops every record.
pub fn discard_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}

/// Asynchronous terminal logger (`slog-term` + `slog-async`).
#[cfg(feature = "obs_slog")]
pub fn terminal_logger() -> Logger {
    use slog::Drain;

    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    Logger::root(drain, o!())
}

/// Logger for a solver built with `verbose`.
///
/// Falls back to [`discard_logger`] when the `obs_slog` feature is off.
pub fn verbose_logger() -> Logger {
    #[cfg(feature = "obs_slog")]
    {
        terminal_logger()
    }
    #[cfg(not(feature = "obs_slog"))]
    {
        discard_logger()
    }
}

/// Per-iteration progress record.
pub fn log_iteration(
    logger: &Logger, solver: &'static str, iter: usize, grad_norm: f64, step: f64,
    history_len: usize,
) {
    slog::debug!(logger, "iteration";
        "solver" => solver,
        "iter" => iter,
        "grad_norm" => grad_norm,
        "step" => step,
        "history_len" => history_len
    );
}

/// The search direction was not a descent direction; the line search fell
/// back to its minimal step.
pub fn log_non_descent(logger: &Logger, solver: &'static str, iter: usize, dir_deriv: f64) {
    slog::warn!(logger, "non-descent direction";
        "solver" => solver,
        "iter" => iter,
        "dir_deriv" => dir_deriv
    );
}

/// A correction pair failed the curvature guard and was not stored.
pub fn log_curvature_skip(logger: &Logger, iter: usize, s_dot_y: f64) {
    slog::debug!(logger, "curvature update skipped";
        "iter" => iter,
        "s_dot_y" => s_dot_y
    );
}

/// Final record of a run.
pub fn log_termination(
    logger: &Logger, solver: &'static str, status: &str, iterations: usize, cost: f64,
    grad_norm: f64,
) {
    slog::info!(logger, "terminated";
        "solver" => solver,
        "status" => status,
        "iterations" => iterations,
        "cost" => cost,
        "grad_norm" => grad_norm
    );
}
