use crate::grad::GradientSource;
use crate::gradient_descent::{GradError, GradientDescent};
use log::debug;
use params::Param;
use rayon::prelude::*;

/// Outcome of a descent run: final arguments, final cost, and the
/// per-iteration trace of pre-step costs.
#[derive(Clone, Debug)]
pub struct DescentRun {
    pub args: Vec<Param>,
    pub cost: f64,
    pub trace: Vec<(usize, f64)>,
}

/// Iterate `step_and_cost` from one initial point.
pub fn descend<F>(
    opt: &GradientDescent,
    source: &dyn GradientSource,
    objective: F,
    init: Vec<Param>,
    iters: usize,
) -> Result<DescentRun, GradError>
where
    F: Fn(&[Param]) -> f64 + Sync,
{
    let mut args = init;
    let mut trace = Vec::with_capacity(iters);

    for iter in 0..iters {
        let (next, cost) = opt.step_and_cost(source, &objective, &args)?;
        debug!("iter {} cost {:.6}", iter, cost);
        trace.push((iter, cost));
        args = next;
    }

    let cost = objective(&args);
    Ok(DescentRun { args, cost, trace })
}

/// Run `descend` from several initial points in parallel and keep the
/// run with the lowest final cost.
pub fn multi_start<F>(
    opt: &GradientDescent,
    source: &(dyn GradientSource + Sync),
    objective: F,
    inits: Vec<Vec<Param>>,
    iters: usize,
) -> Result<DescentRun, GradError>
where
    F: Fn(&[Param]) -> f64 + Sync,
{
    assert!(!inits.is_empty(), "multi_start needs at least one initial point");

    let runs: Vec<Result<DescentRun, GradError>> = inits
        .into_par_iter()
        .map(|init| descend(opt, source, &objective, init, iters))
        .collect();

    let mut completed = Vec::with_capacity(runs.len());
    for run in runs {
        completed.push(run?);
    }

    let mut best = completed.remove(0);
    for run in completed {
        if run.cost < best.cost {
            best = run;
        }
    }
    Ok(best)
}
