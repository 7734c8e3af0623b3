use params::{flatten, unflatten_truncating, Param, Value};
use rayon::prelude::*;

/// Objective over the full argument tuple. Extra fixed context is
/// captured by the closure itself.
pub type ObjFn<'a> = &'a (dyn Fn(&[Param]) -> f64 + Sync);

/// A source of gradients with respect to the trainable arguments.
///
/// Returns one entry per trainable argument, shaped like that argument,
/// plus the objective value at the unshifted point when the source
/// computes it as a byproduct.
pub trait GradientSource {
    fn gradient(&self, objective: ObjFn<'_>, args: &[Param]) -> (Vec<Value>, Option<f64>);
}

/// Parameter-shift rule: 0.5 * (f(θ + π/2) - f(θ - π/2)) per component.
///
/// Exact for objectives with sinusoidal dependence on each parameter,
/// which is what single-parameter rotation gates produce.
pub struct ParameterShift;

impl GradientSource for ParameterShift {
    fn gradient(&self, objective: ObjFn<'_>, args: &[Param]) -> (Vec<Value>, Option<f64>) {
        let shift = std::f64::consts::FRAC_PI_2;
        let grads = component_map(args, |arg_idx, leaf| {
            0.5 * (eval_shifted(objective, args, arg_idx, leaf, shift)
                - eval_shifted(objective, args, arg_idx, leaf, -shift))
        });
        (grads, None)
    }
}

/// Central finite differences: (f(x + h) - f(x - h)) / 2h per component.
pub struct CentralDifference {
    pub h: f64,
}

impl CentralDifference {
    pub fn new(h: f64) -> Self {
        Self { h }
    }
}

impl Default for CentralDifference {
    fn default() -> Self {
        Self { h: 1e-6 }
    }
}

impl GradientSource for CentralDifference {
    fn gradient(&self, objective: ObjFn<'_>, args: &[Param]) -> (Vec<Value>, Option<f64>) {
        let h = self.h;
        let grads = component_map(args, |arg_idx, leaf| {
            (eval_shifted(objective, args, arg_idx, leaf, h)
                - eval_shifted(objective, args, arg_idx, leaf, -h))
                / (2.0 * h)
        });
        (grads, None)
    }
}

/// Forward finite differences: (f(x + h) - f(x)) / h per component.
///
/// Evaluates the objective at the unshifted point once and exposes that
/// value, so `step_and_cost` needs no extra forward pass.
pub struct ForwardDifference {
    pub h: f64,
}

impl ForwardDifference {
    pub fn new(h: f64) -> Self {
        Self { h }
    }
}

impl Default for ForwardDifference {
    fn default() -> Self {
        Self { h: 1e-6 }
    }
}

impl GradientSource for ForwardDifference {
    fn gradient(&self, objective: ObjFn<'_>, args: &[Param]) -> (Vec<Value>, Option<f64>) {
        let h = self.h;
        let base = objective(args);
        let grads = component_map(args, |arg_idx, leaf| {
            (eval_shifted(objective, args, arg_idx, leaf, h) - base) / h
        });
        (grads, Some(base))
    }
}

/// Evaluate the objective with one leaf of one argument shifted by delta.
fn eval_shifted(
    objective: ObjFn<'_>,
    args: &[Param],
    arg_idx: usize,
    leaf: usize,
    delta: f64,
) -> f64 {
    let mut flat = flatten(&args[arg_idx].value);
    flat[leaf] += delta;

    let mut shifted = args.to_vec();
    shifted[arg_idx].value = unflatten_truncating(&flat, &args[arg_idx].value);
    objective(&shifted)
}

/// One gradient entry per trainable argument, each leaf computed
/// independently in parallel.
fn component_map<G>(args: &[Param], component: G) -> Vec<Value>
where
    G: Fn(usize, usize) -> f64 + Sync,
{
    args.iter()
        .enumerate()
        .filter(|(_, arg)| arg.is_trainable())
        .map(|(arg_idx, arg)| {
            let leaves = arg.value.leaf_count();
            let grad: Vec<f64> = (0..leaves)
                .into_par_iter()
                .map(|leaf| component(arg_idx, leaf))
                .collect();
            unflatten_truncating(&grad, &arg.value)
        })
        .collect()
}
