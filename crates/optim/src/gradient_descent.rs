use crate::grad::{GradientSource, ObjFn};
use log::warn;
use params::{flatten, unflatten_truncating, Param, Value};
use thiserror::Error;

/// How `apply_grad` treats a leaf-count mismatch between a trainable
/// argument and its gradient entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// The shorter flattened side truncates the update: leading leaves
    /// step, trailing leaves keep their old values. Each occurrence is
    /// logged as a warning.
    Permissive,
    /// Fail with `GradError::ShapeMismatch`.
    Strict,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GradError {
    #[error("{expected} trainable arguments but only {got} gradient entries")]
    MissingGradient { expected: usize, got: usize },
    #[error("parameter has {param} leaves, gradient entry has {grad}")]
    ShapeMismatch { param: usize, grad: usize },
}

/// A supplied gradient function, used in place of a gradient source.
pub type GradFn<'a> = &'a dyn Fn(&[Param]) -> Vec<Value>;

/// Basic gradient-descent optimizer.
///
/// One step moves every trainable argument along the negative gradient:
/// x ← x − η ∇f(x), with η the stepsize.
#[derive(Clone, Copy, Debug)]
pub struct GradientDescent {
    stepsize: f64,
    policy: MismatchPolicy,
}

impl GradientDescent {
    /// Permissive-policy optimizer (legacy-compatible truncation).
    pub fn new(stepsize: f64) -> Self {
        Self {
            stepsize,
            policy: MismatchPolicy::Permissive,
        }
    }

    /// Strict-policy optimizer: shape mismatches fail loudly.
    pub fn strict(stepsize: f64) -> Self {
        Self {
            stepsize,
            policy: MismatchPolicy::Strict,
        }
    }

    pub fn stepsize(&self) -> f64 {
        self.stepsize
    }

    pub fn policy(&self) -> MismatchPolicy {
        self.policy
    }

    /// Replace the stepsize. Later steps use the new value; earlier
    /// results stand.
    pub fn update_stepsize(&mut self, stepsize: f64) {
        self.stepsize = stepsize;
    }

    /// Gradient of the objective at `args`, plus the forward value when
    /// one was computed as a byproduct.
    ///
    /// A supplied `grad_fn` is invoked directly and yields no forward
    /// value; the objective is not evaluated on that path.
    pub fn compute_grad(
        objective: ObjFn<'_>,
        args: &[Param],
        source: &dyn GradientSource,
        grad_fn: Option<GradFn<'_>>,
    ) -> (Vec<Value>, Option<f64>) {
        match grad_fn {
            Some(g) => (g(args), None),
            None => source.gradient(objective, args),
        }
    }

    /// One descent update over the argument tuple.
    ///
    /// Gradient entries are consumed positionally, one per trainable
    /// argument; fixed arguments are copied through unchanged.
    pub fn apply_grad(&self, grads: &[Value], args: &[Param]) -> Result<Vec<Param>, GradError> {
        let trainable = args.iter().filter(|a| a.is_trainable()).count();
        if grads.len() < trainable {
            return Err(GradError::MissingGradient {
                expected: trainable,
                got: grads.len(),
            });
        }

        let mut out = Vec::with_capacity(args.len());
        let mut trained = 0;
        for arg in args {
            if !arg.is_trainable() {
                out.push(arg.clone());
                continue;
            }

            let x = flatten(&arg.value);
            let g = flatten(&grads[trained]);
            trained += 1;

            if x.len() != g.len() {
                match self.policy {
                    MismatchPolicy::Strict => {
                        return Err(GradError::ShapeMismatch {
                            param: x.len(),
                            grad: g.len(),
                        });
                    }
                    MismatchPolicy::Permissive => warn!(
                        "truncating update: parameter has {} leaves, gradient entry has {}",
                        x.len(),
                        g.len()
                    ),
                }
            }

            let stepped: Vec<f64> = x
                .iter()
                .zip(g.iter())
                .map(|(xi, gi)| xi - self.stepsize * gi)
                .collect();

            out.push(Param {
                value: unflatten_truncating(&stepped, &arg.value),
                tag: arg.tag,
            });
        }
        Ok(out)
    }

    /// Update the argument tuple with one step of the optimizer.
    pub fn step<F>(
        &self,
        source: &dyn GradientSource,
        objective: F,
        args: &[Param],
    ) -> Result<Vec<Param>, GradError>
    where
        F: Fn(&[Param]) -> f64 + Sync,
    {
        let (grads, _) = Self::compute_grad(&objective, args, source, None);
        self.apply_grad(&grads, args)
    }

    /// Like `step`, also returning the objective value at the pre-step
    /// point. When the gradient source did not produce one as a
    /// byproduct, the objective is evaluated on the original arguments.
    pub fn step_and_cost<F>(
        &self,
        source: &dyn GradientSource,
        objective: F,
        args: &[Param],
    ) -> Result<(Vec<Param>, f64), GradError>
    where
        F: Fn(&[Param]) -> f64 + Sync,
    {
        let (grads, forward) = Self::compute_grad(&objective, args, source, None);
        let new_args = self.apply_grad(&grads, args)?;
        let cost = forward.unwrap_or_else(|| objective(args));
        Ok((new_args, cost))
    }

    /// Single-argument form of `step`.
    pub fn step_single<F>(
        &self,
        source: &dyn GradientSource,
        objective: F,
        arg: &Param,
    ) -> Result<Param, GradError>
    where
        F: Fn(&Param) -> f64 + Sync,
    {
        let wrapped = |args: &[Param]| objective(&args[0]);
        let mut out = self.step(source, wrapped, std::slice::from_ref(arg))?;
        Ok(out.remove(0))
    }

    /// Single-argument form of `step_and_cost`.
    pub fn step_and_cost_single<F>(
        &self,
        source: &dyn GradientSource,
        objective: F,
        arg: &Param,
    ) -> Result<(Param, f64), GradError>
    where
        F: Fn(&Param) -> f64 + Sync,
    {
        let wrapped = |args: &[Param]| objective(&args[0]);
        let (mut out, cost) = self.step_and_cost(source, wrapped, std::slice::from_ref(arg))?;
        Ok((out.remove(0), cost))
    }

    /// Update the argument tuple using a supplied gradient function.
    pub fn step_with_grad<G>(&self, grad_fn: G, args: &[Param]) -> Result<Vec<Param>, GradError>
    where
        G: Fn(&[Param]) -> Vec<Value>,
    {
        let grads = grad_fn(args);
        self.apply_grad(&grads, args)
    }

    /// Like `step_with_grad`, also returning the objective value at the
    /// pre-step point. The supplied-gradient path never yields a forward
    /// value, so the objective is evaluated explicitly.
    pub fn step_and_cost_with_grad<F, G>(
        &self,
        objective: F,
        grad_fn: G,
        args: &[Param],
    ) -> Result<(Vec<Param>, f64), GradError>
    where
        F: Fn(&[Param]) -> f64,
        G: Fn(&[Param]) -> Vec<Value>,
    {
        let grads = grad_fn(args);
        let new_args = self.apply_grad(&grads, args)?;
        Ok((new_args, objective(args)))
    }
}
