use clap::{Parser, ValueEnum};

use circuits::{hardware_efficient, hardware_efficient_params};
use optim::{
    multi_start, write_trace, CentralDifference, GradientDescent, GradientSource, ParameterShift,
};
use params::{flatten, Param};
use rng::SeedRng;

/// Gradient-descent runner with parallel restarts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Objective surface: quadratic | rosenbrock | ring
    #[arg(long, value_enum, default_value_t = Surface::Quadratic)]
    objective: Surface,

    /// Stepsize (eta)
    #[arg(long, default_value_t = 0.1)]
    stepsize: f64,

    /// Number of descent iterations
    #[arg(long, default_value_t = 100)]
    iters: usize,

    /// Number of parallel restarts
    #[arg(long, default_value_t = 4)]
    starts: usize,

    /// Problem dimensions (quadratic) or ansatz wires (ring)
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// Ansatz depth for the ring objective
    #[arg(long, default_value_t = 2)]
    depth: usize,

    /// RNG seed (full reproducibility)
    #[arg(long, default_value = "descent-seed")]
    seed: String,

    /// Output CSV path for the best run's cost trace
    #[arg(long, default_value = "descent_trace.csv")]
    out: String,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Surface {
    Quadratic,
    Rosenbrock,
    Ring,
}

fn main() {
    let args = Args::parse();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .expect("Failed to build Rayon thread pool");
    }

    if args.starts == 0 {
        eprintln!("starts must be > 0");
        std::process::exit(1);
    }

    match args.objective {
        Surface::Quadratic => {
            let objective =
                |ps: &[Param]| flatten(&ps[0].value).iter().map(|x| x * x).sum::<f64>();
            let inits = box_inits(&args, args.size);
            optimize(&args, &CentralDifference::default(), objective, inits);
        }
        Surface::Rosenbrock => {
            let objective = |ps: &[Param]| {
                let v = flatten(&ps[0].value);
                let (x, y) = (v[0], v[1]);
                (1.0 - x).powi(2) + 100.0 * (y - x * x).powi(2)
            };
            let inits = box_inits(&args, 2);
            optimize(&args, &CentralDifference::default(), objective, inits);
        }
        Surface::Ring => {
            // Separable surrogate cost over the ansatz's rotation angles;
            // expectation values would need a state simulator.
            let (wires, depth) = (args.size, args.depth);
            let n = hardware_efficient_params(wires, depth);
            let objective = move |ps: &[Param]| {
                let weights = flatten(&ps[0].value);
                let c = hardware_efficient(&weights, wires, depth);
                c.rotation_angles().iter().map(|t| t.cos()).sum::<f64>()
            };
            let inits = angle_inits(&args, n);
            optimize(&args, &ParameterShift, objective, inits);
        }
    }
}

/// Initial points drawn uniformly from [-2, 2) per dimension.
fn box_inits(args: &Args, dims: usize) -> Vec<Vec<Param>> {
    (0..args.starts)
        .map(|s| {
            let mut rng = SeedRng::new(format!("{}-start-{}", args.seed, s).as_bytes());
            let v: Vec<f64> = (0..dims)
                .map(|_| rng.next_f64(b"INIT") * 4.0 - 2.0)
                .collect();
            vec![Param::trainable(v)]
        })
        .collect()
}

/// Initial rotation angles in [0, 2π) per weight.
fn angle_inits(args: &Args, n: usize) -> Vec<Vec<Param>> {
    (0..args.starts)
        .map(|s| {
            let mut rng = SeedRng::new(format!("{}-start-{}", args.seed, s).as_bytes());
            vec![Param::trainable(rng.angles(b"INIT", n))]
        })
        .collect()
}

fn optimize<F>(
    args: &Args,
    source: &(dyn GradientSource + Sync),
    objective: F,
    inits: Vec<Vec<Param>>,
) where
    F: Fn(&[Param]) -> f64 + Sync,
{
    let starts = inits.len();
    let opt = GradientDescent::new(args.stepsize);

    let run = match multi_start(&opt, source, objective, inits, args.iters) {
        Ok(run) => run,
        Err(err) => {
            eprintln!("descent failed: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = write_trace(&args.out, &run.trace) {
        eprintln!("Failed to write CSV to {}: {}", args.out, err);
    }

    println!(
        "descent: {:?} min cost = {:.6} after {} iters (starts = {}, eta = {})",
        args.objective, run.cost, args.iters, starts, args.stepsize
    );
}
