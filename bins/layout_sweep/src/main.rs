use clap::Parser;

use circuits::{
    hardware_efficient, hardware_efficient_params, symmetry_preserving,
    symmetry_preserving_params, uccsd_h2, uccsd_h2_params,
};

use std::fs::File;
use std::io::{BufWriter, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "Ansatz layout sweep: gate and weight counts by depth")]
struct Args {
    /// Number of wires
    #[arg(long, default_value_t = 4)]
    wires: usize,

    /// Maximum template depth
    #[arg(long, default_value_t = 8)]
    depth_max: usize,

    /// Output CSV path
    #[arg(long, default_value = "layout_sweep.csv")]
    out: String,
}

fn main() {
    let args = Args::parse();

    if args.wires < 2 {
        eprintln!("wires must be >= 2");
        std::process::exit(1);
    }
    if args.depth_max == 0 {
        eprintln!("depth_max must be > 0");
        std::process::exit(1);
    }

    let mut rows: Vec<(&str, usize, usize, usize)> = Vec::new();

    for depth in 1..=args.depth_max {
        let n = hardware_efficient_params(args.wires, depth);
        let c = hardware_efficient(&vec![0.0; n], args.wires, depth);
        rows.push(("hardware_efficient", depth, c.gate_count(), n));

        let n = symmetry_preserving_params(args.wires, depth);
        let c = symmetry_preserving(&vec![0.0; n], args.wires, depth);
        rows.push(("symmetry_preserving", depth, c.gate_count(), n));
    }

    // Fixed-depth template, one row.
    let c = uccsd_h2(&[0.0]);
    rows.push(("uccsd_h2", 1, c.gate_count(), uccsd_h2_params()));

    for (template, depth, gates, weights) in &rows {
        println!(
            "template={} depth={} gates={} weights={}",
            template, depth, gates, weights
        );
    }

    write_csv(&args.out, &rows);
}

fn write_csv(path: &str, rows: &[(&str, usize, usize, usize)]) {
    let file = File::create(path).expect("failed to create CSV file");
    let mut w = BufWriter::new(file);
    writeln!(w, "template,depth,gates,weights").expect("failed to write header");
    for (template, depth, gates, weights) in rows {
        writeln!(w, "{},{},{},{}", template, depth, gates, weights)
            .expect("failed to write row");
    }
}
