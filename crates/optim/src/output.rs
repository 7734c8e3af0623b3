use std::fs::File;
use std::io::{self, Write};

pub fn write_trace(path: &str, rows: &[(usize, f64)]) -> io::Result<()> {
    let mut f = File::create(path)?;
    writeln!(f, "iter,cost")?;
    for (iter, cost) in rows {
        writeln!(f, "{},{}", iter, cost)?;
    }
    Ok(())
}
