//! Reads the classroom input format from stdin and prints, per test case,
//! the shortest path and cost for every ordered vertex pair.
//!
//! Usage: shortest_paths [--show-matrix] < input.txt

use std::io::{self, BufWriter, Write};

use dense_apsp::io::{parser, Formatter};
use dense_apsp::{ApspEngine, Error};

fn main() {
    env_logger::init();

    let show_matrix = std::env::args().any(|arg| arg == "--show-matrix");
    if let Err(err) = run(show_matrix) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(show_matrix: bool) -> dense_apsp::Result<()> {
    let stdin = io::stdin();
    let cases = parser::read_cases::<i64, _>(stdin.lock())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let formatter = Formatter::new().with_matrix_dump(show_matrix);

    let case_count = cases.len();
    for (case_index, case) in cases.into_iter().enumerate() {
        let mut engine: ApspEngine<i64> = ApspEngine::new(case.vertex_count);
        for (u, v, weight) in case.edges {
            engine.add_edge(u, v, weight)?;
        }

        match engine.relax_all_pairs() {
            Ok(()) => formatter.write_case(&mut out, &engine)?,
            Err(Error::NegativeCycleDetected(vertex)) => {
                formatter.write_negative_cycle(&mut out, vertex)?
            }
            Err(other) => return Err(other),
        }

        if case_index + 1 != case_count {
            writeln!(&mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
