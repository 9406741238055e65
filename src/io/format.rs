use num_traits::{CheckedAdd, PrimInt, Signed};
use std::fmt::{Debug, Display};
use std::io::Write;

use crate::engine::ApspEngine;
use crate::graph::traits::Graph;
use crate::{Error, Result};

/// Renders a path as one-based, hyphen-joined vertex numbers, e.g. "1-2-3"
pub fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(|vertex| (vertex + 1).to_string())
        .collect::<Vec<_>>()
        .join("-")
}

/// Human-readable rendering of one test case's results.
///
/// The adjacency-matrix dump is an explicit option here, not a process-wide
/// flag: callers opt in per formatter.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    show_matrix: bool,
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the adjacency-matrix dump before the path listing
    pub fn with_matrix_dump(mut self, show_matrix: bool) -> Self {
        self.show_matrix = show_matrix;
        self
    }

    /// Writes every ordered pair's path and cost for a relaxed engine.
    /// Unreachable pairs are listed as such rather than aborting the rest.
    pub fn write_case<W, Out>(&self, out: &mut Out, engine: &ApspEngine<W>) -> Result<()>
    where
        W: PrimInt + Signed + CheckedAdd + Debug + Display + Send + Sync,
        Out: Write,
    {
        if self.show_matrix {
            self.write_matrix(out, engine)?;
        }

        let n = engine.vertex_count();
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                match engine.reconstruct_path(i, j) {
                    Ok(path) => {
                        let cost = engine
                            .distance(i, j)?
                            .ok_or(Error::NoPathExists(i, j))?;
                        writeln!(
                            out,
                            "{} -> {}: {} (cost {})",
                            i + 1,
                            j + 1,
                            format_path(&path),
                            cost
                        )?;
                    }
                    Err(Error::NoPathExists(..)) => {
                        writeln!(out, "{} -> {}: unreachable", i + 1, j + 1)?;
                    }
                    Err(other) => return Err(other),
                }
            }
        }

        Ok(())
    }

    /// Writes the negative-cycle report that replaces a case's path listing
    pub fn write_negative_cycle<Out>(&self, out: &mut Out, vertex: usize) -> Result<()>
    where
        Out: Write,
    {
        writeln!(
            out,
            "negative cycle through vertex {}; shortest paths undefined",
            vertex + 1
        )?;
        Ok(())
    }

    fn write_matrix<W, Out>(&self, out: &mut Out, engine: &ApspEngine<W>) -> Result<()>
    where
        W: PrimInt + Signed + CheckedAdd + Debug + Display + Send + Sync,
        Out: Write,
    {
        let graph = engine.graph();
        let n = graph.vertex_count();
        for i in 0..n {
            for j in 0..n {
                let cell = match graph.edge_weight(i, j) {
                    Some(weight) => weight.to_string(),
                    None if i == j => "0".to_string(),
                    None => ".".to_string(),
                };
                write!(out, "{:>4} ", cell)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_one_based_hyphen_joined() {
        assert_eq!(format_path(&[0, 1, 2]), "1-2-3");
        assert_eq!(format_path(&[4]), "5");
    }

    #[test]
    fn writes_paths_and_unreachable_pairs() {
        let mut engine: ApspEngine<i64> = ApspEngine::new(3);
        engine.add_edge(0, 1, 1).unwrap();
        engine.add_edge(1, 2, 2).unwrap();
        engine.relax_all_pairs().unwrap();

        let mut buffer = Vec::new();
        Formatter::new().write_case(&mut buffer, &engine).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("1 -> 3: 1-2-3 (cost 3)"));
        assert!(output.contains("2 -> 1: unreachable"));
    }

    #[test]
    fn matrix_dump_marks_missing_edges() {
        let mut engine: ApspEngine<i64> = ApspEngine::new(2);
        engine.add_edge(0, 1, 9).unwrap();
        engine.relax_all_pairs().unwrap();

        let mut buffer = Vec::new();
        Formatter::new()
            .with_matrix_dump(true)
            .write_case(&mut buffer, &engine)
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let mut lines = output.lines();
        assert_eq!(lines.next().unwrap().trim(), "0    9");
        assert_eq!(lines.next().unwrap().trim(), ".    0");
    }
}
