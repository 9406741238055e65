use num_traits::{Num, PrimInt, Signed};
use std::fmt::Debug;
use std::io::BufRead;

use crate::{Error, Result};

/// One parsed test case: a vertex count and zero-based weighted edges
#[derive(Debug, Clone)]
pub struct TestCase<W> {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, W)>,
}

/// Reads the classroom input format:
///
/// ```text
/// T                 number of test cases
/// V E               per case: vertex count, edge count
/// u v w             E lines, one-based endpoints, integer weight
/// ```
///
/// Vertex numbers are converted to zero-based here and nowhere else. Blank
/// lines are skipped; anything else malformed is an error, so the engine
/// never sees a bad edge.
pub fn read_cases<W, R>(reader: R) -> Result<Vec<TestCase<W>>>
where
    W: PrimInt + Signed + Debug,
    R: BufRead,
{
    let mut lines = reader.lines();

    let case_count = parse_count(&fields(&next_line(&mut lines)?, 1)?[0])?;
    let mut cases = Vec::with_capacity(case_count);

    for _ in 0..case_count {
        let header = next_line(&mut lines)?;
        let header_fields = fields(&header, 2)?;
        let vertex_count = parse_count(&header_fields[0])?;
        let edge_count = parse_count(&header_fields[1])?;

        let mut edges = Vec::with_capacity(edge_count);
        for _ in 0..edge_count {
            let line = next_line(&mut lines)?;
            let edge_fields = fields(&line, 3)?;
            let u = to_zero_based(&edge_fields[0])?;
            let v = to_zero_based(&edge_fields[1])?;
            let weight = parse_weight::<W>(&edge_fields[2])?;
            log::debug!("edge {} -> {} weight {:?}", u, v, weight);
            edges.push((u, v, weight));
        }

        cases.push(TestCase {
            vertex_count,
            edges,
        });
    }

    Ok(cases)
}

/// Next non-blank line, or a report that the input ended early
fn next_line<I>(lines: &mut I) -> Result<String>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    loop {
        match lines.next() {
            None => return Err(Error::MalformedInput("unexpected end of input".to_string())),
            Some(line) => {
                let line = line?;
                if !line.trim().is_empty() {
                    return Ok(line);
                }
            }
        }
    }
}

fn fields(line: &str, expected: usize) -> Result<Vec<String>> {
    let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if fields.len() != expected {
        return Err(Error::MalformedInput(format!(
            "expected {} fields, got {} in {:?}",
            expected,
            fields.len(),
            line
        )));
    }
    Ok(fields)
}

fn parse_count(field: &str) -> Result<usize> {
    field
        .parse()
        .map_err(|_| Error::MalformedInput(format!("invalid count {:?}", field)))
}

fn parse_weight<W: Num>(field: &str) -> Result<W> {
    W::from_str_radix(field, 10)
        .map_err(|_| Error::MalformedInput(format!("invalid weight {:?}", field)))
}

fn to_zero_based(field: &str) -> Result<usize> {
    let one_based = parse_count(field)?;
    one_based.checked_sub(1).ok_or_else(|| {
        Error::MalformedInput(format!("vertex numbers are one-based, got {:?}", field))
    })
}
