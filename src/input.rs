//! Line oriented batch format.
//!
//! ```text
//! m n
//! parent weight        (m - 1 lines, for nodes 2..=m)
//! q x y | u x y        (n lines)
//! ```

use std::str::FromStr;

use tracing::{info, warn};

use crate::engine::QueryEngine;
use crate::error::{Error, Result};
use crate::tree::Tree;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `q x y`
    Distance(usize, usize),
    /// `u x y`
    Update(usize, i64),
}

impl Operation {
    /// Returns the answer of a distance query, `None` for an update.
    pub fn apply(self, engine: &mut QueryEngine) -> Result<Option<i64>> {
        match self {
            Operation::Distance(u, v) => engine.distance(u, v).map(Some),
            Operation::Update(x, w) => engine.update(x, w).map(|()| None),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Batch {
    pub tree: Tree,
    pub operations: Vec<Operation>,
}

/// Non-blank lines with their 1-based line numbers, split into tokens.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.lines().enumerate(),
            last: 0,
        }
    }

    fn next_line(&mut self) -> Option<(usize, Vec<&'a str>)> {
        for (i, line) in self.inner.by_ref() {
            let tokens: Vec<_> = line.split_whitespace().collect();
            if !tokens.is_empty() {
                self.last = i + 1;
                return Some((i + 1, tokens));
            }
        }
        None
    }

    /// The next line, which must hold exactly `arity` tokens.
    fn expect(&mut self, arity: usize, what: &str) -> Result<(usize, Vec<&'a str>)> {
        let (line, tokens) = self
            .next_line()
            .ok_or_else(|| Error::malformed(self.last + 1, format!("missing {}", what)))?;
        if tokens.len() != arity {
            return Err(Error::malformed(
                line,
                format!("{} needs {} tokens, found {}", what, arity, tokens.len()),
            ));
        }
        Ok((line, tokens))
    }
}

fn parse_token<T: FromStr>(line: usize, token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| Error::malformed(line, format!("invalid {} `{}`", what, token)))
}

impl Batch {
    pub fn parse(input: &str) -> Result<Self> {
        let mut lines = Lines::new(input);

        let (line, header) = lines.expect(2, "header `m n`")?;
        let nodes: usize = parse_token(line, header[0], "node count")?;
        let count: usize = parse_token(line, header[1], "operation count")?;
        if nodes == 0 {
            return Err(Error::EmptyTree);
        }

        // counts come from the header, so nothing is sized from them up front
        let mut edges = Vec::new();
        for _ in 1..nodes {
            let (line, tokens) = lines.expect(2, "edge `parent weight`")?;
            let parent: usize = parse_token(line, tokens[0], "parent")?;
            let weight: i64 = parse_token(line, tokens[1], "weight")?;
            if parent == 0 || parent > nodes {
                warn!(line, parent, "parent out of range");
                return Err(Error::NodeOutOfRange {
                    node: parent,
                    len: nodes,
                });
            }
            edges.push((parent, weight));
        }
        let tree = Tree::from_parents(edges)?;

        let mut operations = Vec::new();
        for _ in 0..count {
            let (line, tokens) = lines.expect(3, "operation")?;
            let x: usize = parse_token(line, tokens[1], "node")?;
            let op = match tokens[0] {
                "q" => Operation::Distance(x, parse_token(line, tokens[2], "node")?),
                "u" => Operation::Update(x, parse_token(line, tokens[2], "weight")?),
                tag => {
                    return Err(Error::malformed(
                        line,
                        format!("unknown operation `{}`", tag),
                    ))
                }
            };
            operations.push(op);
        }

        if let Some((line, _)) = lines.next_line() {
            warn!(line, "ignoring input past the last operation");
        }

        Ok(Self { tree, operations })
    }

    /// Runs every operation in order and collects the distance answers.
    pub fn run(&self) -> Result<Vec<i64>> {
        let mut engine = QueryEngine::new(&self.tree)?;
        self.run_on(&mut engine)
    }

    pub fn run_on(&self, engine: &mut QueryEngine) -> Result<Vec<i64>> {
        let mut answers = Vec::new();
        for &op in &self.operations {
            if let Some(answer) = op.apply(engine)? {
                answers.push(answer);
            }
        }
        info!(
            operations = self.operations.len(),
            queries = answers.len(),
            "batch done"
        );
        Ok(answers)
    }
}
