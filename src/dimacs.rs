use std::collections::HashSet;

use thiserror::Error;

/// Reasons a DIMACS CNF input is rejected.
#[derive(Debug, Error)]
pub enum DimacsError {
    #[error("line {line}: invalid token {token:?}")]
    InvalidToken { line: usize, token: String },

    #[error("line {line}: malformed problem line")]
    MalformedHeader { line: usize },

    #[error("line {line}: literal {lit} outside the declared range 1..={num_vars}")]
    LiteralOutOfRange {
        line: usize,
        lit: i32,
        num_vars: usize,
    },

    #[error("line {line}: clause is missing its terminating 0")]
    MissingTerminator { line: usize },
}

/// A CNF formula as read from DIMACS text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    pub num_vars: usize,
    pub clauses: Vec<Vec<i32>>,
}

impl Formula {
    /// Parse DIMACS CNF text.
    ///
    /// Comment lines (`c`), blank lines and the optional `p cnf` header are
    /// handled. Each remaining line holds one clause terminated by `0`;
    /// tokens after the terminator are ignored and a line consisting of a
    /// bare `0` is the empty clause. Clauses repeating an earlier literal
    /// multiset are dropped. Without a header the variable count is the
    /// largest literal magnitude seen.
    pub fn parse(input: &str) -> Result<Formula, DimacsError> {
        let mut declared: Option<usize> = None;
        let mut max_var = 0usize;
        let mut clauses: Vec<Vec<i32>> = Vec::new();
        let mut seen: HashSet<Vec<i32>> = HashSet::new();

        for (pos, raw) in input.lines().enumerate() {
            let line = pos + 1;
            let text = raw.trim();

            if text.is_empty() || text.starts_with('c') {
                continue;
            }

            if text.starts_with('p') {
                let mut fields = text.split_whitespace().skip(1);
                match (
                    fields.next(),
                    fields.next().and_then(|n| n.parse::<usize>().ok()),
                    fields.next().and_then(|n| n.parse::<usize>().ok()),
                ) {
                    (Some("cnf"), Some(vars), Some(_clauses)) => declared = Some(vars),
                    _ => return Err(DimacsError::MalformedHeader { line }),
                }
                continue;
            }

            let mut lits = Vec::new();
            let mut terminated = false;
            for token in text.split_whitespace() {
                let lit: i32 = token.parse().map_err(|_| DimacsError::InvalidToken {
                    line,
                    token: token.to_string(),
                })?;

                if lit == 0 {
                    terminated = true;
                    break;
                }

                let var = lit.unsigned_abs() as usize;
                if let Some(num_vars) = declared {
                    if var > num_vars {
                        return Err(DimacsError::LiteralOutOfRange {
                            line,
                            lit,
                            num_vars,
                        });
                    }
                }
                max_var = max_var.max(var);
                lits.push(lit);
            }
            if !terminated {
                return Err(DimacsError::MissingTerminator { line });
            }

            let mut key = lits.clone();
            key.sort_unstable();
            if seen.insert(key) {
                clauses.push(lits);
            }
        }

        Ok(Formula {
            num_vars: declared.unwrap_or(max_var),
            clauses,
        })
    }
}
