//! Parser for tabular homology-search hits.
//!
//! One hit per row; field 0 is the query identifier (a CDS pool id) and
//! field 1 the matched database reference identifier. Score columns may be
//! present but are not required. `#` comment lines are ignored.

use crate::error::{Error, Result};

const CONTEXT: &str = "homology hit table";

/// One homology hit: which pool entry matched which database reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub query:   String,
    pub subject: String,
}

pub fn parse_table(lines: impl Iterator<Item = String>) -> Result<Vec<Hit>> {
    let mut hits = Vec::new();
    for line in lines {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let query = fields
            .next()
            .ok_or_else(|| Error::parse(CONTEXT, "missing query id", line.clone()))?
            .to_string();
        let subject = fields
            .next()
            .ok_or_else(|| Error::parse(CONTEXT, "missing subject id", line.clone()))?
            .to_string();
        hits.push(Hit { query, subject });
    }
    Ok(hits)
}
