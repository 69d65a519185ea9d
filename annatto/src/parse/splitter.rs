use crate::error::{Error, Result};

/// Groups a stream of text lines into per-record chunks.
///
/// A record starts at every line matched by the head predicate and runs up
/// to (not including) the next head line. Lines matched by the ignore
/// predicate are dropped entirely. Both predicates are policy closures:
/// pure, side-effect free, called once per line.
///
/// Content before the first head line that the ignore predicate does not
/// cover is malformed input and yields an error. Empty input yields zero
/// groups; consecutive head lines yield one-line groups.
pub struct RecordSplitter<'a, I> {
    lines:   I,
    is_head: Box<dyn Fn(&str) -> bool + 'a>,
    ignore:  Box<dyn Fn(&str) -> bool + 'a>,
    context: String,
    pending: Option<String>,
    started: bool,
    failed:  bool,
}

impl<'a, I> RecordSplitter<'a, I>
where
    I: Iterator<Item = String>,
{
    pub fn new(
        lines: I,
        context: impl Into<String>,
        is_head: impl Fn(&str) -> bool + 'a,
    ) -> Self {
        Self {
            lines,
            is_head: Box::new(is_head),
            ignore: Box::new(|_| false),
            context: context.into(),
            pending: None,
            started: false,
            failed: false,
        }
    }

    pub fn with_ignore(
        mut self,
        ignore: impl Fn(&str) -> bool + 'a,
    ) -> Self {
        self.ignore = Box::new(ignore);
        self
    }

    fn next_relevant(&mut self) -> Option<String> {
        loop {
            let line = self.lines.next()?;
            if !(self.ignore)(&line) {
                return Some(line);
            }
        }
    }
}

impl<I> Iterator for RecordSplitter<'_, I>
where
    I: Iterator<Item = String>,
{
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let head = match self.pending.take() {
            Some(head) => head,
            None => {
                let line = self.next_relevant()?;
                if !(self.is_head)(&line) {
                    // Only reachable before the first record boundary.
                    debug_assert!(!self.started);
                    self.failed = true;
                    return Some(Err(Error::parse(
                        self.context.clone(),
                        "no recognizable record boundary",
                        line,
                    )));
                }
                line
            },
        };
        self.started = true;

        let mut group = vec![head];
        while let Some(line) = self.next_relevant() {
            if (self.is_head)(&line) {
                self.pending = Some(line);
                break;
            }
            group.push(line);
        }
        Some(Ok(group))
    }
}

/// Groups columnar rows by the value of a whitespace-separated field.
///
/// Consecutive rows sharing the key field form one record, matching tools
/// that emit all rows for a query in one run. Rows matched by the ignore
/// predicate are dropped; a row missing the key field is an error.
pub fn group_by_field(
    lines: impl Iterator<Item = String>,
    field: usize,
    context: &str,
    ignore: impl Fn(&str) -> bool,
) -> Result<Vec<Vec<String>>> {
    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut current_key: Option<String> = None;

    for line in lines {
        if ignore(&line) {
            continue;
        }
        let key = line
            .split_whitespace()
            .nth(field)
            .ok_or_else(|| {
                Error::parse(
                    context,
                    format!("missing grouping field {}", field),
                    line.clone(),
                )
            })?
            .to_string();

        if current_key.as_deref() == Some(key.as_str()) {
            groups
                .last_mut()
                .expect("a group exists whenever a key is current")
                .push(line);
        }
        else {
            current_key = Some(key);
            groups.push(vec![line]);
        }
    }
    Ok(groups)
}
