// crates/domain/src/parsing.rs
use jid_sort_shared_kernel::DomainResult;

use crate::model::Jid;

/// Lazily parses each incoming line into a [`Jid`].
///
/// Unparsable lines are yielded as errors so the caller decides whether to
/// report them; the iterator itself never stops early.
#[derive(Debug)]
pub struct JidLines<I> {
    lines: I,
}

impl<I> JidLines<I> {
    pub fn new(lines: I) -> Self {
        Self { lines }
    }
}

impl<I, S> Iterator for JidLines<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = DomainResult<Jid>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| Jid::parse_line(line.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

/// Convenience constructor for [`JidLines`].
pub fn split_jids<I, S>(lines: I) -> JidLines<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    JidLines::new(lines.into_iter())
}
