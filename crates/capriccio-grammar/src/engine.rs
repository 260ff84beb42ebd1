//! Backtracking evaluation of a [`Consumer`] against text.
//!
//! Each primitive is evaluated at a byte position and either returns the
//! position after its match, having appended its values to the output, or
//! fails and leaves the output exactly as it found it. That contract is what
//! lets `Sequence` and `Choice` backtrack without any extra bookkeeping.

use std::fmt::Debug;

use crate::consumer::Consumer;
use crate::errors::SyntaxError;
use crate::matched::Matched;

/// Run `grammar` against the whole of `input`.
///
/// # Errors
/// Returns a [`SyntaxError`] when the grammar fails, or matches only a prefix
/// of the input. The error points at the furthest position any primitive
/// reached.
pub fn evaluate<L>(grammar: &Consumer<L>, input: &str) -> Result<Vec<Matched<L>>, SyntaxError>
where
    L: Clone + Debug,
{
    let mut evaluator = Evaluator::new(input);
    let mut out = Vec::new();
    let end = evaluator.eval(grammar, 0, &mut out);
    log::trace!(
        "grammar evaluation stopped at {end:?} of {} bytes (furthest {})",
        input.len(),
        evaluator.furthest
    );
    match end {
        Some(end) if end == input.len() => Ok(out),
        Some(end) => Err(SyntaxError::at(input, evaluator.furthest.max(end))),
        None => Err(SyntaxError::at(input, evaluator.furthest)),
    }
}

struct Evaluator<'a> {
    input: &'a str,
    furthest: usize,
}

impl<'a> Evaluator<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, furthest: 0 }
    }

    fn rest(&self, pos: usize) -> &'a str {
        self.input.get(pos..).unwrap_or_default()
    }

    fn reached(&mut self, pos: usize) {
        self.furthest = self.furthest.max(pos);
    }

    fn eval<L>(&mut self, consumer: &Consumer<L>, pos: usize, out: &mut Vec<Matched<L>>) -> Option<usize>
    where
        L: Clone + Debug,
    {
        match consumer {
            Consumer::Literal { text, ignore_case } => {
                self.eval_literal(text, *ignore_case, pos, out)
            }
            Consumer::Charset(set) => self.eval_char(pos, out, |ch| set.contains(ch)),
            Consumer::AnyExcept(set) => self.eval_char(pos, out, |ch| !set.contains(ch)),
            Consumer::Sequence(items) => {
                let mark = out.len();
                let mut cur = pos;
                for item in items {
                    let Some(next) = self.eval(item, cur, out) else {
                        out.truncate(mark);
                        return None;
                    };
                    cur = next;
                }
                Some(cur)
            }
            Consumer::Choice(alternatives) => alternatives
                .iter()
                .find_map(|alternative| self.eval(alternative, pos, out)),
            Consumer::ZeroOrMore(inner) => Some(self.repeat(inner, pos, out)),
            Consumer::OneOrMore(inner) => {
                let first = self.eval(inner, pos, out)?;
                Some(self.repeat(inner, first, out))
            }
            Consumer::Optional(inner) => Some(self.eval(inner, pos, out).unwrap_or(pos)),
            Consumer::Not(inner) => {
                // A lookahead that matches is a failure, but how far it read
                // says nothing about where the document went wrong.
                let furthest = self.furthest;
                let matched = self.eval(inner, pos, &mut Vec::new()).is_some();
                self.furthest = furthest;
                if matched { None } else { Some(pos) }
            }
            Consumer::Discard(inner) => self.eval(inner, pos, &mut Vec::new()),
            Consumer::Flatten(inner) => {
                let mut scratch = Vec::new();
                let end = self.eval(inner, pos, &mut scratch)?;
                let mut text = String::new();
                for value in &scratch {
                    value.collect_text(&mut text);
                }
                out.push(Matched::Text(text));
                Some(end)
            }
            Consumer::Label(label, inner) => {
                let mut children = Vec::new();
                let end = self.eval(inner, pos, &mut children)?;
                out.push(Matched::Node {
                    label: label.clone(),
                    children,
                });
                Some(end)
            }
            Consumer::Replace(inner, to) => {
                let end = self.eval(inner, pos, &mut Vec::new())?;
                out.push(Matched::Text(to.clone()));
                Some(end)
            }
            Consumer::Interleaved { separator, item } => {
                let mut cur = self.eval(item, pos, out)?;
                loop {
                    let Some(after_separator) = self.eval(separator, cur, &mut Vec::new()) else {
                        break;
                    };
                    let mark = out.len();
                    match self.eval(item, after_separator, out) {
                        Some(next) if next > cur => cur = next,
                        Some(_) => {
                            out.truncate(mark);
                            break;
                        }
                        None => break,
                    }
                }
                Some(cur)
            }
        }
    }

    fn eval_literal<L>(
        &mut self,
        text: &str,
        ignore_case: bool,
        pos: usize,
        out: &mut Vec<Matched<L>>,
    ) -> Option<usize> {
        let candidate = self.rest(pos).get(..text.len());
        let matches = candidate.is_some_and(|candidate| {
            if ignore_case {
                candidate.eq_ignore_ascii_case(text)
            } else {
                candidate == text
            }
        });
        match candidate {
            Some(candidate) if matches => {
                let end = pos + text.len();
                self.reached(end);
                out.push(Matched::Text(candidate.to_owned()));
                Some(end)
            }
            _ => {
                self.reached(pos);
                None
            }
        }
    }

    fn eval_char<L>(
        &mut self,
        pos: usize,
        out: &mut Vec<Matched<L>>,
        accept: impl Fn(char) -> bool,
    ) -> Option<usize> {
        match self.rest(pos).chars().next() {
            Some(ch) if accept(ch) => {
                let end = pos + ch.len_utf8();
                self.reached(end);
                out.push(Matched::Text(ch.to_string()));
                Some(end)
            }
            _ => {
                self.reached(pos);
                None
            }
        }
    }

    /// Greedy repetition; stops when `inner` fails or stops making progress.
    fn repeat<L>(&mut self, inner: &Consumer<L>, pos: usize, out: &mut Vec<Matched<L>>) -> usize
    where
        L: Clone + Debug,
    {
        let mut cur = pos;
        loop {
            let mark = out.len();
            match self.eval(inner, cur, out) {
                Some(next) if next > cur => cur = next,
                Some(_) => {
                    out.truncate(mark);
                    return cur;
                }
                None => return cur,
            }
        }
    }
}
