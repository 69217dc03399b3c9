//! Template argument list disambiguation.
//!
//! WGSL uses `<` and `>` both as comparison and shift operators, and as the delimiters of a
//! template argument list such as `array<vec3<f32>, 4>`. Which one a `<` is can only be decided by
//! looking ahead for a matching `>`, so when the grammar reaches an identifier followed by `<`, a
//! single lookahead pass classifies every `<` and `>` up to the point where the first `<` is
//! resolved. The verdicts are queued in [`State`] and replayed as the tokens are scanned.

use crate::{CodePoint, Input, Lexer, State};
use smallvec::SmallVec;

/// A `<` that may still be closed by a `>` as a template list.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    /// Index of the `<` in `lt_is_tmpl`.
    index: usize,
    /// The expression nesting depth at the `<`.
    depth: usize,
}

const fn cp(c: char) -> CodePoint {
    c as CodePoint
}

impl State {
    /// Classifies the `<` and `>` tokens starting at the lexer's position.
    ///
    /// The lexer must be positioned just past an identifier, at a `<`; if it is not, nothing is
    /// consumed or recorded. On return, one entry has been pushed to `lt_is_tmpl` for every `<`
    /// consumed and one to `gt_is_tmpl` for every `>`, up to the point where every candidate
    /// template list start has been resolved, or the end of input.
    ///
    /// Every `<` is assumed to be an operator until a `>` at the same expression depth closes it.
    /// Expression terminators (`;`, `{`, `:` and assignments) discard all candidates; closing
    /// brackets and the `&&` and `||` operators discard the candidates at the current depth.
    ///
    /// Line comments are not skipped, so a `>` inside one is classified like any other.
    ///
    /// # Panics
    ///
    /// Panics if more than [`BitQueue::CAPACITY`](crate::BitQueue::CAPACITY) `<` or `>` tokens
    /// are pending in either queue.
    #[instrument(level = "trace", skip_all)]
    pub fn classify_template_args<I: Input + ?Sized>(&mut self, lexer: &mut Lexer<'_, I>) {
        if !lexer.eat(cp('<')) {
            trace!("missing '<'");
            return;
        }

        let mut depth = 0usize;
        let mut stack = SmallVec::<[Candidate; 8]>::new();

        trace!("'<' (initial)");
        stack.push(Candidate { index: self.lt_is_tmpl.len(), depth });
        self.lt_is_tmpl.push_back(false);

        while !stack.is_empty() && !lexer.is_eof() {
            lexer.skip_whitespace();

            if lexer.eat_block_comment() {
                continue;
            }

            // A template list can't contain an assignment, so `=` below discards all candidates.
            // The comparison operators `==`, `!=`, `<=` and `>=` are consumed whole before that.

            if lexer.eat_ident() {
                lexer.skip_whitespace();
                if lexer.eat(cp('<')) {
                    trace!("'<' after identifier");
                    self.lt_is_tmpl.push_back(false);
                    if lexer.eat(cp('=')) {
                        // No template argument starts with `=`: `a<b<=c>`.
                    } else if lexer.eat(cp('<')) {
                        // No template argument starts with `<`: `a<b<<c>`.
                        self.lt_is_tmpl.push_back(false);
                    } else {
                        stack.push(Candidate { index: self.lt_is_tmpl.len() - 1, depth });
                    }
                }
                continue;
            }

            if lexer.eat(cp('<')) {
                // Not after an identifier, so an operator: `a<1<<c<d>()>`.
                trace!("'<'");
                self.lt_is_tmpl.push_back(false);
                continue;
            }

            if lexer.eat(cp('>')) {
                match stack.last() {
                    Some(top) if top.depth == depth => {
                        trace!(index = top.index, "'>' template match");
                        self.gt_is_tmpl.push_back(true);
                        self.lt_is_tmpl.set(top.index, true);
                        stack.pop();
                    }
                    _ => {
                        trace!("non-template '>'");
                        self.gt_is_tmpl.push_back(false);
                        lexer.eat(cp('='));
                    }
                }
                continue;
            }

            // `!=`, and unary negation.
            if lexer.eat(cp('!')) {
                lexer.eat(cp('='));
                continue;
            }

            if lexer.eat_any(&[cp('('), cp('[')]) {
                depth += 1;
                trace!(depth, "nested expression");
                continue;
            }

            if lexer.eat_any(&[cp(')'), cp(']')]) {
                pop_at_depth(&mut stack, depth);
                depth = depth.saturating_sub(1);
                trace!(depth, "end of nested expression");
                continue;
            }

            if lexer.eat(cp('=')) {
                if lexer.eat(cp('=')) {
                    continue;
                }
                // An assignment, or the tail of a compound assignment such as `+=`.
                trace!("'=' expression terminator");
                depth = 0;
                stack.clear();
                continue;
            }

            let terminator = lexer.peek();
            if lexer.eat_any(&[cp(';'), cp('{'), cp(':')]) {
                trace!(terminator = ?char::from_u32(terminator), "expression terminator");
                depth = 0;
                stack.clear();
                continue;
            }

            let op = lexer.peek();
            if lexer.eat_any(&[cp('&'), cp('|')]) {
                if lexer.eat(op) {
                    // `a < b || c > d` is two comparisons, not the template argument `b || c`.
                    // Parenthesize as `a<(b || c)>` for the latter.
                    trace!("short-circuiting expression");
                    pop_at_depth(&mut stack, depth);
                }
                continue;
            }

            let skipped = lexer.bump();
            trace!(skipped = ?char::from_u32(skipped), "skip");
        }
    }
}

fn pop_at_depth(stack: &mut SmallVec<[Candidate; 8]>, depth: usize) {
    while stack.last().is_some_and(|top| top.depth == depth) {
        stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StrInput;

    /// Runs a classification pass on `src` after skipping up to the first `<`, and renders both
    /// queues.
    fn classify(src: &str) -> String {
        let mut input = StrInput::new(src);
        input.skip_bytes(src.find('<').unwrap());
        let mut state = State::default();
        state.classify_template_args(&mut Lexer::new(&mut input));
        format!("lt={} gt={}", state.lt_is_tmpl, state.gt_is_tmpl)
    }

    #[track_caller]
    fn check(src: &str, expected: &str) {
        assert_eq!(classify(src), expected, "{src:?}");
    }

    #[test]
    fn nested_templates() {
        check("a<b<c>>;", "lt=2:## gt=2:##");
        check("array<vec3<f32>,5>;", "lt=2:## gt=2:##");
        check("vec3<i32>();", "lt=1:# gt=1:#");
    }

    #[test]
    fn less_than_equal_is_one_operator() {
        // The second `<` is the start of `<=`, never a template.
        check("a<b<=c>;", "lt=2:#. gt=1:#");
        check("a<(b<=c)>;", "lt=2:#. gt=1:#");
    }

    #[test]
    fn shift_left_is_one_operator() {
        check("a<b<<c>;", "lt=3:#.. gt=1:#");
        check("a<(b<<c)>;", "lt=3:#.. gt=1:#");
        check("a<1<<c>;", "lt=3:#.. gt=1:#");
        check("a<1<<c<d>()>;", "lt=4:#..# gt=2:##");
    }

    #[test]
    fn plain_comparisons() {
        check("a<b;", "lt=1:. gt=0:");
        check("a<b;c>d();", "lt=1:. gt=0:");
        check("a<b[c];", "lt=1:. gt=0:");
        check("a<b{} else if c > d {}", "lt=1:. gt=0:");
        check("a < b: c > d", "lt=1:. gt=0:");
    }

    #[test]
    fn nested_expressions() {
        check("a<(b>c);", "lt=1:. gt=1:.");
        check("a<b[c>(d)];", "lt=1:. gt=1:.");
        check("a<(b>>c)>;", "lt=1:# gt=3:..#");
        check("a<b[select(1,2,c>(d))];", "lt=1:. gt=1:.");
        check("a<b,c>==d;", "lt=1:# gt=1:#");
        check("a<b,c>=d;", "lt=1:# gt=1:#");
        check("a<1+2>();", "lt=1:# gt=1:#");
    }

    #[test]
    fn closing_bracket_discards_inner_candidates() {
        // The `<` after `b` is opened at depth 1 and can't be closed once `)` is reached.
        check("a<(b<c)>d;", "lt=2:#. gt=1:#");
        check("a((b<c), d>(e));", "lt=1:. gt=0:");
    }

    #[test]
    fn short_circuit() {
        check("a < b || c > d;", "lt=1:. gt=0:");
        check("a<b&&c>d;", "lt=1:. gt=0:");
        check("a<(b||c)>;", "lt=1:# gt=1:#");
        check("a<b<(c||d)>>;", "lt=2:## gt=2:##");
        // `&` and `|` alone are bitwise operators.
        check("a<b|c>;", "lt=1:# gt=1:#");
        check("a<b&c>;", "lt=1:# gt=1:#");
        check("a<b|(c)>;", "lt=1:# gt=1:#");
    }

    #[test]
    fn assignment_terminates() {
        check("a<b=c>d;", "lt=1:. gt=0:");
        check("a<b+=c>d;", "lt=1:. gt=0:");
        check("a<b!=c>;", "lt=1:# gt=1:#");
    }

    #[test]
    fn comments() {
        check("a</* > */b>;", "lt=1:# gt=1:#");
        check("a</* /* > */ > */b>;", "lt=1:# gt=1:#");
        check("a<b /c>;", "lt=1:# gt=1:#");
    }

    #[test]
    fn line_comments_are_not_skipped() {
        check("a<b // c>\n;", "lt=1:# gt=1:#");
    }

    #[test]
    fn end_of_input() {
        check("a<b", "lt=1:. gt=0:");
        check("a<b<c", "lt=2:.. gt=0:");
        check("a<b<c>", "lt=2:.# gt=1:#");
    }

    #[test]
    fn stops_once_resolved() {
        // The second template belongs to a later pass.
        check("a<b> + c<d>;", "lt=1:# gt=1:#");
    }

    #[test]
    fn whitespace_between_identifier_and_lt() {
        check("a<b <c>>;", "lt=2:## gt=2:##");
        check("a<\u{2028}b\t<c>\n>;", "lt=2:## gt=2:##");
    }

    #[test]
    fn not_at_lt() {
        let mut input = StrInput::new("a<b>");
        let mut state = State::default();
        state.classify_template_args(&mut Lexer::new(&mut input));
        assert!(state.is_empty());
        assert_eq!(input.pos(), 0);
    }

    #[test]
    fn appends_to_pending_entries() {
        let mut input = StrInput::new("<c>");
        let mut state = State::default();
        state.lt_is_tmpl.push_back(false);
        state.gt_is_tmpl.push_back(false);
        state.classify_template_args(&mut Lexer::new(&mut input));
        assert_eq!(state.lt_is_tmpl.to_string(), "2:.#");
        assert_eq!(state.gt_is_tmpl.to_string(), "2:.#");
    }
}
