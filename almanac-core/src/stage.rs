//! A single named rewrite stage and its chain-walking lookups

use crate::range::{Interval, RewriteRule};

/// One named source-to-destination rewrite map with disjoint interval rules.
///
/// A stage exclusively owns the following stage through `next`, so a chain of
/// stages is singly linked and acyclic by construction. Lookups start at any
/// stage and walk forward to the terminal stage (the one without a `next`).
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    source_name: String,
    dest_name: String,
    rules: Vec<RewriteRule>,
    next: Option<Box<Stage>>,
}

impl Stage {
    pub(crate) fn new(source_name: &str, dest_name: &str) -> Self {
        Self {
            source_name: source_name.to_string(),
            dest_name: dest_name.to_string(),
            rules: Vec::new(),
            next: None,
        }
    }

    /// Name of the domain this stage reads from.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Name of the domain this stage maps into.
    pub fn dest_name(&self) -> &str {
        &self.dest_name
    }

    /// The stage's rewrite rules, in input order.
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// The following stage, absent on the terminal stage.
    pub fn next(&self) -> Option<&Stage> {
        self.next.as_deref()
    }

    pub(crate) fn push_rule(&mut self, rule: RewriteRule) {
        self.rules.push(rule);
    }

    pub(crate) fn set_next(&mut self, next: Stage) {
        self.next = Some(Box::new(next));
    }

    pub(crate) fn next_mut(&mut self) -> Option<&mut Stage> {
        self.next.as_deref_mut()
    }

    /// Rewrite a value within this stage only: the first rule whose source
    /// interval contains the value applies, identity otherwise.
    fn rewrite(&self, value: u64) -> u64 {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(value))
            .unwrap_or(value)
    }

    /// Resolve a value through this stage and every stage after it, returning
    /// the terminal-domain value.
    pub fn resolve(&self, value: u64) -> u64 {
        let mapped = self.rewrite(value);
        match &self.next {
            Some(next) => next.resolve(mapped),
            None => mapped,
        }
    }

    /// Split `span` against this stage's rules. Pieces intersecting a rule's
    /// source interval are shifted into the destination domain; leftovers pass
    /// through unchanged. The output pieces together cover exactly the image
    /// of `span` under this stage.
    fn project(&self, span: Interval) -> Vec<Interval> {
        let mut mapped = Vec::new();
        let mut pending = vec![span];
        for rule in &self.rules {
            let mut missed = Vec::with_capacity(pending.len());
            for piece in pending {
                match rule.split(piece) {
                    Some(split) => {
                        mapped.push(split.mapped);
                        if !split.left.is_empty() {
                            missed.push(split.left);
                        }
                        if !split.right.is_empty() {
                            missed.push(split.right);
                        }
                    }
                    None => missed.push(piece),
                }
            }
            pending = missed;
        }
        // whatever no rule claimed falls through as identity
        mapped.extend(pending);
        mapped
    }

    /// Smallest terminal-domain value reachable from any value in `span`,
    /// without enumerating the span.
    ///
    /// Each rewrite is an order-preserving shift within a piece, so after
    /// propagating every piece to the terminal stage the minimum is always
    /// attained at a piece's start. Returns `None` for an empty span.
    pub fn minimum_over_range(&self, span: Interval) -> Option<u64> {
        if span.is_empty() {
            return None;
        }
        let pieces = self.project(span);
        match &self.next {
            Some(next) => pieces
                .into_iter()
                .filter_map(|piece| next.minimum_over_range(piece))
                .min(),
            None => pieces.into_iter().map(|piece| piece.start()).min(),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} --> {}", self.source_name, self.dest_name)?;
        for rule in &self.rules {
            writeln!(f, "  {}", rule)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_to_soil() -> Stage {
        let mut stage = Stage::new("seed", "soil");
        stage.push_rule(RewriteRule::new(50, 98, 2));
        stage.push_rule(RewriteRule::new(52, 50, 48));
        stage
    }

    #[test]
    fn test_rule_rewrite() {
        let stage = seed_to_soil();
        assert_eq!(stage.resolve(98), 50);
        assert_eq!(stage.resolve(99), 51);
        assert_eq!(stage.resolve(53), 55);
        assert_eq!(stage.resolve(79), 81);
    }

    #[test]
    fn test_identity_fallback() {
        let stage = seed_to_soil();
        assert_eq!(stage.resolve(10), 10);
        assert_eq!(stage.resolve(49), 49);
        assert_eq!(stage.resolve(100), 100);
    }

    #[test]
    fn test_resolve_composes_through_chain() {
        let a = {
            let mut s = Stage::new("a", "b");
            s.push_rule(RewriteRule::new(100, 0, 10));
            s
        };
        let b = {
            let mut s = Stage::new("b", "c");
            s.push_rule(RewriteRule::new(200, 100, 10));
            s
        };
        let c = {
            let mut s = Stage::new("c", "d");
            s.push_rule(RewriteRule::new(300, 200, 5));
            s
        };

        let per_stage = c.resolve(b.resolve(a.resolve(3)));

        let mut chain = a.clone();
        let mut linked_b = b.clone();
        linked_b.set_next(c.clone());
        chain.set_next(linked_b);
        assert_eq!(chain.resolve(3), per_stage);
        assert_eq!(chain.resolve(3), 303);
        // 7 escapes the last stage's rule, stopping in c's domain values
        assert_eq!(chain.resolve(7), 207);
    }

    #[test]
    fn test_straddling_span_minimum() {
        // [96, 100) straddles both rules: [96, 98) -> [98, 100), [98, 100) -> [50, 52)
        let stage = seed_to_soil();
        assert_eq!(stage.minimum_over_range(Interval::new(96, 4)), Some(50));
    }

    #[test]
    fn test_minimum_over_range_matches_per_value_scan() {
        let stage = seed_to_soil();
        for start in 0..110 {
            for len in 0..12 {
                let expected = (start..start + len).map(|v| stage.resolve(v)).min();
                assert_eq!(
                    stage.minimum_over_range(Interval::new(start, len)),
                    expected,
                    "span [{start}, {})",
                    start + len
                );
            }
        }
    }

    #[test]
    fn test_minimum_over_empty_range() {
        let stage = seed_to_soil();
        assert_eq!(stage.minimum_over_range(Interval::new(50, 0)), None);
    }

    #[test]
    fn test_minimum_not_at_lowest_intersecting_source() {
        // The lowest intersecting source value is 10 (first rule, mapped far
        // up); the smaller output comes from the second rule's sub-range.
        let mut stage = Stage::new("x", "y");
        stage.push_rule(RewriteRule::new(1000, 10, 5));
        stage.push_rule(RewriteRule::new(0, 20, 5));
        assert_eq!(stage.minimum_over_range(Interval::new(10, 15)), Some(0));
    }
}
