//! Chain construction and whole-chain lookups

use crate::error::ChainError;
use crate::range::{Interval, RewriteRule};
use crate::stage::Stage;

/// Builder for a [`Chain`] of rewrite stages.
///
/// The builder owns the head stage and tracks the most recently appended
/// stage by its depth from the head, so rule lines interleaved with header
/// lines attach to the right stage. Construction state is discarded by
/// [`build`](ChainBuilder::build), which freezes the result into an immutable
/// [`Chain`].
#[derive(Debug)]
pub struct ChainBuilder {
    head: Box<Stage>,
    /// Depth of the most recently appended stage, counted from the head.
    last: usize,
}

impl ChainBuilder {
    /// Start a chain with its head stage.
    pub fn begin(source_name: &str, dest_name: &str) -> Self {
        Self {
            head: Box::new(Stage::new(source_name, dest_name)),
            last: 0,
        }
    }

    /// Append a stage whose source domain must match the destination domain
    /// of a stage already in the chain.
    pub fn append_stage(&mut self, source_name: &str, dest_name: &str) -> Result<(), ChainError> {
        self.last = attach(&mut self.head, source_name, dest_name)?;
        Ok(())
    }

    /// Add one rewrite rule, in textual triple order, to the most recently
    /// appended stage.
    pub fn add_rule(&mut self, dest_start: u64, source_start: u64, len: u64) {
        last_stage(&mut self.head, self.last).push_rule(RewriteRule::new(
            dest_start,
            source_start,
            len,
        ));
    }

    /// Freeze the builder into an immutable chain.
    pub fn build(self) -> Chain {
        Chain { head: self.head }
    }
}

/// Walk forward from `stage` to the one whose destination domain matches
/// `source_name` and link a fresh stage there, returning its depth.
fn attach(stage: &mut Stage, source_name: &str, dest_name: &str) -> Result<usize, ChainError> {
    if stage.dest_name() == source_name {
        if stage.next().is_some() {
            return Err(ChainError::DestinationAlreadyLinked {
                dest: stage.dest_name().to_string(),
            });
        }
        stage.set_next(Stage::new(source_name, dest_name));
        return Ok(1);
    }
    match stage.next_mut() {
        Some(next) => attach(next, source_name, dest_name).map(|depth| depth + 1),
        None => Err(ChainError::UnknownSourceDomain {
            src: source_name.to_string(),
            dest: dest_name.to_string(),
        }),
    }
}

fn last_stage(stage: &mut Stage, depth: usize) -> &mut Stage {
    if depth == 0 {
        stage
    } else {
        let next = stage
            .next_mut()
            .expect("builder depth always points at a linked stage");
        last_stage(next, depth - 1)
    }
}

/// An immutable, ordered chain of rewrite stages from an initial domain to
/// the terminal domain.
///
/// All queries start at the head stage; the chain is read-only once built, so
/// it can be shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    head: Box<Stage>,
}

impl Chain {
    /// The first stage of the chain.
    pub fn head(&self) -> &Stage {
        &self.head
    }

    /// Iterate the stages from head to terminal.
    pub fn stages(&self) -> impl Iterator<Item = &Stage> {
        std::iter::successors(Some(self.head.as_ref()), |stage| stage.next())
    }

    /// Number of stages in the chain.
    pub fn stage_count(&self) -> usize {
        self.stages().count()
    }

    /// Name of the terminal domain (e.g. "location").
    pub fn terminal_name(&self) -> &str {
        let mut stage = self.head.as_ref();
        while let Some(next) = stage.next() {
            stage = next;
        }
        stage.dest_name()
    }

    /// Resolve a single value through every stage.
    pub fn resolve(&self, value: u64) -> u64 {
        self.head.resolve(value)
    }

    /// Smallest terminal-domain value reachable from any value in `span`.
    pub fn minimum_over_range(&self, span: Interval) -> Option<u64> {
        self.head.minimum_over_range(span)
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stage in self.stages() {
            write!(f, "{}", stage)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_chain() -> Chain {
        let mut builder = ChainBuilder::begin("seed", "soil");
        builder.add_rule(50, 98, 2);
        builder.add_rule(52, 50, 48);
        builder.append_stage("soil", "fertilizer").unwrap();
        builder.add_rule(0, 15, 37);
        builder.add_rule(37, 52, 2);
        builder.add_rule(39, 0, 15);
        builder.build()
    }

    #[test]
    fn test_build_links_stages_in_order() {
        let chain = example_chain();
        let names: Vec<_> = chain
            .stages()
            .map(|s| (s.source_name().to_string(), s.dest_name().to_string()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("seed".to_string(), "soil".to_string()),
                ("soil".to_string(), "fertilizer".to_string()),
            ]
        );
        assert_eq!(chain.stage_count(), 2);
        assert_eq!(chain.terminal_name(), "fertilizer");
    }

    #[test]
    fn test_rules_attach_to_most_recent_stage() {
        let chain = example_chain();
        let rule_counts: Vec<_> = chain.stages().map(|s| s.rules().len()).collect();
        assert_eq!(rule_counts, vec![2, 3]);
    }

    #[test]
    fn test_resolve_walks_both_stages() {
        let chain = example_chain();
        // seed 79 -> soil 81 -> fertilizer 81, seed 14 -> soil 14 -> fertilizer 53
        assert_eq!(chain.resolve(79), 81);
        assert_eq!(chain.resolve(14), 53);
    }

    #[test]
    fn test_append_unknown_source_domain_fails() {
        let mut builder = ChainBuilder::begin("seed", "soil");
        let err = builder.append_stage("water", "light").unwrap_err();
        assert_eq!(
            err,
            ChainError::UnknownSourceDomain {
                src: "water".to_string(),
                dest: "light".to_string(),
            }
        );
    }

    #[test]
    fn test_append_to_linked_stage_fails() {
        let mut builder = ChainBuilder::begin("seed", "soil");
        builder.append_stage("soil", "fertilizer").unwrap();
        let err = builder.append_stage("soil", "water").unwrap_err();
        assert_eq!(
            err,
            ChainError::DestinationAlreadyLinked {
                dest: "soil".to_string(),
            }
        );
    }

    #[test]
    fn test_display_renders_every_stage() {
        let chain = example_chain();
        let rendered = chain.to_string();
        assert!(rendered.contains("seed --> soil"));
        assert!(rendered.contains("soil --> fertilizer"));
        assert!(rendered.contains("[98, 100) --> [50, 52)"));
    }
}
