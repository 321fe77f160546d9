//! Filter chain
//!
//! Applies an ordered list of rules to every node of a document in one
//! document-order pass.

use single_pdf_ast::{Document, Element, walk};

use crate::error::Result;
use crate::rules::{HeaderLevelRule, LinkTargetRule, Rule, RuleContext};

/// Ordered list of rules applied to each node
pub struct FilterChain {
    rules: Vec<Box<dyn Rule>>,
}

/// Counters gathered during [`FilterChain::apply`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Number of tagged nodes offered to the chain
    pub visited: usize,
    /// Number of nodes rewritten by each rule, in chain order
    pub rewritten: Vec<(&'static str, usize)>,
}

impl FilterStats {
    /// Total number of rewrites across all rules
    pub fn total_rewritten(&self) -> usize {
        self.rewritten.iter().map(|(_, n)| n).sum()
    }
}

impl Default for FilterChain {
    /// Header demotion followed by link rewriting, with default options
    fn default() -> Self {
        Self::new()
            .with_rule(HeaderLevelRule::default())
            .with_rule(LinkTargetRule::default())
    }
}

impl FilterChain {
    /// An empty chain, which leaves every document unchanged
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.push(Box::new(rule));
        self
    }

    pub fn push(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply the chain to `doc` in place
    ///
    /// Each node is offered to the rules in order, every rule seeing the
    /// previous rule's output, and is visited exactly once. The first rule
    /// error aborts the run; `doc` is then only partially rewritten.
    pub fn apply(&self, doc: &mut Document, format: &str) -> Result<FilterStats> {
        let meta = doc.meta().clone();
        let ctx = RuleContext {
            format,
            meta: &meta,
        };

        let mut stats = FilterStats {
            visited: 0,
            rewritten: self.rules.iter().map(|r| (r.name(), 0)).collect(),
        };

        walk(doc.root_mut(), &mut |mut element: Element| -> Result<Element> {
            stats.visited += 1;
            for (rule, (_, count)) in self.rules.iter().zip(stats.rewritten.iter_mut()) {
                if let Some(replacement) = rule.apply(&element, &ctx)? {
                    element = replacement;
                    *count += 1;
                }
            }
            Ok(element)
        })?;

        Ok(stats)
    }
}

/// Run `chain` over a JSON document and return the rewritten JSON
pub fn run_filter(input: &str, format: &str, chain: &FilterChain) -> Result<(String, FilterStats)> {
    let mut doc = Document::from_json(input)?;
    let stats = chain.apply(&mut doc, format)?;
    Ok((doc.to_json()?, stats))
}
