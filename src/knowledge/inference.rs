//! Inference rules over a constraint collection.
//!
//! The engine drives these to a fixpoint; each function here is a pure
//! step over a slice of constraints:
//! - `resolve_pairs`: subset resolution over every unordered pair
//! - `implied_facts`: cells settled by terminal constraints
//! - `prune`: drop empty and duplicate constraints

use rustc_hash::FxHashSet;

use super::constraint::Constraint;
use super::engine::Fact;
use crate::core::Cell;

/// Derive every new constraint obtainable by the subset rule.
///
/// Pairs are visited as `(constraints[i], constraints[j])` with `i < j`, so
/// the output order is a deterministic function of the input order. A
/// derived constraint is kept only if it is non-empty, not already present
/// in `constraints`, and not derived earlier in the same call.
pub(crate) fn resolve_pairs(constraints: &[Constraint]) -> Vec<Constraint> {
    let existing: FxHashSet<&Constraint> = constraints.iter().collect();
    let mut seen: FxHashSet<Constraint> = FxHashSet::default();
    let mut derived = Vec::new();

    for (i, a) in constraints.iter().enumerate() {
        for b in &constraints[i + 1..] {
            let candidate = match a.resolve_within(b).or_else(|| b.resolve_within(a)) {
                Some(c) => c,
                None => continue,
            };
            if candidate.is_empty() || existing.contains(&candidate) {
                continue;
            }
            if seen.insert(candidate.clone()) {
                derived.push(candidate);
            }
        }
    }

    derived
}

/// Facts implied by terminal constraints, in constraint order.
///
/// The same cell may appear more than once when several constraints
/// imply it.
pub(crate) fn implied_facts(constraints: &[Constraint]) -> Vec<(Cell, Fact)> {
    let mut facts = Vec::new();
    for constraint in constraints {
        facts.extend(constraint.implied_hazards().into_iter().map(|cell| (cell, Fact::Hazard)));
        facts.extend(constraint.implied_safe().into_iter().map(|cell| (cell, Fact::Safe)));
    }
    facts
}

/// Drop empty constraints and structural duplicates, keeping the first
/// occurrence of each.
pub(crate) fn prune(constraints: &mut Vec<Constraint>) {
    let mut seen: FxHashSet<Constraint> = FxHashSet::default();
    constraints.retain(|c| !c.is_empty() && seen.insert(c.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint(coords: &[(usize, usize)], count: usize) -> Constraint {
        Constraint::new(coords.iter().copied().map(Cell::from), count)
    }

    #[test]
    fn test_resolve_pairs_subset_rule() {
        let constraints = vec![
            constraint(&[(0, 0), (0, 1), (0, 2), (1, 0)], 2),
            constraint(&[(0, 0), (0, 1), (0, 2)], 1),
        ];

        let derived = resolve_pairs(&constraints);
        assert_eq!(derived, vec![constraint(&[(1, 0)], 1)]);
    }

    #[test]
    fn test_resolve_pairs_skips_existing() {
        let constraints = vec![
            constraint(&[(0, 0)], 0),
            constraint(&[(0, 0), (0, 1)], 1),
            constraint(&[(0, 1)], 1),
        ];

        // Both subset pairs only reproduce constraints already present.
        assert!(resolve_pairs(&constraints).is_empty());
    }

    #[test]
    fn test_resolve_pairs_dedups_within_call() {
        let constraints = vec![
            constraint(&[(0, 0), (0, 1)], 1),
            constraint(&[(0, 0), (0, 1), (0, 2)], 1),
            constraint(&[(0, 3)], 0),
            constraint(&[(0, 2), (0, 3)], 0),
        ];

        // Two different pairs derive {(0,2)}=0.
        assert_eq!(resolve_pairs(&constraints), vec![constraint(&[(0, 2)], 0)]);
    }

    #[test]
    fn test_resolve_pairs_disjoint_or_overlapping_only() {
        let constraints = vec![
            constraint(&[(0, 0), (0, 1)], 1),
            constraint(&[(0, 1), (0, 2)], 1),
            constraint(&[(5, 5)], 0),
        ];

        assert!(resolve_pairs(&constraints).is_empty());
    }

    #[test]
    fn test_implied_facts() {
        let constraints = vec![
            constraint(&[(0, 0), (0, 1)], 2),
            constraint(&[(1, 0)], 0),
            constraint(&[(2, 0), (2, 1)], 1),
        ];

        let facts = implied_facts(&constraints);
        assert_eq!(
            facts,
            vec![
                (Cell::new(0, 0), Fact::Hazard),
                (Cell::new(0, 1), Fact::Hazard),
                (Cell::new(1, 0), Fact::Safe),
            ]
        );
    }

    #[test]
    fn test_prune() {
        let mut constraints = vec![
            constraint(&[(0, 0), (0, 1)], 1),
            constraint(&[], 0),
            constraint(&[(0, 1), (0, 0)], 1),
            constraint(&[(0, 0), (0, 1)], 2),
        ];

        prune(&mut constraints);
        assert_eq!(
            constraints,
            vec![constraint(&[(0, 0), (0, 1)], 1), constraint(&[(0, 0), (0, 1)], 2)]
        );
    }
}
