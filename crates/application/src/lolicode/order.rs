//! Emission order resolution.

use std::collections::HashSet;

use har2loli_domain::{
    Exchange, GeneratorConfig, OrderingError, OrderingPlan, OrderingStrategy,
};

use super::dependency::DependencyGraph;

/// Resolves the definitive emission order.
///
/// The result is the plan's order filtered to the selected indices. Every
/// selected index must appear in the plan exactly once; plan entries that
/// are not selected are skipped.
///
/// # Errors
///
/// Returns an [`OrderingError`] if the plan omits or repeats a selected
/// index, or if any index is outside `0..exchange_count`.
pub fn resolve_order(
    selected: &[usize],
    plan: &OrderingPlan,
    exchange_count: usize,
) -> Result<Vec<usize>, OrderingError> {
    if let Some(&index) = plan
        .topological_order
        .iter()
        .chain(selected)
        .find(|&&i| i >= exchange_count)
    {
        return Err(OrderingError::IndexOutOfRange {
            index,
            len: exchange_count,
        });
    }

    let wanted: HashSet<usize> = selected.iter().copied().collect();
    let mut placed = HashSet::with_capacity(wanted.len());
    let mut resolved = Vec::with_capacity(wanted.len());

    for &index in &plan.topological_order {
        if !wanted.contains(&index) {
            continue;
        }
        if !placed.insert(index) {
            return Err(OrderingError::DuplicateIndex(index));
        }
        resolved.push(index);
    }

    if let Some(&missing) = selected.iter().find(|i| !placed.contains(i)) {
        return Err(OrderingError::MissingIndex(missing));
    }

    Ok(resolved)
}

/// Turns an ordering strategy into a concrete plan.
///
/// # Errors
///
/// Returns [`OrderingError::Cycle`] when the dependency strategy finds a
/// cycle between exchanges.
pub fn plan_for(
    strategy: &OrderingStrategy,
    exchanges: &[Exchange],
    config: &GeneratorConfig,
) -> Result<OrderingPlan, OrderingError> {
    match strategy {
        OrderingStrategy::Capture => Ok(OrderingPlan::capture_order(exchanges.len())),
        OrderingStrategy::Explicit(plan) => Ok(plan.clone()),
        OrderingStrategy::Dependencies => {
            DependencyGraph::from_exchanges(exchanges, &config.extractions, &config.selected_indices)
                .topological_order()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plan_order_wins() {
        let order = resolve_order(&[0, 1, 2], &OrderingPlan::new([2, 0, 1]), 3).unwrap();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn test_unselected_entries_skipped() {
        let order = resolve_order(&[3, 1], &OrderingPlan::new([0, 1, 2, 3]), 4).unwrap();
        assert_eq!(order, vec![1, 3]);
    }

    #[test]
    fn test_missing_index() {
        let err = resolve_order(&[0, 1, 2], &OrderingPlan::new([2, 0]), 3).unwrap_err();
        assert_eq!(err, OrderingError::MissingIndex(1));
    }

    #[test]
    fn test_duplicate_index() {
        let err = resolve_order(&[0, 1], &OrderingPlan::new([1, 0, 1]), 2).unwrap_err();
        assert_eq!(err, OrderingError::DuplicateIndex(1));
    }

    #[test]
    fn test_duplicate_unselected_index_ignored() {
        let order = resolve_order(&[0], &OrderingPlan::new([1, 0, 1]), 2).unwrap();
        assert_eq!(order, vec![0]);
    }

    #[test]
    fn test_out_of_range() {
        let err = resolve_order(&[0], &OrderingPlan::new([0, 5]), 2).unwrap_err();
        assert_eq!(err, OrderingError::IndexOutOfRange { index: 5, len: 2 });
    }

    #[test]
    fn test_empty_selection() {
        let order = resolve_order(&[], &OrderingPlan::new([1, 0]), 2).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_capture_strategy() {
        let exchanges = vec![
            Exchange::new(har2loli_domain::Request::get("https://a"), har2loli_domain::Response::new(200));
            3
        ];
        let plan = plan_for(&OrderingStrategy::Capture, &exchanges, &GeneratorConfig::default())
            .unwrap();
        assert_eq!(plan, OrderingPlan::new([0, 1, 2]));
    }
}
