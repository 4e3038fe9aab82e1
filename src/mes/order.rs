use crate::mes::collect::ConvergenceDataset;

/// Sort samples by descending spacing, error as tiebreak. Stable, so
/// sorting an already-sorted dataset leaves it unchanged.
pub fn sort_descending(dataset: &mut ConvergenceDataset) {
    dataset.sort_by(|a, b| {
        b.spacing
            .total_cmp(&a.spacing)
            .then(b.error.total_cmp(&a.error))
    });
}

/// Empirical order between each pair of adjacent (sorted) samples:
/// the slope of ln(error) against ln(spacing), which for two points is
/// the degree-1 fit in closed form. Entry 0 has no coarser neighbour
/// and is NaN; so is any entry whose two spacings coincide.
pub fn estimate_orders(dataset: &ConvergenceDataset) -> Vec<f64> {
    let mut orders = vec![f64::NAN; dataset.len()];
    for i in 1..dataset.len() {
        let d_log_h = dataset[i].spacing.ln() - dataset[i - 1].spacing.ln();
        if d_log_h == 0.0 {
            continue;
        }
        orders[i] = (dataset[i].error.ln() - dataset[i - 1].error.ln()) / d_log_h;
    }
    orders
}

/// Last defined order estimate, if any. The plot's reference slope.
pub fn last_order(orders: &[f64]) -> Option<f64> {
    orders.iter().rev().copied().find(|o| !o.is_nan())
}
