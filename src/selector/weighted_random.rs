use super::item::Item;
use super::random_source::RandomSource;
use log::{debug, trace, warn};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SelectionError {
    #[error("there are no items to select from")]
    EmptyInput,
    #[error("total weight must be greater than 0")]
    ZeroTotalWeight,
    #[error("total weight {0} is not a finite number")]
    InvalidTotal(f64),
}

/// Items with a non-blank name and a positive weight, in their original order.
pub fn validate(items: &[Item]) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.is_eligible())
        .cloned()
        .collect()
}

/// Plain sum of the weights. Does no filtering.
pub fn total_weight(items: &[Item]) -> f64 {
    // An empty list sums to +0.0, never -0.0
    items.iter().fold(0.0, |sum, item| sum + item.weight)
}

fn checked_total(items: &[Item]) -> Result<f64, SelectionError> {
    if items.is_empty() {
        return Err(SelectionError::EmptyInput);
    }
    let total = total_weight(items);
    if !total.is_finite() {
        return Err(SelectionError::InvalidTotal(total));
    }
    if total <= 0.0 {
        return Err(SelectionError::ZeroTotalWeight);
    }
    Ok(total)
}

// `items` must be non-empty.
fn cumulative_position(items: &[Item], draw: f64) -> usize {
    let mut accumulator = 0.0;
    for (index, item) in items.iter().enumerate() {
        accumulator += item.weight;
        trace!("{:?} covers up to {}", item.name, accumulator);
        if draw <= accumulator {
            return index;
        }
    }
    // Rounding at the top of the range, or a draw outside it.
    warn!(
        "Draw {} fell past the last boundary {}, using the last item",
        draw, accumulator
    );
    items.len() - 1
}

///
/// Picks the position of the winning item.
///
/// A value `r` is drawn uniformly from `[0, total)` and the items are walked
/// in order, summing weights; the first item whose running sum reaches `r`
/// wins. A draw landing exactly on a boundary goes to the earlier item.
///
/// Expects items that have been through [`validate`]; a zero weight item
/// at the front of the list would still win a draw of exactly 0.
///
pub fn select_index<R: RandomSource + ?Sized>(
    items: &[Item],
    rng: &mut R,
) -> Result<usize, SelectionError> {
    let total = checked_total(items)?;
    let draw = rng.next_unit() * total;
    debug!("Drew {} out of {}", draw, total);
    Ok(cumulative_position(items, draw))
}

/// Name of the winning item. See [`select_index`].
pub fn select_winner<'a, R: RandomSource + ?Sized>(
    items: &'a [Item],
    rng: &mut R,
) -> Result<&'a str, SelectionError> {
    let index = select_index(items, rng)?;
    Ok(items[index].name.as_str())
}

/// Name of the item owning an already scaled draw in `[0, total)`.
pub fn winner_for_draw(items: &[Item], draw: f64) -> Result<&str, SelectionError> {
    checked_total(items)?;
    Ok(items[cumulative_position(items, draw)].name.as_str())
}
