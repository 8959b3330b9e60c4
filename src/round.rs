use crate::rules::{check_full_percentage, check_item_count};
use crate::selector::{
    select_index, select_winner, total_weight, validate, Item, RandomSource, SelectionError,
};
use chrono::{DateTime, Local};
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoundError {
    #[error("at most {max} items can take part, got {count}")]
    TooManyItems { count: usize, max: usize },
    #[error("add at least one item with a name and a probability greater than 0")]
    NoEligibleItems,
    #[error("total probability must be greater than 0")]
    ZeroTotal,
    #[error("total probability must equal exactly 100%, got {0:.1}%")]
    TotalNotFull(f64),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// The result of one draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: String,
    /// Names of the items that took part, in order.
    pub items: Vec<String>,
    pub total_weight: f64,
    pub drawn_at: DateTime<Local>,
}

///
/// A validated set of items ready to be drawn from.
///
/// Preparing a round drops blank and zero weight items and applies the
/// caller-side rules; drawing can then only fail if the selector itself
/// rejects the input.
///
#[derive(Debug, Clone)]
pub struct Round {
    items: Vec<Item>,
    total: f64,
}

impl Round {
    pub fn prepare(items: &[Item], require_full_percentage: bool) -> Result<Round, RoundError> {
        check_item_count(items.len())?;
        let eligible = validate(items);
        if eligible.is_empty() {
            return Err(RoundError::NoEligibleItems);
        }
        let total = total_weight(&eligible);
        if !total.is_finite() {
            return Err(SelectionError::InvalidTotal(total).into());
        }
        if total <= 0.0 {
            return Err(RoundError::ZeroTotal);
        }
        if require_full_percentage {
            check_full_percentage(total)?;
        }
        for item in &eligible {
            trace!("Taking part: {}", item);
        }
        debug!(
            "Prepared round: {} of {} items eligible, total {}",
            eligible.len(),
            items.len(),
            total
        );
        Ok(Round {
            items: eligible,
            total,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total_weight(&self) -> f64 {
        self.total
    }

    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Outcome, RoundError> {
        let winner = select_winner(&self.items, rng)?;
        info!("{} wins", winner);
        Ok(Outcome {
            winner: winner.to_string(),
            items: self.items.iter().map(|item| item.name.clone()).collect(),
            total_weight: self.total,
            drawn_at: Local::now(),
        })
    }

    /// Draws `trials` times, returning each item with how often it won.
    pub fn tally<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        trials: usize,
    ) -> Result<Vec<(Item, usize)>, RoundError> {
        let mut wins = vec![0; self.items.len()];
        for _ in 0..trials {
            wins[select_index(&self.items, rng)?] += 1;
        }
        Ok(self.items.iter().cloned().zip(wins).collect())
    }
}
