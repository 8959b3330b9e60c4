//! Weighted selection of a single winner from a list of named items.
pub mod item;
pub mod random_source;
mod weighted_random;

pub use item::{Item, ItemParseError};
pub use random_source::{
    seeded_source, source_for, thread_source, FixedSource, RandomSource, SequenceSource,
};
pub use weighted_random::{
    select_index, select_winner, total_weight, validate, winner_for_draw, SelectionError,
};
