//! Protoplanetary formation: the dust-lane disk, the accretion engine, and
//! the coalescence/reconciliation passes that turn swept mass into a
//! planet list.
//!
//! One [`Accretor`] owns the state of a single run — the [`DustDisk`]
//! partition, the growing planet list, and the failed/escaped bodies held
//! for reconciliation. Nothing is shared between runs, so concurrent
//! generations only need their own `Rng`.

pub mod coalesce;
pub mod disk;
pub mod engine;
pub mod reconcile;

#[cfg(test)]
mod engine_test;
#[cfg(test)]
mod reconcile_test;

pub use disk::{DustBand, DustDisk};
pub use engine::{Accretor, PROTOPLANET_MASS};
