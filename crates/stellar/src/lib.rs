//! Stellar templates and the derived star model.
//!
//! A [`StellarTemplate`] is the raw catalog record supplied by the caller;
//! [`Star`] is the validated, perturbed working instance the accretion and
//! environment passes consume. Catalog file loading is outside this crate —
//! callers hand over template lists and this crate handles selection,
//! deviation, and derived quantities.

pub mod sampling;
pub mod star;
pub mod template;

#[cfg(test)]
mod sampling_test;
#[cfg(test)]
mod star_test;

pub use star::Star;
pub use template::{StellarTemplate, TemplateCatalog, TemplateError};
