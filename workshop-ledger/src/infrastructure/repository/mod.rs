//! sea-orm implementations of the payroll repositories, all on [`OrmRepo`].
//!
//! [`OrmRepo`]: super::database::OrmRepo
mod catalog;
mod entry;
mod rate;
