//! Business records of a small car rental office.
//!
//! Customers, vehicles, reservations and invoices implement
//! [`hawk_scribe::Entity`] so each kind can live in its own searchable
//! collection. [`Records`] owns the four collections and enforces the rules
//! that span them: reserving marks a vehicle unavailable, invoicing returns
//! it, and records still referenced elsewhere cannot be removed.

mod document;
mod factuur;
mod ids;
mod kind;
mod klant;
mod parse;
mod records;
mod reservering;
mod sequence;
mod voertuig;

pub use document::{
	Document, FactuurRecord, KlantRecord, ParticulierRecord, ProfessioneelRecord, ReserveringRecord,
	Returned, VoertuigRecord,
};
pub use factuur::Factuur;
pub use ids::{Btw, Rrn, Vin};
pub use kind::{Kind, Preset, UnknownKind};
pub use klant::{Gender, Klant, Profiel};
pub use records::Records;
pub use reservering::{Ingeleverd, Reservering, Shared, shared};
pub use sequence::DailySequence;
pub use voertuig::{Categorie, DEFAULT_DAGPRIJS, Voertuig};
