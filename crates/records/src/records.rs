use std::rc::Rc;

use chrono::NaiveDate;
use hawk_scribe::{Collection, Entity, Handle, Scribe, ScribeError};
use log::{info, warn};

use crate::document::{Document, FactuurRecord, KlantRecord, ReserveringRecord, VoertuigRecord};
use crate::factuur::Factuur;
use crate::kind::Kind;
use crate::klant::Klant;
use crate::reservering::{Reservering, Shared, shared};
use crate::sequence::DailySequence;
use crate::voertuig::Voertuig;

/// Every record collection of the office, plus today's reservation numbers.
#[derive(Debug)]
pub struct Records {
	klanten: Scribe<Shared<Klant>>,
	voertuigen: Scribe<Shared<Voertuig>>,
	reserveringen: Scribe<Shared<Reservering>>,
	facturen: Scribe<Factuur>,
	sequence: DailySequence,
	today: NaiveDate,
}

/// Add `entity` to `scribe`, logging and skipping it when it is rejected.
fn admit<T: Entity>(scribe: &mut Scribe<T>, entity: Result<T, ScribeError>, section: &str) {
	if let Err(err) = entity.and_then(|entity| scribe.add(entity)) {
		warn!("skipping {section} record: {err}");
	}
}

fn lookup<T: Entity + Clone>(scribe: &Scribe<T>, field: &str, uid: &str) -> Result<T, ScribeError> {
	scribe
		.all()
		.find(|entity| entity.uid().as_deref() == Some(uid))
		.cloned()
		.ok_or_else(|| ScribeError::invalid(field, uid, "no such record"))
}

impl Records {
	#[must_use]
	pub fn new(today: NaiveDate) -> Self {
		Self {
			klanten: Scribe::new(),
			voertuigen: Scribe::new(),
			reserveringen: Scribe::new(),
			facturen: Scribe::new(),
			sequence: DailySequence::for_day(today),
			today,
		}
	}

	/// Hydrate a document, resolving uid references once.
	///
	/// Records that fail validation, duplicate a uid, or reference a missing
	/// record are skipped with a warning.
	#[must_use]
	pub fn from_document(document: Document, today: NaiveDate) -> Self {
		let mut records = Self::new(today);

		for record in document.particulier {
			admit(&mut records.klanten, Klant::try_from(record).map(shared), "particulier");
		}
		for record in document.professioneel {
			admit(&mut records.klanten, Klant::try_from(record).map(shared), "professioneel");
		}
		for record in document.voertuigen {
			admit(&mut records.voertuigen, Voertuig::try_from(record).map(shared), "voertuig");
		}

		let klanten = records.klanten.uid_index();
		let voertuigen = records.voertuigen.uid_index();
		for record in document.reserveringen {
			let (Some(klant), Some(voertuig)) =
				(klanten.get(&record.klant), voertuigen.get(&record.voertuig))
			else {
				warn!(
					"skipping reservering {}: unknown klant {} or voertuig {}",
					record.nummer, record.klant, record.voertuig
				);
				continue;
			};
			records.sequence.observe(&record.nummer);
			let reservering = Reservering::new(
				record.nummer,
				Rc::clone(klant),
				Rc::clone(voertuig),
				record.van,
				record.tot,
			)
			.map(|reservering| shared(reservering.with_ingeleverd(record.ingeleverd.into())));
			admit(&mut records.reserveringen, reservering, "reservering");
		}

		let reserveringen = records.reserveringen.uid_index();
		for record in document.facturen {
			let Some(reservering) = reserveringen.get(&record.reservering) else {
				warn!("skipping factuur: unknown reservering {}", record.reservering);
				continue;
			};
			admit(
				&mut records.facturen,
				Ok(Factuur::new(Rc::clone(reservering), record.bedrag)),
				"factuur",
			);
		}

		info!(
			"loaded {} klanten, {} voertuigen, {} reserveringen and {} facturen",
			records.klanten.len(),
			records.voertuigen.len(),
			records.reserveringen.len(),
			records.facturen.len()
		);
		records
	}

	/// Serialize every identified record. Placeholders are left out.
	#[must_use]
	pub fn to_document(&self) -> Document {
		let mut document = Document::default();
		let mut skipped = 0;

		for klant in self.klanten.all() {
			let klant = klant.borrow();
			if klant.uid().is_none() {
				skipped += 1;
				continue;
			}
			match KlantRecord::from(&*klant) {
				KlantRecord::Particulier(record) => document.particulier.push(record),
				KlantRecord::Professioneel(record) => document.professioneel.push(record),
			}
		}
		for voertuig in self.voertuigen.all() {
			let voertuig = voertuig.borrow();
			if voertuig.uid().is_none() {
				skipped += 1;
				continue;
			}
			document.voertuigen.push(VoertuigRecord::from(&*voertuig));
		}
		for reservering in self.reserveringen.all() {
			let reservering = reservering.borrow();
			if reservering.uid().is_none() {
				skipped += 1;
				continue;
			}
			document.reserveringen.push(ReserveringRecord::from(&*reservering));
		}
		for factuur in self.facturen.all() {
			if factuur.reservering().borrow().uid().is_none() {
				skipped += 1;
				continue;
			}
			document.facturen.push(FactuurRecord::from(factuur));
		}

		if skipped > 0 {
			warn!("not saving {skipped} unidentified records");
		}
		document
	}

	#[must_use]
	pub fn today(&self) -> NaiveDate {
		self.today
	}

	#[must_use]
	pub fn klanten(&self) -> &Scribe<Shared<Klant>> {
		&self.klanten
	}

	#[must_use]
	pub fn voertuigen(&self) -> &Scribe<Shared<Voertuig>> {
		&self.voertuigen
	}

	#[must_use]
	pub fn reserveringen(&self) -> &Scribe<Shared<Reservering>> {
		&self.reserveringen
	}

	#[must_use]
	pub fn facturen(&self) -> &Scribe<Factuur> {
		&self.facturen
	}

	#[must_use]
	pub fn collection(&self, kind: Kind) -> &dyn Collection {
		match kind {
			Kind::Klanten => &self.klanten,
			Kind::Voertuigen => &self.voertuigen,
			Kind::Reserveringen => &self.reserveringen,
			Kind::Facturen => &self.facturen,
		}
	}

	pub fn collection_mut(&mut self, kind: Kind) -> &mut dyn Collection {
		match kind {
			Kind::Klanten => &mut self.klanten,
			Kind::Voertuigen => &mut self.voertuigen,
			Kind::Reserveringen => &mut self.reserveringen,
			Kind::Facturen => &mut self.facturen,
		}
	}

	/// Add an empty record of `variant` to be filled in through edits.
	pub fn create_default(&mut self, kind: Kind, variant: &str) -> Result<Handle, ScribeError> {
		let handle = match (kind, variant) {
			(Kind::Klanten, "Particulier") => self.klanten.add(shared(Klant::particulier()))?,
			(Kind::Klanten, "Professioneel") => self.klanten.add(shared(Klant::professioneel()))?,
			(Kind::Voertuigen, "Voertuig") => self.voertuigen.add(shared(Voertuig::default()))?,
			_ => {
				return Err(ScribeError::invalid(
					"type",
					variant,
					format!("{} cannot be created here", kind.title().to_lowercase()),
				));
			}
		};
		info!("created empty {variant}");
		Ok(handle)
	}

	/// Update a record and refresh the collections that display it.
	///
	/// A record other records refer to must keep its identifier, otherwise
	/// saving would drop the records pointing at it. Such edits are rolled
	/// back.
	pub fn update(
		&mut self,
		kind: Kind,
		index: usize,
		name: &str,
		raw: &str,
	) -> Result<(), ScribeError> {
		let collection = self.collection(kind);
		let handle = collection.handle_at(index).ok_or(ScribeError::IndexOutOfRange {
			index,
			len: collection.count(),
		})?;
		let identified = collection.uid(index).is_some();
		let previous = collection
			.fields(index)?
			.into_iter()
			.find(|field| field.name == name)
			.map(|field| field.value);
		let referenced_by = self.referenced_by(kind, index)?;

		self.collection_mut(kind).update(index, name, raw)?;

		if identified
			&& let Some(nummer) = referenced_by
			&& self.uid_of(kind, handle).is_none()
		{
			match previous {
				Some(previous) => self.update_handle(kind, handle, name, &previous)?,
				None => warn!("no previous value to restore for {name}"),
			}
			return Err(ScribeError::invalid(
				name,
				raw,
				format!("{nummer} still refers to this record"),
			));
		}

		info!("updated {name} in {kind}");
		self.refresh_dependents(kind);
		Ok(())
	}

	/// Remove the record at view `index` unless another record refers to it.
	pub fn remove(&mut self, kind: Kind, index: usize) -> Result<(), ScribeError> {
		if let Some(nummer) = self.referenced_by(kind, index)? {
			let uid = self.collection(kind).uid(index).unwrap_or_default();
			return Err(ScribeError::invalid(
				kind.name(),
				uid,
				format!("still referenced by {nummer}"),
			));
		}
		self.collection_mut(kind).remove_row(index)
	}

	/// Number of a reservation that refers to the record at view `index`.
	fn referenced_by(&self, kind: Kind, index: usize) -> Result<Option<String>, ScribeError> {
		let nummer = match kind {
			Kind::Klanten => {
				let klant = self.klanten.get(index)?;
				self.reserveringen
					.all()
					.find(|reservering| Rc::ptr_eq(reservering.borrow().klant(), klant))
					.map(|reservering| reservering.borrow().nummer().to_string())
			}
			Kind::Voertuigen => {
				let voertuig = self.voertuigen.get(index)?;
				self.reserveringen
					.all()
					.find(|reservering| Rc::ptr_eq(reservering.borrow().voertuig(), voertuig))
					.map(|reservering| reservering.borrow().nummer().to_string())
			}
			Kind::Reserveringen => {
				let reservering = self.reserveringen.get(index)?;
				self.facturen
					.all()
					.find(|factuur| Rc::ptr_eq(factuur.reservering(), reservering))
					.map(|_| reservering.borrow().nummer().to_string())
			}
			Kind::Facturen => None,
		};
		Ok(nummer)
	}

	fn uid_of(&self, kind: Kind, handle: Handle) -> Option<String> {
		match kind {
			Kind::Klanten => self.klanten.entity(handle).and_then(Entity::uid),
			Kind::Voertuigen => self.voertuigen.entity(handle).and_then(Entity::uid),
			Kind::Reserveringen => self.reserveringen.entity(handle).and_then(Entity::uid),
			Kind::Facturen => self.facturen.entity(handle).and_then(Entity::uid),
		}
	}

	fn update_handle(
		&mut self,
		kind: Kind,
		handle: Handle,
		name: &str,
		raw: &str,
	) -> Result<(), ScribeError> {
		match kind {
			Kind::Klanten => self.klanten.update_handle(handle, name, raw),
			Kind::Voertuigen => self.voertuigen.update_handle(handle, name, raw),
			Kind::Reserveringen => self.reserveringen.update_handle(handle, name, raw),
			Kind::Facturen => self.facturen.update_handle(handle, name, raw),
		}
	}

	/// Reserve an available vehicle for a customer.
	///
	/// Returns the new reservation number. The vehicle is marked reserved.
	pub fn reserve(
		&mut self,
		klant_uid: &str,
		voertuig_uid: &str,
		van: NaiveDate,
		tot: NaiveDate,
	) -> Result<String, ScribeError> {
		let klant = lookup(&self.klanten, "klant", klant_uid)?;
		let voertuig = lookup(&self.voertuigen, "voertuig", voertuig_uid)?;
		if !voertuig.borrow().beschikbaar {
			return Err(ScribeError::invalid("voertuig", voertuig_uid, "vehicle is not available"));
		}

		let nummer = self.sequence.peek();
		let reservering = Reservering::new(nummer.clone(), klant, Rc::clone(&voertuig), van, tot)?;
		self.reserveringen.add(shared(reservering))?;
		self.sequence.next();
		voertuig.borrow_mut().beschikbaar = false;
		self.voertuigen.refresh();

		info!("reserved {voertuig_uid} for {klant_uid} as {nummer}");
		Ok(nummer)
	}

	/// Return the vehicle of a reservation and bill it.
	pub fn invoice(
		&mut self,
		reservering_uid: &str,
		inleverdatum: Option<NaiveDate>,
	) -> Result<f64, ScribeError> {
		let reservering = lookup(&self.reserveringen, "reservering", reservering_uid)?;
		if self.facturen.uids().contains(reservering_uid) {
			return Err(ScribeError::DuplicateUid {
				uid: reservering_uid.to_string(),
			});
		}

		let factuur = Factuur::finalize(reservering, inleverdatum)?;
		let bedrag = factuur.bedrag;
		self.facturen.add(factuur)?;
		self.reserveringen.refresh();
		self.voertuigen.refresh();

		info!("invoiced {reservering_uid} for {bedrag:.2}");
		Ok(bedrag)
	}

	/// Rebuild the views that render data owned by `kind`.
	pub fn refresh_dependents(&mut self, kind: Kind) {
		match kind {
			Kind::Klanten | Kind::Voertuigen => {
				self.reserveringen.refresh();
				self.facturen.refresh();
			}
			Kind::Reserveringen => self.facturen.refresh(),
			Kind::Facturen => {}
		}
	}
}

#[cfg(test)]
mod tests;
