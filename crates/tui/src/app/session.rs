use hawk_records::{Kind, Preset, Records};
use hawk_scribe::{Collection, Filter, Handle, Pager};
use log::{error, info, warn};

use super::mode::{Editor, Mode, Selection, Step};

/// Everything the input listeners may touch: the records, which collection
/// is shown, the mode and the table cursor.
pub struct Session {
	pub(crate) records: Records,
	pub(crate) kind: Kind,
	pub(crate) mode: Mode,
	pub(crate) pager: Pager,
	/// Active preset per collection, indexed by [`Kind`] order.
	presets: [usize; 4],
	/// Completion produced by the last search, picked up by the input.
	pub(crate) suggestion: Option<String>,
}

fn slot(kind: Kind) -> usize {
	Kind::ALL.iter().position(|candidate| *candidate == kind).unwrap_or_default()
}

/// Filter used while picking from `step`'s collection.
fn selection_filter(step: &Step) -> Filter {
	match step {
		Step::Klant => Filter::Identified,
		Step::Voertuig { .. } => Filter::All(vec![
			Filter::Identified,
			Filter::attribute("beschikbaar", true),
		]),
	}
}

impl Session {
	pub(crate) fn new(records: Records, kind: Kind) -> Self {
		Self {
			records,
			kind,
			mode: Mode::Browsing,
			pager: Pager::default(),
			presets: [0; 4],
			suggestion: None,
		}
	}

	#[must_use]
	pub fn kind(&self) -> Kind {
		self.kind
	}

	#[must_use]
	pub fn mode(&self) -> &Mode {
		&self.mode
	}

	#[must_use]
	pub fn records(&self) -> &Records {
		&self.records
	}

	#[must_use]
	pub fn collection(&self) -> &dyn Collection {
		self.records.collection(self.kind)
	}

	pub fn collection_mut(&mut self) -> &mut dyn Collection {
		self.records.collection_mut(self.kind)
	}

	/// View index under the cursor.
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.pager.cursor()
	}

	/// Preset currently applied to the shown collection.
	#[must_use]
	pub fn preset(&self) -> Preset {
		self.preset_of(self.kind)
	}

	fn preset_of(&self, kind: Kind) -> Preset {
		let mut presets = kind.presets();
		let index = self.presets[slot(kind)].min(presets.len() - 1);
		presets.swap_remove(index)
	}

	pub(crate) fn cycle_preset(&mut self) {
		let count = self.kind.presets().len();
		let index = &mut self.presets[slot(self.kind)];
		*index = (*index + 1) % count;
		let preset = self.preset();
		info!("{}: showing {}", self.kind.title(), preset.label);
		self.collection_mut().set_filter(preset.filter);
		self.pager.select(0, self.collection().count());
	}

	/// Reapply the chosen preset of `kind` and drop its query.
	fn restore_view(&mut self, kind: Kind) {
		let preset = self.preset_of(kind);
		let collection = self.records.collection_mut(kind);
		collection.set_filter(preset.filter);
		collection.run_query("");
	}

	fn reset_preset(&mut self) {
		self.presets[slot(self.kind)] = 0;
		self.collection_mut().set_filter(None);
	}

	/// Narrow the shown collection to `query` and remember its completion.
	pub fn search(&mut self, query: &str) {
		let collection = self.records.collection_mut(self.kind);
		collection.run_query(query);
		self.suggestion = collection.get_suggestion(query);
		let count = collection.count();
		self.pager.select(0, count);
	}

	pub(crate) fn switch_to(&mut self, kind: Kind) {
		self.kind = kind;
		self.mode = Mode::Browsing;
		self.pager.select(0, self.collection().count());
	}

	/// Open the field editor on `handle`, clearing the query or preset when
	/// they hide it.
	pub(crate) fn edit(&mut self, handle: Handle) {
		if self.collection().position(handle).is_none() {
			self.collection_mut().run_query("");
		}
		if self.collection().position(handle).is_none() {
			self.reset_preset();
		}
		let Some(position) = self.collection().position(handle) else {
			warn!("record is not part of {}", self.kind);
			self.mode = Mode::Browsing;
			return;
		};
		self.pager.select(position, self.collection().count());
		self.mode = Mode::Editing(Editor::new(handle));
	}

	/// Name and current value of the field under the editor cursor.
	pub(crate) fn editor_field(&self) -> Option<(&'static str, String)> {
		let Mode::Editing(editor) = &self.mode else {
			return None;
		};
		let collection = self.collection();
		let index = collection.position(editor.handle)?;
		let field = collection.fields(index).ok()?.into_iter().nth(editor.field)?;
		Some((field.name, field.value))
	}

	/// Assign `raw` to the field being edited.
	pub(crate) fn commit(&mut self, raw: &str) {
		let Mode::Editing(editor) = &mut self.mode else {
			return;
		};
		editor.typing = false;
		let handle = editor.handle;

		let Some((name, _)) = self.editor_field() else {
			warn!("record left the view while editing");
			self.mode = Mode::Browsing;
			return;
		};
		let Some(index) = self.collection().position(handle) else {
			return;
		};
		if let Err(err) = self.records.update(self.kind, index, name, raw) {
			error!("{err}");
		}

		match self.collection().position(handle) {
			Some(position) => self.pager.select(position, self.collection().count()),
			None => {
				info!("edited record no longer matches the query");
				self.mode = Mode::Browsing;
			}
		}
	}

	pub(crate) fn remove(&mut self) {
		let index = self.cursor();
		let uid = self.collection().uid(index).unwrap_or_else(|| "placeholder".into());
		match self.records.remove(self.kind, index) {
			Ok(()) => info!("removed {uid} from {}", self.kind),
			Err(err) => error!("{err}"),
		}
		self.pager.clamp(self.collection().count());
	}

	/// Create an empty record of the `choice`-th variant and edit it.
	pub(crate) fn create(&mut self, choice: usize) {
		let variants = self.kind.variants();
		let Some(variant) = variants.get(choice).or_else(|| variants.first()) else {
			match self.kind {
				Kind::Reserveringen => self.begin_selection(),
				_ => error!("{} are created by invoicing a reservering", self.kind),
			}
			return;
		};
		match self.records.create_default(self.kind, variant) {
			Ok(handle) => self.edit(handle),
			Err(err) => error!("{err}"),
		}
	}

	pub(crate) fn invoice(&mut self) {
		if self.kind != Kind::Reserveringen {
			error!("only reserveringen can be invoiced");
			return;
		}
		let Some(uid) = self.collection().uid(self.cursor()) else {
			error!("save the reservering before invoicing it");
			return;
		};
		let today = self.records.today();
		if let Err(err) = self.records.invoice(&uid, Some(today)) {
			error!("{err}");
		}
		self.pager.clamp(self.collection().count());
	}

	pub(crate) fn begin_selection(&mut self) {
		let origin = self.kind;
		self.enter_step(Step::Klant, origin);
	}

	fn enter_step(&mut self, step: Step, origin: Kind) {
		let kind = step.kind();
		let collection = self.records.collection_mut(kind);
		collection.set_filter(Some(selection_filter(&step)));
		collection.run_query("");
		self.kind = kind;
		self.pager.select(0, self.collection().count());
		self.mode = Mode::Selecting(Selection {
			step,
			searching: false,
			origin,
		});
	}

	/// Leave the selection and show `kind` again.
	pub(crate) fn end_selection(&mut self, kind: Kind) {
		if let Mode::Selecting(selection) = &self.mode {
			let picked = selection.step.kind();
			self.restore_view(picked);
		}
		self.switch_to(kind);
	}

	/// Take the row under the cursor for the current selection step.
	pub(crate) fn pick(&mut self) {
		let Mode::Selecting(selection) = self.mode.clone() else {
			return;
		};
		let Some(uid) = self.collection().uid(self.cursor()) else {
			error!("nothing to pick here");
			return;
		};

		match selection.step {
			Step::Klant => {
				self.restore_view(Kind::Klanten);
				self.enter_step(Step::Voertuig { klant: uid }, selection.origin);
			}
			Step::Voertuig { klant } => {
				self.end_selection(Kind::Reserveringen);
				let today = self.records.today();
				match self.records.reserve(&klant, &uid, today, today) {
					Ok(nummer) => self.focus_uid(&nummer),
					Err(err) => error!("{err}"),
				}
			}
		}
	}

	/// Move the cursor to the entry with `uid` and edit it when visible.
	fn focus_uid(&mut self, uid: &str) {
		let collection = self.collection();
		let found = (0..collection.count())
			.find(|&index| collection.uid(index).as_deref() == Some(uid))
			.and_then(|index| collection.handle_at(index));
		if let Some(handle) = found {
			self.edit(handle);
		}
	}
}
