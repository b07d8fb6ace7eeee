use hawk_records::Kind;
use hawk_scribe::Handle;

/// Entries of the side menu, in display order.
pub(crate) const MENU: [MenuItem; 5] = [
	MenuItem::Open(Kind::Klanten),
	MenuItem::Open(Kind::Voertuigen),
	MenuItem::Open(Kind::Reserveringen),
	MenuItem::Open(Kind::Facturen),
	MenuItem::Quit,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuItem {
	Open(Kind),
	Quit,
}

impl MenuItem {
	pub(crate) fn label(self) -> &'static str {
		match self {
			Self::Open(kind) => kind.title(),
			Self::Quit => "Afsluiten",
		}
	}
}

/// What the keyboard currently drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
	/// Side menu is focused.
	Menu { cursor: usize },
	/// Table is focused.
	Browsing,
	/// Command input narrows the table.
	Searching,
	/// Side panel lists the fields of one record.
	Editing(Editor),
	/// Picking the parties of a new reservation.
	Selecting(Selection),
}

impl Mode {
	/// Whether keys go to the command input.
	#[must_use]
	pub fn input_focused(&self) -> bool {
		match self {
			Self::Searching => true,
			Self::Editing(editor) => editor.typing,
			Self::Selecting(selection) => selection.searching,
			Self::Menu { .. } | Self::Browsing => false,
		}
	}

	/// Whether typed text is a search query.
	#[must_use]
	pub fn is_search(&self) -> bool {
		matches!(self, Self::Searching)
			|| matches!(self, Self::Selecting(selection) if selection.searching)
	}

	#[must_use]
	pub fn table_focused(&self) -> bool {
		matches!(self, Self::Browsing)
			|| matches!(self, Self::Selecting(selection) if !selection.searching)
	}

	#[must_use]
	pub fn name(&self) -> &'static str {
		match self {
			Self::Menu { .. } => "menu",
			Self::Browsing => "browsing",
			Self::Searching => "searching",
			Self::Editing(_) => "editing",
			Self::Selecting(_) => "selecting",
		}
	}
}

/// Field editor for the record behind `handle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
	pub handle: Handle,
	/// Index into the record's field list.
	pub field: usize,
	/// A new value is being typed into the command input.
	pub typing: bool,
}

impl Editor {
	pub(crate) fn new(handle: Handle) -> Self {
		Self {
			handle,
			field: 0,
			typing: false,
		}
	}
}

/// Progress of a reservation being assembled from the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
	pub step: Step,
	pub searching: bool,
	/// Collection to return to when the selection ends.
	pub origin: Kind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
	Klant,
	Voertuig { klant: String },
}

impl Step {
	/// Collection the current step picks from.
	#[must_use]
	pub fn kind(&self) -> Kind {
		match self {
			Self::Klant => Kind::Klanten,
			Self::Voertuig { .. } => Kind::Voertuigen,
		}
	}

	pub(crate) fn title(&self) -> &'static str {
		match self {
			Self::Klant => "Kies een klant",
			Self::Voertuig { .. } => "Kies een beschikbaar voertuig",
		}
	}
}
