use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use hawk_records::{Document, Kind, Records};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::mode::MENU;
use super::*;

const DATA: &str = r#"{
	"particulier": [
		{
			"naam": "Jan Peeters", "straat": "Dorpsstraat", "huisnummer": 12, "postcode": 3500,
			"gemeente": "Hasselt", "geboortedatum": "1985-07-30", "geslacht": "M",
			"rijksregisternummer": "85.07.30-033.28"
		}
	],
	"professioneel": [
		{
			"naam": "Claes Logistics", "straat": "Industrieweg", "huisnummer": 80, "postcode": 3500,
			"gemeente": "Hasselt", "btwnummer": "0123.456.749"
		}
	],
	"voertuigen": [
		{
			"chassisnummer": "WBAXX00090A000001", "merk": "BMW", "model": "X5",
			"bouwjaar": "2021", "categorie": "M1", "beschikbaar": false, "dagprijs": 80.0
		},
		{
			"chassisnummer": "WVWZZZ1J93W386752", "merk": "Volkswagen", "model": "Golf",
			"bouwjaar": "2019", "categorie": "M1", "beschikbaar": true, "dagprijs": 35.99
		},
		{
			"chassisnummer": "VF1RFB00756000002", "merk": "Renault", "model": "Master",
			"bouwjaar": "2018", "categorie": "N1", "beschikbaar": true, "dagprijs": 65.0
		}
	],
	"reserveringen": [
		{
			"nummer": "250901-001", "klant": "85.07.30-033.28", "voertuig": "WBAXX00090A000001",
			"van": "2025-09-01", "tot": "2025-09-03", "ingeleverd": false
		}
	]
}"#;

fn records() -> Records {
	let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
	Records::from_document(Document::from_json(DATA).unwrap(), today)
}

fn app(kind: Kind) -> App {
	App::new(
		records(),
		UiOptions {
			kind,
			..UiOptions::default()
		},
	)
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, code: KeyCode) -> Option<Outcome> {
	app.handle_key(key(code))
}

fn type_text(app: &mut App, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn screen(app: &mut App) -> String {
	let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	terminal
		.backend()
		.buffer()
		.content()
		.chunks(120)
		.map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
		.collect::<Vec<_>>()
		.join("\n")
}

#[test]
fn escape_saves_and_ctrl_c_discards() {
	let mut app = app(Kind::Klanten);
	assert_eq!(press(&mut app, KeyCode::Esc), Some(Outcome::Save));

	let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
	assert_eq!(app.handle_key(ctrl_c), Some(Outcome::Discard));
}

#[test]
fn typing_a_query_narrows_the_table() {
	let mut app = app(Kind::Voertuigen);
	press(&mut app, KeyCode::Char('f'));
	assert_eq!(app.mode(), &Mode::Searching);

	type_text(&mut app, "golf");
	let collection = app.session.collection();
	assert_eq!(collection.last_query(), "golf");
	assert_eq!(collection.uid(0).as_deref(), Some("WVWZZZ1J93W386752"));
	assert_eq!(app.input.text(), "golf");

	press(&mut app, KeyCode::Enter);
	assert_eq!(app.mode(), &Mode::Browsing);
	assert_eq!(app.session.collection().last_query(), "golf");
}

#[test]
fn escape_while_searching_clears_the_query() {
	let mut app = app(Kind::Voertuigen);
	press(&mut app, KeyCode::Char('/'));
	type_text(&mut app, "golf");
	press(&mut app, KeyCode::Esc);

	assert_eq!(app.mode(), &Mode::Browsing);
	assert_eq!(app.input.text(), "");
	assert_eq!(app.session.collection().count(), 3);
}

#[test]
fn tab_cycles_the_presets() {
	let mut app = app(Kind::Voertuigen);
	assert_eq!(app.session.preset().label, "Alle");

	press(&mut app, KeyCode::Tab);
	assert_eq!(app.session.preset().label, "Beschikbaar");
	assert_eq!(app.session.collection().count(), 2);

	for _ in 0..3 {
		press(&mut app, KeyCode::Tab);
	}
	assert_eq!(app.session.preset().label, "Alle");
	assert_eq!(app.session.collection().count(), 3);
}

#[test]
fn menu_opens_another_collection() {
	let mut app = app(Kind::Klanten);
	press(&mut app, KeyCode::Char('m'));
	assert_eq!(app.mode(), &Mode::Menu { cursor: 0 });

	press(&mut app, KeyCode::Char('j'));
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.kind(), Kind::Voertuigen);
	assert_eq!(app.mode(), &Mode::Browsing);
}

#[test]
fn menu_quit_saves() {
	let mut app = app(Kind::Klanten);
	press(&mut app, KeyCode::Char('m'));
	for _ in 1..MENU.len() {
		press(&mut app, KeyCode::Char('j'));
	}
	assert_eq!(press(&mut app, KeyCode::Enter), Some(Outcome::Save));
}

#[test]
fn editing_a_field_updates_the_record() {
	let mut app = app(Kind::Klanten);
	press(&mut app, KeyCode::Char('e'));
	let Mode::Editing(editor) = app.mode().clone() else {
		panic!("expected the editor, got {:?}", app.mode());
	};

	press(&mut app, KeyCode::Char('e'));
	assert!(app.mode().input_focused());
	let (name, value) = app.session.editor_field().unwrap();
	assert_eq!(name, "naam");
	assert_eq!(app.input.text(), value);

	app.input.set_text("Hanne Claes");
	press(&mut app, KeyCode::Enter);

	let collection = app.session.collection();
	let index = collection.position(editor.handle).unwrap();
	let fields = collection.fields(index).unwrap();
	assert_eq!(fields[0].value, "Hanne Claes");
	assert!(matches!(app.mode(), Mode::Editing(editor) if !editor.typing));
	assert_eq!(app.input.text(), "");
}

#[test]
fn invalid_values_leave_the_record_alone() {
	let mut app = app(Kind::Klanten);
	press(&mut app, KeyCode::Char('e'));
	press(&mut app, KeyCode::Char('j'));
	press(&mut app, KeyCode::Char('j'));
	press(&mut app, KeyCode::Enter);
	let (name, before) = app.session.editor_field().unwrap();
	assert_eq!(name, "huisnummer");

	app.input.set_text("twaalf");
	press(&mut app, KeyCode::Enter);
	let (_, after) = app.session.editor_field().unwrap();
	assert_eq!(after, before);
}

#[test]
fn creating_a_reservering_walks_through_the_selection() {
	let mut app = app(Kind::Reserveringen);
	press(&mut app, KeyCode::Char('c'));
	let Mode::Selecting(selection) = app.mode().clone() else {
		panic!("expected a selection, got {:?}", app.mode());
	};
	assert_eq!(selection.step, Step::Klant);
	assert_eq!(app.kind(), Kind::Klanten);

	press(&mut app, KeyCode::Enter);
	assert!(matches!(
		app.mode(),
		Mode::Selecting(selection) if selection.step.kind() == Kind::Voertuigen
	));
	assert_eq!(app.session.collection().count(), 2);

	press(&mut app, KeyCode::Char('s'));
	assert_eq!(app.kind(), Kind::Reserveringen);
	assert!(matches!(app.mode(), Mode::Editing(_)));
	assert_eq!(app.records().reserveringen().len(), 2);

	// The pick filters are gone once the selection ends.
	assert_eq!(app.records().voertuigen().count(), 3);
}

#[test]
fn escape_abandons_the_selection() {
	let mut app = app(Kind::Reserveringen);
	press(&mut app, KeyCode::Char('c'));
	press(&mut app, KeyCode::Esc);

	assert_eq!(app.kind(), Kind::Reserveringen);
	assert_eq!(app.mode(), &Mode::Browsing);
	assert_eq!(app.records().reserveringen().len(), 1);
	assert_eq!(app.records().klanten().count(), 2);
}

#[test]
fn referenced_records_survive_delete() {
	let mut app = app(Kind::Voertuigen);
	let before = app.session.collection().len();
	press(&mut app, KeyCode::Char('/'));
	type_text(&mut app, "bmw");
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.session.collection().uid(0).as_deref(), Some("WBAXX00090A000001"));

	press(&mut app, KeyCode::Char('d'));
	assert_eq!(app.session.collection().len(), before);
}

#[test]
fn extra_listeners_see_every_event() {
	let mut app = app(Kind::Klanten);
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	let id = app.listen(move |event, _session| sink.borrow_mut().push(event.clone()));

	press(&mut app, KeyCode::Char('f'));
	type_text(&mut app, "ja");
	press(&mut app, KeyCode::Enter);
	assert_eq!(
		seen.borrow().as_slice(),
		[
			InputEvent::Changed("j".into()),
			InputEvent::Changed("ja".into()),
			InputEvent::Submitted("ja".into()),
		]
	);

	assert!(app.unlisten(id));
	press(&mut app, KeyCode::Char('f'));
	type_text(&mut app, "n");
	assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn frame_shows_the_collection_and_hints() {
	let mut app = app(Kind::Klanten);
	let screen = screen(&mut app);
	assert!(screen.contains("Klanten (2)"));
	assert!(screen.contains("Jan Peeters"));
	assert!(screen.contains("Command Input"));
	assert!(screen.contains("Fuzzy Find"));
	assert!(screen.contains("01/09/2025"));
}

#[test]
fn frame_shows_the_side_panel_while_editing() {
	let mut app = app(Kind::Voertuigen);
	press(&mut app, KeyCode::Char('e'));
	let screen = screen(&mut app);
	assert!(screen.contains("Bewerken"));
	assert!(screen.contains("chassisnummer"));
}

#[test]
fn empty_views_say_so() {
	let mut app = app(Kind::Facturen);
	assert!(screen(&mut app).contains("Nothing here yet"));
}
