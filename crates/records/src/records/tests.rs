use super::*;
use crate::ids::Rrn;
use crate::reservering::Ingeleverd;

const DATA: &str = r#"{
	"particulier": [
		{
			"naam": "Jan Peeters", "straat": "Dorpsstraat", "huisnummer": 12, "postcode": 3500,
			"gemeente": "Hasselt", "geboortedatum": "1985-07-30", "geslacht": "M",
			"rijksregisternummer": "85.07.30-033.28"
		},
		{
			"naam": "Marie Maes", "straat": "Dorpsstraat", "huisnummer": 4, "postcode": 3600,
			"gemeente": "Genk", "geboortedatum": "1990-02-01", "geslacht": "V",
			"rijksregisternummer": "90.02.01-997.04"
		},
		{
			"naam": "Kapot Nummer", "straat": "Dorpsstraat", "huisnummer": 1, "postcode": 3600,
			"gemeente": "Genk", "geboortedatum": "1990-02-01", "geslacht": "V",
			"rijksregisternummer": "90.02.01-997.05"
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
		},
		{
			"nummer": "250830-002", "klant": "0123.456.749", "voertuig": "WVWZZZ1J93W386752",
			"van": "2025-08-30", "tot": "2025-08-31", "ingeleverd": true
		},
		{
			"nummer": "250830-003", "klant": "00.00.00-000.00", "voertuig": "WVWZZZ1J93W386752",
			"van": "2025-08-30", "tot": "2025-08-31", "ingeleverd": true
		}
	],
	"facturen": [
		{ "reservering": "250830-002", "bedrag": 71.98 },
		{ "reservering": "250101-999", "bedrag": 10.0 }
	]
}"#;

fn today() -> NaiveDate {
	NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

fn day(month: u32, day: u32) -> NaiveDate {
	NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

fn records() -> Records {
	Records::from_document(Document::from_json(DATA).unwrap(), today())
}

fn voertuig(records: &Records, uid: &str) -> Shared<Voertuig> {
	Rc::clone(records.voertuigen().uid_index()[uid])
}

fn reservering(records: &Records, uid: &str) -> Shared<Reservering> {
	Rc::clone(records.reserveringen().uid_index()[uid])
}

fn position(records: &Records, kind: Kind, uid: &str) -> usize {
	let collection = records.collection(kind);
	(0..collection.count())
		.find(|&index| collection.uid(index).as_deref() == Some(uid))
		.unwrap()
}

#[test]
fn hydration_skips_broken_records() {
	let records = records();
	assert_eq!(records.klanten().len(), 3);
	assert_eq!(records.voertuigen().len(), 3);
	assert_eq!(records.reserveringen().len(), 2);
	assert_eq!(records.facturen().len(), 1);
}

#[test]
fn references_share_one_record() {
	let records = records();
	let klanten = records.klanten().uid_index();
	let reservering = reservering(&records, "250901-001");
	assert!(Rc::ptr_eq(reservering.borrow().klant(), klanten["85.07.30-033.28"]));
}

#[test]
fn reserving_numbers_after_todays_highest() {
	let mut records = records();
	let nummer = records
		.reserve("90.02.01-997.04", "VF1RFB00756000002", day(9, 2), day(9, 4))
		.unwrap();
	assert_eq!(nummer, "250901-002");
	assert_eq!(records.reserveringen().len(), 3);

	assert!(!voertuig(&records, "VF1RFB00756000002").borrow().beschikbaar);

	let err = records
		.reserve("85.07.30-033.28", "VF1RFB00756000002", day(9, 5), day(9, 6))
		.unwrap_err();
	assert!(matches!(err, ScribeError::Validation { ref field, .. } if field == "voertuig"));
}

#[test]
fn reserving_rejects_unknown_parties_and_crossed_dates() {
	let mut records = records();
	assert!(records.reserve("nobody", "VF1RFB00756000002", day(9, 2), day(9, 4)).is_err());
	assert!(records.reserve("90.02.01-997.04", "VF1RFB00756000002", day(9, 4), day(9, 2)).is_err());
	assert_eq!(records.reserveringen().len(), 2);
	let nummer = records
		.reserve("90.02.01-997.04", "VF1RFB00756000002", day(9, 2), day(9, 4))
		.unwrap();
	assert_eq!(nummer, "250901-002");
}

#[test]
fn invoicing_returns_the_vehicle() {
	let mut records = records();
	let bedrag = records.invoice("250901-001", Some(day(9, 4))).unwrap();
	assert_eq!(bedrag, 80.0 * 3.0 + 80.0 * 2.0);
	assert_eq!(records.facturen().len(), 2);

	assert!(voertuig(&records, "WBAXX00090A000001").borrow().beschikbaar);
	assert_eq!(
		reservering(&records, "250901-001").borrow().ingeleverd(),
		Ingeleverd::Op(day(9, 4))
	);

	assert_eq!(
		records.invoice("250901-001", None).unwrap_err(),
		ScribeError::DuplicateUid {
			uid: "250901-001".into()
		}
	);
}

#[test]
fn referenced_records_cannot_be_removed() {
	let mut records = records();
	let jan = position(&records, Kind::Klanten, "85.07.30-033.28");
	assert!(records.remove(Kind::Klanten, jan).is_err());

	let marie = position(&records, Kind::Klanten, "90.02.01-997.04");
	records.remove(Kind::Klanten, marie).unwrap();
	assert_eq!(records.klanten().len(), 2);

	let billed = position(&records, Kind::Reserveringen, "250830-002");
	assert!(records.remove(Kind::Reserveringen, billed).is_err());
	let factuur = position(&records, Kind::Facturen, "250830-002");
	records.remove(Kind::Facturen, factuur).unwrap();
	records.remove(Kind::Reserveringen, billed).unwrap();
	assert_eq!(records.reserveringen().len(), 1);
}

#[test]
fn referenced_records_keep_their_identifier() {
	let mut records = records();
	let jan = position(&records, Kind::Klanten, "85.07.30-033.28");

	let err = records
		.update(Kind::Klanten, jan, "rijksregisternummer", Rrn::PLACEHOLDER)
		.unwrap_err();
	assert!(matches!(
		err,
		ScribeError::Validation { ref field, .. } if field == "rijksregisternummer"
	));
	assert!(records.klanten().uid_index().contains_key("85.07.30-033.28"));
	assert_eq!(records.to_document().reserveringen.len(), 2);

	let marie = position(&records, Kind::Klanten, "90.02.01-997.04");
	records
		.update(Kind::Klanten, marie, "rijksregisternummer", Rrn::PLACEHOLDER)
		.unwrap();
	assert_eq!(records.to_document().particulier.len(), 1);
}

#[test]
fn edits_reach_dependent_views() {
	let mut records = records();
	let jan = position(&records, Kind::Klanten, "85.07.30-033.28");
	records.update(Kind::Klanten, jan, "naam", "Jan Vermeulen").unwrap();

	let reserveringen = records.collection_mut(Kind::Reserveringen);
	reserveringen.run_query("vermeulen");
	assert_eq!(reserveringen.count(), 1);
	assert_eq!(reserveringen.uid(0).as_deref(), Some("250901-001"));
}

#[test]
fn presets_filter_the_collections() {
	let mut records = records();
	for kind in Kind::ALL {
		for preset in kind.presets() {
			records.collection_mut(kind).set_filter(preset.filter);
		}
	}

	let beschikbaar = Kind::Voertuigen.presets().remove(1);
	assert_eq!(beschikbaar.label, "Beschikbaar");
	let voertuigen = records.collection_mut(Kind::Voertuigen);
	voertuigen.set_filter(beschikbaar.filter);
	assert_eq!(voertuigen.count(), 2);

	let professioneel = Kind::Reserveringen.presets().remove(3);
	let reserveringen = records.collection_mut(Kind::Reserveringen);
	reserveringen.set_filter(professioneel.filter);
	assert_eq!(reserveringen.count(), 1);
}

#[test]
fn placeholders_are_created_but_not_saved() {
	let mut records = records();
	let before = records.to_document();

	records.create_default(Kind::Klanten, "Professioneel").unwrap();
	records.create_default(Kind::Voertuigen, "Voertuig").unwrap();
	assert_eq!(records.klanten().len(), 4);
	assert!(records.create_default(Kind::Facturen, "Factuur").is_err());

	assert_eq!(records.to_document(), before);
}

#[test]
fn documents_survive_a_round_trip() {
	let document = records().to_document();
	let json = document.to_json().unwrap();
	let reloaded = Records::from_document(Document::from_json(&json).unwrap(), today());
	assert_eq!(reloaded.to_document(), document);
	assert_eq!(document.particulier.len(), 2);
	assert_eq!(document.professioneel.len(), 1);
	assert_eq!(document.facturen[0].bedrag, 71.98);
}
