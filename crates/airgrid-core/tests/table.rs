//! Round-trip tests for the CSV flight table.

use std::str::FromStr;

use airgrid_core::{read_records, write_records, FlightRecord, TableError, TABLE_HEADER};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn record(date: &str, airline: &str, price: &str, duration: &str, aircraft: &str) -> FlightRecord {
    FlightRecord {
        origin: "DEL".to_string(),
        destination: "BOM".to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        airline: airline.to_string(),
        price: Decimal::from_str(price).unwrap(),
        duration: duration.to_string(),
        aircraft: aircraft.to_string(),
    }
}

#[test]
fn written_records_read_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flights.csv");

    let records = vec![
        record("2025-05-01", "Air India", "5234.00", "2h 10m", "320"),
        record("2025-05-01", "IndiGo, Ltd.", "4999.50", "2h", "Unknown"),
        record("2025-05-02", "Unknown", "12000", "18h ", "77W"),
    ];
    write_records(&path, &records).unwrap();

    let back = read_records(&path).unwrap();
    assert_eq!(back, records);
    assert_eq!(back[0].price.to_string(), "5234.00");
    assert_eq!(back[1].airline, "IndiGo, Ltd.");
    assert_eq!(back[2].duration, "18h ");
}

#[test]
fn header_row_is_written_in_column_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flights.csv");

    write_records(&path, &[record("2025-05-01", "Vistara", "6100.00", "2h 5m", "321")]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some(TABLE_HEADER.join(",").as_str()));
    assert_eq!(
        lines.next(),
        Some("DEL,BOM,2025-05-01,Vistara,6100.00,2h 5m,321")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn empty_table_still_has_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    write_records(&path, &[]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.trim_end(), "From,To,Date,Airline,Price (INR),Duration,Aircraft");
    assert!(read_records(&path).unwrap().is_empty());
}

#[test]
fn reordered_columns_are_matched_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reordered.csv");
    std::fs::write(
        &path,
        "Date,Airline,Price (INR),Duration,Aircraft,From,To\n2025-05-03,SpiceJet,3100.25,1h 55m,738,DEL,BOM\n",
    )
    .unwrap();

    let records = read_records(&path).unwrap();
    assert_eq!(
        records,
        vec![record("2025-05-03", "SpiceJet", "3100.25", "1h 55m", "738")]
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_records(&dir.path().join("nope.csv"));
    assert!(matches!(result, Err(TableError::Io { .. })));
}

#[test]
fn malformed_price_is_csv_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(
        &path,
        "From,To,Date,Airline,Price (INR),Duration,Aircraft\nDEL,BOM,2025-05-03,SpiceJet,cheap,1h,738\n",
    )
    .unwrap();

    let result = read_records(&path);
    assert!(matches!(result, Err(TableError::Csv { .. })));
}
