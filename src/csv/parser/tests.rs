use super::*;
use approx::assert_relative_eq;

#[test]
fn test_parse_quoted_action_line() {
    let record = parse_csv_line(r#"46.5,6.6,"A","B|C","action""#).unwrap();
    assert_relative_eq!(record.lat, 46.5);
    assert_relative_eq!(record.lng, 6.6);
    assert_eq!(record.title, "A");
    assert_eq!(record.description, "B|C");
    assert_eq!(record.category, Category::Action);
}

#[test]
fn test_trailing_empty_type_defaults_to_lieu() {
    let record = parse_csv_line(r#"46.5,6.6,"A","B","#).unwrap();
    assert_eq!(record.category, Category::Lieu);
}

#[test]
fn test_missing_type_column_defaults_to_lieu() {
    let record = parse_csv_line(r#"46.2044,6.1432,"Siège SSP","Bureau régional""#).unwrap();
    assert_eq!(record.category, Category::Lieu);
    assert_eq!(record.title, "Siège SSP");
}

#[test]
fn test_type_is_trimmed() {
    let record = parse_csv_line("46.5,6.6,A,B,  action  ").unwrap();
    assert_eq!(record.category, Category::Action);
}

#[test]
fn test_unknown_type_is_lieu() {
    let record = parse_csv_line("46.5,6.6,A,B,event").unwrap();
    assert_eq!(record.category, Category::Lieu);
}

#[test]
fn test_non_numeric_latitude_is_nan() {
    let record = parse_csv_line("abc,6.6,A,B,action").unwrap();
    assert!(record.lat.is_nan());
    assert_relative_eq!(record.lng, 6.6);
}

#[test]
fn test_numeric_prefix_is_accepted() {
    let record = parse_csv_line("46.5°N, 6.6 E,A,B").unwrap();
    assert_relative_eq!(record.lat, 46.5);
    assert_relative_eq!(record.lng, 6.6);
}

#[test]
fn test_commas_inside_quotes_stay_in_field() {
    let record = parse_csv_line(r#"46.5,6.6,"Lausanne, gare","Départ, 10h|Arrivée","action""#)
        .unwrap();
    assert_eq!(record.title, "Lausanne, gare");
    assert_eq!(record.description, "Départ, 10h|Arrivée");
}

#[test]
fn test_fields_are_trimmed() {
    let fields = split_csv_fields(" 46.5 ,  6.6,\"  A \" ,B\r");
    assert_eq!(fields, vec!["46.5", "6.6", "A", "B"]);
}

#[test]
fn test_quotes_toggle_and_are_dropped() {
    // Keine Escape-Unterstützung: "" schaltet zweimal um
    let fields = split_csv_fields(r#"a""b,c"#);
    assert_eq!(fields, vec!["ab", "c"]);
}

#[test]
fn test_too_few_columns_is_malformed() {
    let err = parse_csv_line("46.5,6.6,A").expect_err("Zeile sollte fehlschlagen");
    assert_eq!(err, CsvLineError::MalformedRow { columns: 3 });
    assert!(err.to_string().contains("3 Spalte"));
}

#[test]
fn test_lenient_float_edge_cases() {
    assert!(parse_float_lenient("").is_nan());
    assert!(parse_float_lenient("-").is_nan());
    assert!(parse_float_lenient(".").is_nan());
    assert_relative_eq!(parse_float_lenient("-6.5"), -6.5);
    assert_relative_eq!(parse_float_lenient(".5"), 0.5);
    assert_relative_eq!(parse_float_lenient("1e2x"), 100.0);
    assert_relative_eq!(parse_float_lenient("7e"), 7.0);
}

#[test]
fn test_infinity_is_parsed_like_a_number_prefix() {
    assert_eq!(parse_float_lenient("Infinity"), f64::INFINITY);
    assert_eq!(parse_float_lenient(" +Infinityx"), f64::INFINITY);
    assert_eq!(parse_float_lenient("-Infinity"), f64::NEG_INFINITY);
    assert!(parse_float_lenient("infinity").is_nan());
    assert!(parse_float_lenient("Inf").is_nan());

    let record = parse_csv_line("Infinity,6.6,A,B").expect("Zeile sollte parsen");
    assert_eq!(record.lat, f64::INFINITY);
}
