//! Value files through to rendered output, as the `--file` flag drives them.

use std::io::Write;

use regdec::render::{self, TextOptions};
use regdec::{Error, Radix, RegisterKind, RegisterView, inputs};

fn value_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn file_and_positional_values_are_combined() {
    let file = value_file("# captured from a crash log\n0x96000045\n\n92000010  # second\n");
    let values = inputs::collect_values(&["0x78000000".to_string()], Some(file.path())).unwrap();
    assert_eq!(values, ["0x78000000", "0x96000045", "92000010"]);

    let results = regdec::decode_all(RegisterKind::Esr, values.iter().map(String::as_str), Radix::Auto);
    assert!(results.iter().all(|(_, decoded)| decoded.is_ok()));
    let ecs: Vec<_> = results
        .iter()
        .map(|(_, decoded)| decoded.as_ref().unwrap().fields()[1].value)
        .collect();
    assert_eq!(ecs, [0x1E, 0x25, 0x24]);
}

#[test]
fn bad_lines_do_not_stop_the_rest() {
    let file = value_file("410FD034\nnot-a-value\n0x611F0221\n");
    let values = inputs::collect_values(&[], Some(file.path())).unwrap();
    let results = regdec::decode_all(RegisterKind::Midr, values.iter().map(String::as_str), Radix::Auto);
    let failed: Vec<_> = results
        .iter()
        .filter(|(_, decoded)| decoded.is_err())
        .map(|(input, _)| input.as_str())
        .collect();
    assert_eq!(failed, ["not-a-value"]);

    let json = render::render_json(&results).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
    assert_eq!(parsed[1]["input"], "not-a-value");
    assert_eq!(parsed[2]["kind"], "MIDR");
}

#[test]
fn decimal_file_values() {
    let file = value_file("2214592512\n");
    let values = inputs::collect_values(&[], Some(file.path())).unwrap();
    let results = regdec::decode_all(RegisterKind::Smccc, values.iter().map(String::as_str), Radix::Decimal);
    let view = results[0].1.as_ref().unwrap();
    assert_eq!(view.raw(), 0x8400_0000);
    assert!(render::render_text(view.as_ref(), TextOptions::default())
        .starts_with("Function ID: 0x84000000\n"));
}

#[test]
fn empty_file_is_no_input() {
    let file = value_file("# nothing here\n\n");
    let result = inputs::collect_values(&[], Some(file.path()));
    assert!(matches!(result, Err(Error::NoInput)));
}

#[test]
fn over_wide_values_are_rejected_per_register() {
    let file = value_file("0x1F96000045\n");
    let values = inputs::collect_values(&[], Some(file.path())).unwrap();
    let esr = regdec::decode_all(RegisterKind::Esr, values.iter().map(String::as_str), Radix::Auto);
    assert!(esr[0].1.is_ok());
    let midr = regdec::decode_all(RegisterKind::Midr, values.iter().map(String::as_str), Radix::Auto);
    assert!(midr[0].1.is_err());
}
