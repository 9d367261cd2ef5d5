//! Integration tests for subnet-calc
//!
//! These tests run complete calculations through the public API, from input
//! strings to the JSON the command line prints.

use subnet_calc::output::{batch_csv_rows, outcome_to_json, result_csv_rows, to_json};
use subnet_calc::processing::{read_batch_file, run_batch};
use subnet_calc::{calculate, CalcOptions, ErrorKind, Ipv6NetworkMode, SubnetResult, UsableRangeMode};

fn json_value(result: &SubnetResult) -> serde_json::Value {
    serde_json::from_str(&to_json(result).expect("Failed to serialize")).expect("Invalid JSON")
}

#[test]
fn test_ipv4_class_c_subnet() {
    let result = calculate("192.168.1.10", "255.255.255.0", &CalcOptions::default())
        .expect("Failed to calculate");
    let value = json_value(&result);

    assert_eq!(value["Network Address"], "192.168.1.0");
    assert_eq!(value["Broadcast Address"], "192.168.1.255");
    assert_eq!(value["First Usable IP"], "192.168.1.1");
    assert_eq!(value["Last Usable IP"], "192.168.1.254");
    assert_eq!(value["Total Hosts"], 254);
    assert_eq!(value["CIDR Notation"], "/24");
    assert_eq!(value.as_object().map(|o| o.len()), Some(6));
}

#[test]
fn test_ipv4_slash_30_subnet() {
    let result = calculate("10.0.0.5", "255.255.255.252", &CalcOptions::default())
        .expect("Failed to calculate");
    let value = json_value(&result);

    assert_eq!(value["Network Address"], "10.0.0.4");
    assert_eq!(value["Broadcast Address"], "10.0.0.7");
    assert_eq!(value["First Usable IP"], "10.0.0.5");
    assert_eq!(value["Last Usable IP"], "10.0.0.6");
    assert_eq!(value["Total Hosts"], 2);
    assert_eq!(value["CIDR Notation"], "/30");
}

#[test]
fn test_ipv6_slash_64_subnet() {
    let result =
        calculate("2001:db8::1", "/64", &CalcOptions::default()).expect("Failed to calculate");
    let value = json_value(&result);

    assert_eq!(value["IP Address"], "2001:0db8:0000:0000:0000:0000:0000:0001");
    assert_eq!(value["Network"], "2001:0db8:0000:0000:0000:0000:0000:0000");
    assert_eq!(value["Address Range Start"], "2001:0db8:0000:0000:0000:0000:0000:0000");
    assert_eq!(value["Address Range End"], "2001:0db8:0000:0000:ffff:ffff:ffff:ffff");
    assert_eq!(value["Total Hosts"], "18,446,744,073,709,551,616");
    assert_eq!(value.as_object().map(|o| o.len()), Some(5));
}

#[test]
fn test_alternate_modes() {
    let options = CalcOptions {
        usable_range: UsableRangeMode::Carry,
        ipv6_network: Ipv6NetworkMode::FullMask,
    };

    let value = json_value(&calculate("10.0.0.255", "255.255.255.255", &options).unwrap());
    assert_eq!(value["First Usable IP"], "10.0.1.0");
    assert_eq!(value["Total Hosts"], -1);

    let value = json_value(&calculate("2001:db8:abcd::1", "32", &options).unwrap());
    assert_eq!(value["Network"], "2001:0db8:0000:0000:0000:0000:0000:0000");

    let legacy = json_value(&calculate("2001:db8:abcd::1", "32", &CalcOptions::default()).unwrap());
    assert_eq!(legacy["Network"], "2001:0db8:abcd:0000:0000:0000:0000:0000");
    assert_eq!(legacy["Address Range Start"], value["Address Range Start"]);
}

#[test]
fn test_input_errors() {
    let options = CalcOptions::default();
    let err = calculate("192.168.1.300", "255.255.255.0", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    let err = calculate("2001:db8::1", "/200", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    let err = calculate("2001:db8::xyz1", "/64", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_single_result_csv() {
    let result = calculate("2001:db8::1", "/64", &CalcOptions::default()).expect("Failed to calculate");
    let rows = result_csv_rows("2001:db8::1 /64", &result);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("\"network\""));
    assert!(rows[1].contains("\"2001:0db8:0000:0000:0000:0000:0000:0000\""));
    assert!(rows[1].contains("\"/64\""));
}

#[tokio::test]
async fn test_batch_file() {
    let requests =
        read_batch_file("src/tests/test_data/batch_01.txt").expect("Failed to read batch file");
    assert_eq!(requests.len(), 9, "Expected 9 requests in test batch");

    let outcomes = run_batch(requests, CalcOptions::default())
        .await
        .expect("Batch run failed");
    assert_eq!(outcomes.len(), 9);

    let ok_count = outcomes.iter().filter(|o| o.result.is_ok()).count();
    assert_eq!(ok_count, 6, "Expected 6 successful calculations");

    // Outcomes stay in file order.
    for pair in outcomes.windows(2) {
        assert!(pair[0].line < pair[1].line);
    }

    let third = serde_json::from_str::<serde_json::Value>(&outcome_to_json(&outcomes[2]).unwrap())
        .unwrap();
    assert_eq!(third["Network Address"], "172.16.0.0");
    assert_eq!(third["Broadcast Address"], "172.16.15.255");
    assert_eq!(third["Total Hosts"], 4094);
    assert_eq!(third["CIDR Notation"], "/20");

    let last = serde_json::from_str::<serde_json::Value>(&outcome_to_json(&outcomes[8]).unwrap())
        .unwrap();
    assert!(last["error"].as_str().unwrap().contains("not-an-address"));

    let rows = batch_csv_rows(&outcomes);
    assert_eq!(rows.len(), 10);
}
