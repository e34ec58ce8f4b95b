use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const DOCUMENT: &str = r#"{
    "brand": {"name": "Barboss Room", "slogan": "Premium streetwear."},
    "products": [
        {"id": "a", "name": "Anorak", "brand": "Stone Island", "category": "jackets",
         "price": 1500, "new": true},
        {"id": "b", "name": "Beanie", "brand": "Ma.Strum", "category": "hats",
         "price": 300, "sold": true, "bestseller": true},
        {"id": "c", "name": "Coach Jacket", "brand": "C.P. Company", "category": "jackets",
         "price": 700, "priceOnRequest": true}
    ],
    "about": {"story": "Since 2019"}
}"#;

fn document_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOCUMENT.as_bytes()).unwrap();
    file
}

fn storefront(file: &tempfile::NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("storefront").unwrap();
    cmd.env_remove("STOREFRONT_CONTENT")
        .env_remove("RUST_LOG")
        .arg("--content")
        .arg(file.path());
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn shop_filters_and_sorts() {
    let file = document_file();
    let view = stdout_json(
        storefront(&file)
            .arg("shop")
            .args(["--category", "jackets", "--sort", "name"]),
    );

    assert_eq!(view["results_count"], 2);
    assert_eq!(view["show_empty_state"], false);
    assert_eq!(view["cards"][0]["product_id"], "a");
    assert_eq!(view["cards"][1]["price_label"]["kind"], "onRequest");
}

#[test]
fn shop_empty_result_sets_empty_state() {
    let file = document_file();
    let view = stdout_json(storefront(&file).args(["shop", "--price", "under-500", "--size", "XXL"]));
    assert_eq!(view["results_count"], 0);
    assert_eq!(view["show_empty_state"], true);
}

#[test]
fn shop_query_shortcut() {
    let file = document_file();
    let view = stdout_json(storefront(&file).args(["shop", "--query", "filter=bestseller"]));
    assert_eq!(view["results_count"], 1);
    assert_eq!(view["cards"][0]["badge"], "sold");
    assert_eq!(view["cards"][0]["clickable"], false);
}

#[test]
fn product_falls_back_to_first() {
    let file = document_file();
    let page = stdout_json(storefront(&file).args(["product", "--id", "missing"]));
    assert_eq!(page["product"]["product_id"], "a");
    assert_eq!(page["related"][0]["product_id"], "c");
}

#[test]
fn home_and_about() {
    let file = document_file();
    let home = stdout_json(storefront(&file).arg("home"));
    assert_eq!(home["brand"]["name"], "Barboss Room");
    assert_eq!(home["new_arrivals"].as_array().unwrap().len(), 1);

    let about = stdout_json(storefront(&file).arg("about"));
    assert_eq!(about["story"], "Since 2019");
}

#[test]
fn unreadable_content_renders_empty_shop() {
    let mut cmd = Command::cargo_bin("storefront").unwrap();
    cmd.env_remove("STOREFRONT_CONTENT")
        .args(["--content", "/no/such/content.json", "shop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"show_empty_state\": true"));
}

#[test]
fn invalid_price_bucket_is_rejected() {
    let file = document_file();
    storefront(&file)
        .args(["shop", "--price", "cheap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown price bucket token"));
}

#[test]
fn shop_shortcut_keeps_its_products_when_sorted() {
    let file = document_file();
    let view = stdout_json(storefront(&file).args([
        "shop",
        "--query",
        "filter=new",
        "--sort",
        "price-low",
    ]));
    assert_eq!(view["results_count"], 1);
    assert_eq!(view["cards"][0]["product_id"], "a");
}

#[test]
fn shop_shortcut_with_sidebar_filter_fails() {
    let file = document_file();
    storefront(&file)
        .args(["shop", "--query", "filter=new", "--brand", "Ma.Strum"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be combined with sidebar filters"));
}
