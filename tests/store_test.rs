//! File store, host config and cart hook integration tests

use price_fee::{
    Cart, FeeHook, FeeLine, FileStore, Format, HostConfig, MemoryStore, RequestContext, Rule,
    RuleSet, Settings, SettingsStore,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sample_settings() -> Settings {
    Settings::new(
        "Small order fee",
        RuleSet::new(vec![
            Rule::new(0.0, 49.99, 4.95),
            Rule::new(0.0, 1000.0, 1.0),
            Rule::new(500.0, 1000.0, -1.0),
        ]),
    )
}

#[test]
fn test_json_file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("spf_settings.json"));
    assert_eq!(store.format(), Format::Json);

    store.save(&sample_settings()).unwrap();
    assert_eq!(store.load().unwrap(), sample_settings());
}

#[test]
fn test_yaml_file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("nested/spf_settings.yaml"));
    assert_eq!(store.format(), Format::Yaml);

    store.save(&sample_settings()).unwrap();
    assert_eq!(store.load().unwrap(), sample_settings());
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("absent.json"));
    assert_eq!(store.load().unwrap(), Settings::default());
}

#[test]
fn test_corrupt_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("spf_settings.json");
    std::fs::write(&path, "{ nope").unwrap();
    assert!(FileStore::new(&path).load().is_err());
}

#[test]
fn test_host_config_from_dir() {
    let dir = TempDir::new().unwrap();
    assert!(HostConfig::load_from_dir(dir.path()).unwrap().is_none());

    std::fs::write(
        dir.path().join("price_fee.yaml"),
        "version: 1\nhook:\n  default_label: Surcharge\n  taxable: true\nstore:\n  path: fees.yaml\n",
    )
    .unwrap();

    let config = HostConfig::load_from_dir(dir.path()).unwrap().unwrap();
    assert_eq!(config.hook.default_label, "Surcharge");
    assert!(config.hook.taxable);
    assert_eq!(config.settings_path(dir.path()), dir.path().join("fees.yaml"));
}

struct RecordingCart {
    subtotal: f64,
    fees: Vec<FeeLine>,
}

impl Cart for RecordingCart {
    fn subtotal(&self) -> f64 {
        self.subtotal
    }

    fn add_fee(&mut self, fee: FeeLine) {
        self.fees.push(fee);
    }
}

#[test]
fn test_hook_from_store() {
    let store = MemoryStore::new(sample_settings());
    let hook = FeeHook::default();

    let mut cart = RecordingCart {
        subtotal: 20.0,
        fees: Vec::new(),
    };
    let fee = hook
        .calculate_fees_from_store(&mut cart, &store, &RequestContext::storefront())
        .unwrap()
        .unwrap();
    assert_eq!(fee.amount, 4.95 + 1.0);
    assert_eq!(cart.fees, vec![fee]);

    // 500..1000 cancels the flat fee
    let mut cart = RecordingCart {
        subtotal: 750.0,
        fees: Vec::new(),
    };
    let fee = hook
        .calculate_fees_from_store(&mut cart, &store, &RequestContext::storefront())
        .unwrap();
    assert_eq!(fee, None);
    assert!(cart.fees.is_empty());
}

#[test]
fn test_hook_with_file_store_and_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("price_fee.yaml"),
        "version: 1\nhook:\n  default_label: Surcharge\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("spf_settings.json"),
        r#"{"rules": [{"min": 0, "max": 100, "amount": 3}]}"#,
    )
    .unwrap();

    let config = HostConfig::load_from_dir(dir.path()).unwrap().unwrap();
    let store = FileStore::new(config.settings_path(dir.path()));
    let hook = FeeHook::new(config.hook);

    let mut cart = RecordingCart {
        subtotal: 10.0,
        fees: Vec::new(),
    };
    let fee = hook
        .calculate_fees_from_store(&mut cart, &store, &RequestContext::storefront())
        .unwrap()
        .unwrap();
    assert_eq!(
        fee,
        FeeLine {
            label: "Surcharge".to_string(),
            amount: 3.0,
            taxable: false,
        }
    );
}
