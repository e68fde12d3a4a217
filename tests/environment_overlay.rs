//! Fixture-driven tests for whole environment overlays.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use serde::de::DeserializeOwned;

use kie_overlay::{
    decode_resources, encode_resources, merge_custom_object, merge_environment, merge_layers,
    CustomObject, Environment,
};

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

fn load<T: DeserializeOwned>(name: &str) -> T {
    let path = testdata(name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
}

#[test]
fn test_server_authoring_overlay() {
    let baseline: CustomObject = load("server-baseline.yaml");
    let overlay: CustomObject = load("authoring-overlay.yaml");
    let expected: CustomObject = load("server-expected.yaml");

    assert_eq!(merge_custom_object(&baseline, &overlay), expected);
}

#[test]
fn test_server_overlay_inside_environment() {
    let baseline = Environment {
        servers: vec![load("server-baseline.yaml"), load("server-baseline.yaml")],
        ..Default::default()
    };
    let overlay = Environment {
        servers: vec![load("authoring-overlay.yaml")],
        ..Default::default()
    };

    let merged = merge_environment(&baseline, &overlay);
    assert_eq!(merged.servers.len(), 2);
    assert_eq!(merged.servers[0], load::<CustomObject>("server-expected.yaml"));
    assert_eq!(merged.servers[1], baseline.servers[1]);
}

#[test]
fn test_reapplying_overlay_is_stable() {
    let baseline: CustomObject = load("server-baseline.yaml");
    let overlay: CustomObject = load("authoring-overlay.yaml");

    let once = merge_layers(&baseline, &[overlay.clone()]);
    let twice = merge_layers(&baseline, &[overlay.clone(), overlay]);
    assert_eq!(once, twice);
}

#[test]
fn test_manifest_round_trip() {
    let baseline: CustomObject = load("server-baseline.yaml");
    let overlay: CustomObject = load("authoring-overlay.yaml");
    let expected: CustomObject = load("server-expected.yaml");

    let manifest = encode_resources(&baseline.into_resources()).unwrap();
    let regrouped = CustomObject::from_resources(decode_resources(&manifest).unwrap());

    let merged = merge_custom_object(&regrouped, &overlay);
    assert_eq!(merged.len(), expected.len());
    assert_eq!(
        merged.deployment_configs[0].spec,
        expected.deployment_configs[0].spec
    );
    assert_eq!(merged.deployment_configs[0].kind, "DeploymentConfig");
    assert_eq!(merged.routes[0].api_version, "route.openshift.io/v1");
}
