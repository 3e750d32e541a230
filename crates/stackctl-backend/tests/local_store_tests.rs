//! Integration tests for the file-backed stack store and stack resolution

mod common;

use common::*;
use stackctl_backend::{require_stack, StackStore};
use stackctl_core::types::StackName;
use stackctl_core::Error;
use std::fs;

#[test]
fn get_returns_handle_for_existing_snapshot() {
    let fixture = Fixture::new();
    let path = fixture.seed_stack("prod", &web_snapshot());

    let handle = fixture
        .store()
        .get(&StackName::parse("prod").unwrap())
        .unwrap()
        .expect("prod should exist");
    assert_eq!(handle.name().as_str(), "prod");
    assert_eq!(handle.location(), path.as_str());
}

#[test]
fn get_returns_none_for_unknown_stack() {
    let fixture = Fixture::new();
    let found = fixture
        .store()
        .get(&StackName::parse("ghost").unwrap())
        .unwrap();
    assert!(found.is_none());
}

#[test]
fn current_is_none_without_workspace_file() {
    let fixture = Fixture::new();
    assert!(fixture.store().current().unwrap().is_none());
}

#[test]
fn current_reads_selection() {
    let fixture = Fixture::new();
    fixture.select("staging");
    assert_eq!(
        fixture.store().current().unwrap(),
        Some(StackName::parse("staging").unwrap())
    );
}

#[test]
fn current_treats_null_as_no_selection() {
    let fixture = Fixture::new();
    fs::write(fixture.backend_dir.join("workspace.yaml"), "current: null\n").unwrap();
    assert!(fixture.store().current().unwrap().is_none());
}

#[test]
fn require_stack_uses_ambient_selection() {
    let fixture = Fixture::new();
    fixture.seed_stack("dev", &web_snapshot());
    fixture.select("dev");

    let handle = require_stack(&fixture.store(), "").unwrap();
    assert_eq!(handle.name().as_str(), "dev");
}

#[test]
fn require_stack_never_creates_missing_stacks() {
    let fixture = Fixture::new();
    let err = require_stack(&fixture.store(), "prod").unwrap_err();
    assert!(matches!(err, Error::StackNotFound { .. }));
    assert!(!fixture.backend_dir.join("stacks/prod.json").exists());
}

#[test]
fn require_stack_leaves_selection_untouched() {
    let fixture = Fixture::new();
    fixture.seed_stack("dev", &web_snapshot());
    fixture.seed_stack("prod", &web_snapshot());
    fixture.select("dev");

    require_stack(&fixture.store(), "prod").unwrap();
    let workspace = fs::read_to_string(fixture.backend_dir.join("workspace.yaml")).unwrap();
    assert_eq!(workspace, "current: dev\n");
}

#[test]
fn require_stack_rejects_path_like_names() {
    let fixture = Fixture::new();
    let err = require_stack(&fixture.store(), "../prod").unwrap_err();
    assert!(matches!(err, Error::StackNotFound { .. }));
}
