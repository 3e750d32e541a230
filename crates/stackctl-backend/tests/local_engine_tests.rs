//! Integration tests for the local destroy engine

mod common;

use common::*;
use stackctl_backend::{
    require_stack, DestroyEngine, DestroyRequest, LocalEngine, UpdateHistory, UpdateResult,
};
use stackctl_core::types::{
    ColorMode, DestroyOptions, DisplayOptions, PreviewBehavior, StackName, UpdateMetadata,
};
use stackctl_core::{CancellationScope, EngineError};

fn display() -> DisplayOptions {
    DisplayOptions {
        color: ColorMode::Raw,
        ..Default::default()
    }
}

async fn run(
    fixture: &Fixture,
    behavior: PreviewBehavior,
    options: DestroyOptions,
    scope: &CancellationScope,
) -> Result<(), EngineError> {
    let stack = require_stack(&fixture.store(), "prod").unwrap();
    let metadata = UpdateMetadata::new("decommission");
    let display = display();
    let engine = LocalEngine::new(fixture.backend_dir.clone());
    engine
        .destroy(
            &stack,
            DestroyRequest {
                project: &fixture.project,
                root: &fixture.root,
                metadata: &metadata,
                options: &options,
                behavior,
                display: &display,
            },
            scope,
        )
        .await
}

fn history(fixture: &Fixture) -> Vec<stackctl_backend::UpdateRecord> {
    UpdateHistory::new(&fixture.backend_dir)
        .read(&StackName::parse("prod").unwrap())
        .unwrap()
}

#[tokio::test]
async fn preview_only_leaves_stack_untouched() {
    let fixture = Fixture::new();
    let path = fixture.seed_stack("prod", &web_snapshot());

    run(
        &fixture,
        PreviewBehavior::PreviewOnly,
        DestroyOptions::default(),
        &CancellationScope::new(),
    )
    .await
    .unwrap();

    assert_eq!(load(&path), web_snapshot());
    assert!(history(&fixture).is_empty());
}

#[tokio::test]
async fn skip_preview_removes_every_resource() {
    let fixture = Fixture::new();
    let path = fixture.seed_stack("prod", &web_snapshot());

    run(
        &fixture,
        PreviewBehavior::SkipPreview,
        DestroyOptions::default(),
        &CancellationScope::new(),
    )
    .await
    .unwrap();

    let after = load(&path);
    assert!(after.resources.is_empty());
    assert_eq!(after.config, web_snapshot().config);

    let records = history(&fixture);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].result, UpdateResult::Succeeded);
    assert_eq!(records[0].resources_removed, 3);
    assert_eq!(records[0].message, "decommission");
}

#[tokio::test]
async fn auto_accept_applies_with_parallel_waves() {
    let fixture = Fixture::new();
    let path = fixture.seed_stack("prod", &web_snapshot());

    let options = DestroyOptions {
        parallel: 2,
        ..Default::default()
    };
    run(
        &fixture,
        PreviewBehavior::AutoAccept,
        options,
        &CancellationScope::new(),
    )
    .await
    .unwrap();

    assert!(load(&path).resources.is_empty());
}

#[tokio::test]
async fn cancelled_scope_stops_before_first_removal() {
    let fixture = Fixture::new();
    let path = fixture.seed_stack("prod", &web_snapshot());
    let scope = CancellationScope::new();
    scope.cancel();

    let err = run(
        &fixture,
        PreviewBehavior::SkipPreview,
        DestroyOptions::default(),
        &scope,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, EngineError::Cancelled));
    assert_eq!(load(&path), web_snapshot());

    let records = history(&fixture);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].result, UpdateResult::Cancelled);
    assert_eq!(records[0].resources_removed, 0);
}

#[tokio::test]
async fn unreadable_snapshot_is_an_engine_failure() {
    let fixture = Fixture::new();
    let path = fixture.seed_stack("prod", &web_snapshot());
    std::fs::write(&path, "{ not json").unwrap();

    let err = run(
        &fixture,
        PreviewBehavior::SkipPreview,
        DestroyOptions::default(),
        &CancellationScope::new(),
    )
    .await
    .unwrap_err();

    match err {
        EngineError::Failed(e) => {
            assert!(format!("{:#}", e).contains("loading snapshot for stack 'prod'"))
        }
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[tokio::test]
async fn analyzers_are_skipped_without_failing() {
    let fixture = Fixture::new();
    fixture.seed_stack("prod", &web_snapshot());

    let options = DestroyOptions {
        analyzers: vec!["policy-pack".to_string()],
        ..Default::default()
    };
    run(
        &fixture,
        PreviewBehavior::SkipPreview,
        options,
        &CancellationScope::new(),
    )
    .await
    .unwrap();
}
