mod common;

use common::{
    installed_font_config, installed_fonts, order_with_children, png_files, write_order,
};
use order_labels::cli::{run, Args};
use order_labels::config::LabelConfig;
use order_labels::fonts::FontError;
use order_labels::input::InputError;
use order_labels::label_actor::LabelError;
use order_labels::lifecycle::LabelSystem;
use order_labels::store::{DirStore, MemoryStore};
use std::sync::Arc;

fn args_for(input: std::path::PathBuf, out: &std::path::Path, fonts: &std::path::Path) -> Args {
    Args {
        input,
        config: None,
        output_dir: Some(out.to_path_buf()),
        font_dir: Some(fonts.to_path_buf()),
        workers: Some(2),
    }
}

/// Two items without modifiers give two square labels.
#[tokio::test]
async fn test_two_plain_items_write_two_square_labels() {
    let Some(fonts) = installed_fonts() else {
        eprintln!("skipping: no fonts installed");
        return;
    };
    let out = tempfile::tempdir().unwrap();
    let system = LabelSystem::with_fonts(
        LabelConfig::default(),
        fonts,
        Arc::new(DirStore::new(out.path())),
    );

    let report = system.render(Arc::new(order_with_children(&[0, 0]))).await;
    system.shutdown().await.unwrap();

    assert!(
        report.is_success(),
        "failures: {:?}",
        report.failures().collect::<Vec<_>>()
    );
    assert_eq!(png_files(out.path()), vec!["label_0.png", "label_1.png"]);
    for name in ["label_0.png", "label_1.png"] {
        let image = image::open(out.path().join(name)).unwrap();
        assert_eq!((image.width(), image.height()), (150, 150));
    }
}

/// One item with three modifiers gives one 150x270 label.
#[tokio::test]
async fn test_children_make_label_taller() {
    let Some(fonts) = installed_fonts() else {
        eprintln!("skipping: no fonts installed");
        return;
    };
    let out = tempfile::tempdir().unwrap();
    let system = LabelSystem::with_fonts(
        LabelConfig::default(),
        fonts,
        Arc::new(DirStore::new(out.path())),
    );

    let report = system.render(Arc::new(order_with_children(&[3]))).await;
    system.shutdown().await.unwrap();

    let saved: Vec<_> = report.saved().collect();
    assert_eq!(saved.len(), 1);
    assert_eq!((saved[0].width, saved[0].height), (150, 270));
    let image = image::open(out.path().join("label_0.png")).unwrap();
    assert_eq!((image.width(), image.height()), (150, 270));
}

/// Same order, different worker counts: identical bytes per label.
#[tokio::test]
async fn test_output_independent_of_scheduling() {
    let Some(fonts) = installed_fonts() else {
        eprintln!("skipping: no fonts installed");
        return;
    };
    let order = Arc::new(order_with_children(&[0, 2, 1, 4, 0, 3]));

    let mut runs = Vec::new();
    for workers in [1, 4] {
        let store = Arc::new(MemoryStore::new());
        let config = LabelConfig {
            workers: Some(workers),
            ..LabelConfig::default()
        };
        let system = LabelSystem::with_fonts(config, Arc::clone(&fonts), store.clone());
        let report = system.render(Arc::clone(&order)).await;
        system.shutdown().await.unwrap();
        assert!(report.is_success());
        runs.push(store);
    }

    let expected: Vec<String> = (0..6).map(|i| format!("label_{i}.png")).collect();
    assert_eq!(runs[0].file_names().len(), 6);
    for name in &expected {
        assert_eq!(runs[0].get(name), runs[1].get(name), "{name} differs");
    }
}

/// A missing font stops the run before any label is written.
#[tokio::test]
async fn test_missing_font_aborts_before_rendering() {
    let work = tempfile::tempdir().unwrap();
    let out = work.path().join("out");
    std::fs::create_dir(&out).unwrap();
    let empty_fonts = work.path().join("fonts");
    std::fs::create_dir(&empty_fonts).unwrap();
    let input = write_order(work.path(), &order_with_children(&[0, 1, 2]));

    let err = run(&args_for(input, &out, &empty_fonts)).await.unwrap_err();

    assert!(matches!(err, LabelError::Font(FontError::Read { .. })));
    assert!(png_files(&out).is_empty());
}

#[tokio::test]
async fn test_unreadable_input_is_reported() {
    let work = tempfile::tempdir().unwrap();
    let missing = work.path().join("nope.json");

    let err = run(&args_for(missing, work.path(), work.path()))
        .await
        .unwrap_err();
    assert!(matches!(err, LabelError::Input(InputError::Open { .. })));
}

#[tokio::test]
async fn test_malformed_input_is_reported() {
    let work = tempfile::tempdir().unwrap();
    let input = work.path().join("order.json");
    let body = r#"{"customer": {"displayName": "A"}, "items": []}"#;
    std::fs::write(&input, body).unwrap();

    let err = run(&args_for(input, work.path(), work.path()))
        .await
        .unwrap_err();
    assert!(matches!(err, LabelError::Input(InputError::Parse(_))));
}

/// A store that fails for one item still lets the others through.
#[tokio::test]
async fn test_store_failure_is_isolated_to_its_item() {
    let Some(fonts) = installed_fonts() else {
        eprintln!("skipping: no fonts installed");
        return;
    };
    let store = Arc::new(MemoryStore::new());
    // Pre-occupy label_1.png so saving item 1 fails.
    {
        use order_labels::store::LabelStore;
        store.save("label_1.png", vec![0]).await.unwrap();
    }
    let system = LabelSystem::with_fonts(LabelConfig::default(), fonts, store.clone());

    let report = system.render(Arc::new(order_with_children(&[0, 1, 2]))).await;
    system.shutdown().await.unwrap();

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, 1);
    assert!(matches!(failures[0].1, LabelError::Store { .. }));
    assert_eq!(report.saved().count(), 2);
    assert_eq!(report.completion_line(), None);
    assert_eq!(store.get("label_1.png"), Some(vec![0]));
}

/// The binary's path end to end: config file naming the faces, files on disk.
#[tokio::test]
async fn test_run_with_configured_fonts_writes_every_label() {
    let Some(fonts) = installed_font_config() else {
        eprintln!("skipping: no fonts installed");
        return;
    };
    let work = tempfile::tempdir().unwrap();
    let out = work.path().join("out");
    std::fs::create_dir(&out).unwrap();
    let input = write_order(work.path(), &order_with_children(&[0, 3, 1]));

    let config = LabelConfig {
        output_dir: out.clone(),
        workers: Some(2),
        fonts,
        ..LabelConfig::default()
    };
    let config_path = work.path().join("labels.toml");
    std::fs::write(&config_path, toml::to_string(&config).unwrap()).unwrap();

    let args = Args {
        input,
        config: Some(config_path),
        output_dir: None,
        font_dir: None,
        workers: None,
    };
    let report = run(&args).await.unwrap();

    assert!(
        report.is_success(),
        "failures: {:?}",
        report.failures().collect::<Vec<_>>()
    );
    assert_eq!(png_files(&out), vec!["label_0.png", "label_1.png", "label_2.png"]);
    let heights: Vec<u32> = ["label_0.png", "label_1.png", "label_2.png"]
        .iter()
        .map(|name| image::open(out.join(name)).unwrap().height())
        .collect();
    assert_eq!(heights, vec![150, 270, 190]);
}
