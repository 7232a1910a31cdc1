#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the add/edit model flow: normalizing the ID,
//! building the association universe and resolving what gets submitted.

use aio_admin_core::association::{build_universe, AssociationSelector};
use aio_admin_core::i18n::Translator;
use aio_admin_core::pagination::{page_slice, page_window, PageItem};
use aio_admin_core::types::{ModelPayload, ModelProvider};
use aio_admin_core::validation::normalize_model_id;
use aio_admin_core::ValidationError;

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

/// Debug listing as returned by the server, unsorted and with duplicates.
fn listing() -> Vec<&'static str> {
    vec!["aio_b", "aio_a", "aio_self", "aio_c", "aio_a"]
}

/// Mirrors the submit order of the form: ID first, then associations.
fn resolve(raw_id: &str, selector: &AssociationSelector) -> Result<ModelPayload, ValidationError> {
    let model_id = normalize_model_id(raw_id)?;
    let ass_model_ids = selector.validate()?;
    Ok(ModelPayload {
        model_id,
        ass_model_ids,
        provider: ModelProvider::Chat,
        enabled: true,
    })
}

#[test]
fn editing_excludes_self_and_lists_stored_first() {
    let universe = build_universe(listing(), "aio_self");
    assert_eq!(universe, ids(&["aio_a", "aio_b", "aio_c"]));

    let selector = AssociationSelector::open(universe, &ids(&["aio_c"]));
    let order: Vec<&str> = selector.rows().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(order, vec!["aio_c", "aio_a", "aio_b"]);
    assert!(!selector.is_custom_mode());

    let payload = resolve("SELF", &selector).unwrap();
    assert_eq!(payload.model_id, "aio_self");
    assert_eq!(payload.ass_model_ids, ids(&["aio_c"]));
}

#[test]
fn unknown_stored_association_opens_in_custom_mode() {
    let universe = build_universe(listing(), "aio_self");
    let stored = ids(&["aio_a", "legacy-model"]);
    let selector = AssociationSelector::open(universe, &stored);

    assert!(selector.is_custom_mode());
    assert_eq!(selector.custom_value(), "aio_a, legacy-model");
    assert!(selector.checked_ids().is_empty());

    let payload = resolve("self", &selector).unwrap();
    assert_eq!(payload.ass_model_ids, stored);
}

#[test]
fn invalid_id_is_reported_before_associations() {
    let selector = AssociationSelector::open(build_universe(listing(), ""), &[]);
    assert_eq!(
        resolve("way_too_long_id", &selector),
        Err(ValidationError::ModelIdTooLong)
    );
    assert_eq!(
        resolve("gpt4o", &selector),
        Err(ValidationError::AssociationRequired)
    );
}

#[test]
fn custom_mode_replaces_structured_selection() {
    let mut selector = AssociationSelector::open(build_universe(listing(), ""), &[]);
    selector.select_all();
    assert_eq!(selector.checked_ids().len(), 4);

    selector.toggle_custom();
    assert!(selector.checked_ids().is_empty());
    assert_eq!(
        selector.validate(),
        Err(ValidationError::CustomValueRequired)
    );

    for c in " x , ,y ".chars() {
        selector.push_custom_char(c);
    }
    assert_eq!(selector.validate().unwrap(), ids(&["x", "y"]));

    // leaving custom mode drops the text and does not restore the old checks
    selector.toggle_custom();
    assert_eq!(selector.custom_value(), "");
    assert_eq!(
        selector.validate(),
        Err(ValidationError::AssociationRequired)
    );
}

#[test]
fn search_limits_select_all_to_visible_rows() {
    let mut selector = AssociationSelector::open(build_universe(listing(), ""), &[]);
    selector.set_search("B");
    assert_eq!(selector.visible_indices().len(), 1);

    selector.select_all();
    assert_eq!(selector.checked_ids(), ids(&["aio_b"]));

    selector.set_search("nothing-matches");
    selector.select_all();
    assert_eq!(selector.checked_ids(), ids(&["aio_b"]));
}

#[test]
fn validation_messages_are_translated() {
    let en = Translator::builtin(Some("en")).unwrap();
    let zh = en.with_locale(aio_admin_core::i18n::Locale::resolve(Some("zh")));

    let key = ValidationError::AssociationRequired.message_key();
    assert_eq!(
        en.t(key),
        "Please select at least one associated model or use custom mode"
    );
    assert_ne!(zh.t(key), en.t(key));
    assert_eq!(en.t("no.such.key"), "no.such.key");
}

#[test]
fn models_page_slices_and_window() {
    let models: Vec<u32> = (1..=95).collect();
    assert_eq!(page_slice(&models, 10, 10), &[91, 92, 93, 94, 95]);
    assert!(page_slice(&models, 11, 10).is_empty());

    assert_eq!(
        page_window(5, 10),
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(3),
            PageItem::Page(4),
            PageItem::Page(5),
            PageItem::Page(6),
            PageItem::Page(7),
            PageItem::Ellipsis,
            PageItem::Page(10),
        ]
    );
}
