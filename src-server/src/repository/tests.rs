//! Repository Integration Tests
//!
//! Repositories against an in-memory SQLite database.

use std::path::Path;
use std::sync::Arc;

use reorder_core::{
    ChecklistKind, DragResult, DragSession, FieldPatch, NewItem, OrderEntry, ReorderError, ReorderGuard, ScopeKey,
};

use crate::domain::{Checklist, DefaultTemplate, DomainError, Section};

use super::*;

struct Repos {
    sections: Arc<SectionRepository>,
    subsections: SubsectionRepository,
    checklists: Arc<ChecklistRepository>,
    templates: TemplateRepository,
}

async fn setup_test_db() -> Repos {
    let db_state = init_db(Path::new(":memory:")).await.expect("Failed to init test DB");
    Repos {
        sections: Arc::new(SectionRepository::new(db_state.conn.clone())),
        subsections: SubsectionRepository::new(db_state.conn.clone()),
        checklists: Arc::new(ChecklistRepository::new(db_state.conn.clone())),
        templates: TemplateRepository::new(db_state.conn.clone()),
    }
}

fn orders<T: reorder_core::Orderable>(items: &[T]) -> Vec<(String, u32)> {
    items
        .iter()
        .map(|i| (i.item_id().to_string(), i.order_index()))
        .collect()
}

async fn make_sections(repos: &Repos, names: &[&str]) -> Vec<Section> {
    let mut out = Vec::new();
    for name in names {
        out.push(repos.sections.create("acme", &NewItem::named(*name)).await.unwrap());
    }
    out
}

async fn make_checklist(repos: &Repos, name: &str, kind: ChecklistKind) -> Checklist {
    repos
        .checklists
        .create("sub-1", &NewItem::checklist(name, kind))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_appends_to_scope() {
    let repos = setup_test_db().await;
    let created = make_sections(&repos, &["Exterior", "Interior", "Systems"]).await;

    assert_eq!(created.iter().map(|s| s.order_index).collect::<Vec<_>>(), vec![1, 2, 3]);
    // another company starts its own sequence
    let other = repos.sections.create("globex", &NewItem::named("Roof")).await.unwrap();
    assert_eq!(other.order_index, 1);
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
    let repos = setup_test_db().await;
    let err = repos.sections.create("acme", &NewItem::named("  ")).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[tokio::test]
async fn test_reorder_is_dense_and_one_based() {
    let repos = setup_test_db().await;
    let s = make_sections(&repos, &["A", "B", "C"]).await;

    let entries = vec![
        OrderEntry::new(&s[2].id, 1),
        OrderEntry::new(&s[0].id, 2),
        OrderEntry::new(&s[1].id, 3),
    ];
    repos.sections.reorder("acme", &entries).await.unwrap();

    let listed = repos.sections.list("acme").await.unwrap();
    let names: Vec<&str> = listed.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
    assert_eq!(listed.iter().map(|s| s.order_index).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_reorder_rejects_incomplete_payload_without_writing() {
    let repos = setup_test_db().await;
    let s = make_sections(&repos, &["A", "B", "C"]).await;

    let missing = vec![OrderEntry::new(&s[1].id, 1), OrderEntry::new(&s[0].id, 2)];
    let err = repos.sections.reorder("acme", &missing).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let duplicate = vec![
        OrderEntry::new(&s[1].id, 1),
        OrderEntry::new(&s[1].id, 2),
        OrderEntry::new(&s[0].id, 3),
    ];
    assert!(repos.sections.reorder("acme", &duplicate).await.is_err());

    let listed = repos.sections.list("acme").await.unwrap();
    assert_eq!(orders(&listed), orders(&s));
}

#[tokio::test]
async fn test_deleted_items_are_excluded_from_reorder() {
    let repos = setup_test_db().await;
    let s = make_sections(&repos, &["A", "B", "C"]).await;
    repos.sections.delete(&s[1].id).await.unwrap();

    // naming the deleted item is rejected
    let with_deleted = vec![
        OrderEntry::new(&s[2].id, 1),
        OrderEntry::new(&s[1].id, 2),
        OrderEntry::new(&s[0].id, 3),
    ];
    assert!(repos.sections.reorder("acme", &with_deleted).await.is_err());

    let active_only = vec![OrderEntry::new(&s[2].id, 1), OrderEntry::new(&s[0].id, 2)];
    repos.sections.reorder("acme", &active_only).await.unwrap();

    let listed = repos.sections.list("acme").await.unwrap();
    assert_eq!(listed.len(), 2);
    let deleted = repos.sections.list_deleted("acme").await.unwrap();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].id, s[1].id);
    // a deleted row keeps its old index
    assert_eq!(deleted[0].order_index, 2);
}

#[tokio::test]
async fn test_restore_appends_to_end() {
    let repos = setup_test_db().await;
    let s = make_sections(&repos, &["A", "B", "C"]).await;
    repos.sections.delete(&s[0].id).await.unwrap();

    let restored = repos.sections.restore(&s[0].id).await.unwrap();
    assert_eq!(restored.order_index, 4);
    assert!(restored.deleted_at.is_none());

    let names: Vec<String> = repos
        .sections
        .list("acme")
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["B", "C", "A"]);

    let again = repos.sections.restore(&s[0].id).await.unwrap_err();
    assert!(matches!(again, DomainError::Conflict(_)));
}

#[tokio::test]
async fn test_missing_ids() {
    let repos = setup_test_db().await;
    assert!(matches!(
        repos.sections.delete("nope").await,
        Err(DomainError::NotFound(_))
    ));
    assert!(matches!(
        repos.subsections.restore("nope").await,
        Err(DomainError::NotFound(_))
    ));
    assert_eq!(repos.checklists.find_by_id("nope").await.unwrap(), None);
}

#[tokio::test]
async fn test_subsection_update_keeps_order() {
    let repos = setup_test_db().await;
    let first = repos.subsections.create("sec-1", &NewItem::named("Roof")).await.unwrap();
    repos.subsections.create("sec-1", &NewItem::named("Siding")).await.unwrap();

    let patch = FieldPatch {
        name: Some("Roof covering".into()),
        ..Default::default()
    };
    let updated = repos.subsections.update_fields(&first.id, &patch).await.unwrap();
    assert_eq!(updated.name, "Roof covering");
    assert_eq!(updated.order_index, 1);

    let bad = FieldPatch {
        comment: Some("n/a".into()),
        ..Default::default()
    };
    assert!(repos.subsections.update_fields(&first.id, &bad).await.is_err());
}

#[tokio::test]
async fn test_checklist_create_keeps_status_first() {
    let repos = setup_test_db().await;
    let s1 = make_checklist(&repos, "Shingles", ChecklistKind::Status).await;
    let i1 = make_checklist(&repos, "Roof age", ChecklistKind::Information).await;
    let s2 = make_checklist(&repos, "Flashing", ChecklistKind::Status).await;

    assert_eq!(s2.order_index, 2);
    let listed = repos.checklists.list("sub-1").await.unwrap();
    assert_eq!(
        orders(&listed),
        vec![(s1.id.clone(), 1), (s2.id.clone(), 2), (i1.id.clone(), 3)]
    );

    let info = repos
        .checklists
        .list_group("sub-1", ChecklistKind::Information)
        .await
        .unwrap();
    assert_eq!(info.len(), 1);
    assert_eq!(info[0].id, i1.id);
}

#[tokio::test]
async fn test_checklist_reorder_rejects_information_before_status() {
    let repos = setup_test_db().await;
    let s1 = make_checklist(&repos, "Shingles", ChecklistKind::Status).await;
    let i1 = make_checklist(&repos, "Roof age", ChecklistKind::Information).await;

    let interleaved = vec![OrderEntry::new(&i1.id, 1), OrderEntry::new(&s1.id, 2)];
    let err = repos.checklists.reorder("sub-1", &interleaved).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let listed = repos.checklists.list("sub-1").await.unwrap();
    assert_eq!(orders(&listed), vec![(s1.id.clone(), 1), (i1.id.clone(), 2)]);

    // swapping within the status group keeps the layout and is accepted
    let s2 = make_checklist(&repos, "Flashing", ChecklistKind::Status).await;
    let swapped = vec![
        OrderEntry::new(&s2.id, 1),
        OrderEntry::new(&s1.id, 2),
        OrderEntry::new(&i1.id, 3),
    ];
    repos.checklists.reorder("sub-1", &swapped).await.unwrap();
    let listed = repos.checklists.list("sub-1").await.unwrap();
    assert_eq!(orders(&listed), vec![(s2.id, 1), (s1.id, 2), (i1.id, 3)]);
}

#[tokio::test]
async fn test_checklist_restore_reappends_in_group() {
    let repos = setup_test_db().await;
    let s1 = make_checklist(&repos, "Shingles", ChecklistKind::Status).await;
    let s2 = make_checklist(&repos, "Flashing", ChecklistKind::Status).await;
    let i1 = make_checklist(&repos, "Roof age", ChecklistKind::Information).await;

    repos.checklists.delete(&s1.id).await.unwrap();
    let restored = repos.checklists.restore(&s1.id).await.unwrap();
    assert_eq!(restored.order_index, 2);

    let listed = repos.checklists.list("sub-1").await.unwrap();
    assert_eq!(
        orders(&listed),
        vec![(s2.id.clone(), 1), (s1.id.clone(), 2), (i1.id.clone(), 3)]
    );
}

#[tokio::test]
async fn test_checklist_update_fields() {
    let repos = setup_test_db().await;
    let c = make_checklist(&repos, "Water heater", ChecklistKind::Status).await;

    let patch = FieldPatch {
        comment: Some("corroded fittings".into()),
        answer: Some("12".into()),
        ..Default::default()
    };
    repos.checklists.update_fields(&c.id, &patch).await.unwrap();

    let found = repos.checklists.find_by_id(&c.id).await.unwrap().unwrap();
    assert_eq!(found.comment.as_deref(), Some("corroded fittings"));
    assert_eq!(found.answer.as_deref(), Some("12"));
    assert_eq!(found.order_index, 1);

    let empty = repos.checklists.update_fields(&c.id, &FieldPatch::default()).await;
    assert!(matches!(empty, Err(DomainError::InvalidInput(_))));
}

#[tokio::test]
async fn test_drag_information_group_against_sqlite() {
    let repos = setup_test_db().await;
    let s1 = make_checklist(&repos, "S1", ChecklistKind::Status).await;
    let s2 = make_checklist(&repos, "S2", ChecklistKind::Status).await;
    let i1 = make_checklist(&repos, "I1", ChecklistKind::Information).await;
    let i2 = make_checklist(&repos, "I2", ChecklistKind::Information).await;

    let store: ScopedStore<Checklist, _> = ScopedStore::new(repos.checklists.clone(), "subsection");
    let scope = ScopeKey::Subsection("sub-1".into());
    let all = repos.checklists.list("sub-1").await.unwrap();
    let mut session = DragSession::for_group(scope, ChecklistKind::Information, &all);

    let guard = ReorderGuard::new(session.items().len());
    session.begin_drag(&i2.id, &guard).unwrap();
    let result = session.complete_drag(&i1.id, &guard, &store).await.unwrap();
    assert!(matches!(result, DragResult::Applied(_)));

    let listed = repos.checklists.list("sub-1").await.unwrap();
    assert_eq!(
        orders(&listed),
        vec![(s1.id, 1), (s2.id, 2), (i2.id, 3), (i1.id, 4)]
    );
}

#[tokio::test]
async fn test_drag_rolls_back_when_server_rejects() {
    let repos = setup_test_db().await;
    let s = make_sections(&repos, &["A", "B", "C"]).await;
    let store: ScopedStore<Section, _> = ScopedStore::new(repos.sections.clone(), "company");
    let mut session = DragSession::new(ScopeKey::Company("acme".into()), &s);

    // a concurrent delete makes the client's payload stale
    repos.sections.delete(&s[1].id).await.unwrap();

    let guard = ReorderGuard::new(3);
    session.begin_drag(&s[2].id, &guard).unwrap();
    let err = session.complete_drag(&s[0].id, &guard, &store).await.unwrap_err();
    assert!(matches!(err, ReorderError::Backend(_)));
    assert_eq!(orders(session.items()), orders(&s));
}

#[tokio::test]
async fn test_store_rejects_wrong_scope_level() {
    let repos = setup_test_db().await;
    let store: ScopedStore<Section, _> = ScopedStore::new(repos.sections.clone(), "company");
    let err = reorder_core::ScopeBackend::list_items(&store, &ScopeKey::Section("x".into()))
        .await
        .unwrap_err();
    assert!(matches!(err, reorder_core::BackendError::Rejected(_)));
}

#[tokio::test]
async fn test_seed_default_template() {
    let repos = setup_test_db().await;
    let template = DefaultTemplate::bundled().unwrap();

    let report = repos.templates.seed_company("acme", &template).await.unwrap();
    assert_eq!(report.sections as usize, template.sections.len());

    let sections = repos.sections.list("acme").await.unwrap();
    let indices: Vec<u32> = sections.iter().map(|s| s.order_index).collect();
    assert_eq!(indices, (1..=sections.len() as u32).collect::<Vec<_>>());

    let first_sub = &repos.subsections.list(&sections[0].id).await.unwrap()[0];
    let checklists = repos.checklists.list(&first_sub.id).await.unwrap();
    let status_count = checklists.iter().filter(|c| c.kind == ChecklistKind::Status).count();
    assert!(checklists[..status_count].iter().all(|c| c.kind == ChecklistKind::Status));
    assert_eq!(checklists.last().map(|c| c.order_index), Some(checklists.len() as u32));

    let again = repos.templates.seed_company("acme", &template).await.unwrap_err();
    assert!(matches!(again, DomainError::Conflict(_)));
}
