//! Integration tests for the barracks session
//!
//! These tests verify the full authoring workflow against real storage:
//! - first-run seeding and reload round-trips
//! - unit authoring through the draft editor
//! - squad submission and idempotent saves
//! - cascading deletes from the unit roster into squads

use barracks::engine::{EvaluationEngine, RulesetEngine};
use barracks::session::Barracks;
use barracks::storage::{JsonStore, MemoryStore};
use barracks::unit::editor::UnitDraft;

use std::path::PathBuf;
use uuid::Uuid;

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("barracks-it-{}", Uuid::new_v4()))
}

#[tokio::test]
async fn test_author_unit_and_field_it_in_a_squad() {
    let engine = RulesetEngine::new().unwrap();
    let mut session = Barracks::open(MemoryStore::new(), engine.limits().clone());

    // Author a new unit through the draft editor
    let mut draft = UnitDraft::new();
    draft.name = "Piquier".to_string();
    draft.update_stats(|s| s.power = 2);
    draft.evaluate(&engine).await.unwrap();
    assert!(draft.can_save(session.limits()));
    let unit = draft.finish();
    let unit_id = unit.id;
    session.save_unit(unit);
    assert_eq!(session.units().len(), 5);

    // Field it in a squad
    let mut bench = session.new_squad();
    bench.rename("Avant-garde");
    let source = session.units().get(unit_id).unwrap().clone();
    bench.add_unit(&source).unwrap();
    bench.add_unit(&source).unwrap();

    let review = bench.review(&engine).await.unwrap();
    assert!(bench.apply_review(review));
    assert!(bench.is_valid());

    let squad = bench.submit().unwrap();
    let squad_id = squad.id;
    session.save_squad(squad);

    let stored = session.squads().get(squad_id).unwrap();
    assert_eq!(stored.members.len(), 2);
    // Members are snapshots with their own identities
    assert_ne!(stored.members[0].id, stored.members[1].id);
    assert_eq!(stored.members[0].source_id, unit_id);
}

#[tokio::test]
async fn test_saving_a_squad_twice_keeps_one_entry() {
    let engine = RulesetEngine::new().unwrap();
    let mut session = Barracks::open(MemoryStore::new(), engine.limits().clone());

    let mut bench = session.new_squad();
    bench.rename("Doublon");
    let unit = session.units().units()[0].clone();
    bench.add_unit(&unit).unwrap();
    let review = bench.review(&engine).await.unwrap();
    assert!(bench.apply_review(review));

    let squad = bench.submit().unwrap();
    session.save_squad(squad.clone());
    session.save_squad(squad.clone());

    assert_eq!(session.squads().len(), 1);
    assert_eq!(session.squads().get(squad.id).unwrap(), &squad);
}

#[tokio::test]
async fn test_deleting_a_unit_cascades_into_referencing_squads_only() {
    let engine = RulesetEngine::new().unwrap();
    let mut session = Barracks::open(MemoryStore::new(), engine.limits().clone());

    let knight = session.units().units()[0].clone();
    let archer = session.units().units()[1].clone();

    let mut with_knight = session.new_squad();
    with_knight.rename("Avec templier");
    with_knight.add_unit(&knight).unwrap();
    with_knight.add_unit(&archer).unwrap();
    let review = with_knight.review(&engine).await.unwrap();
    assert!(with_knight.apply_review(review));
    let with_knight_id = with_knight.squad().id;
    session.save_squad(with_knight.submit().unwrap());

    let mut archers_only = session.new_squad();
    archers_only.rename("Archers");
    archers_only.add_unit(&archer).unwrap();
    let review = archers_only.review(&engine).await.unwrap();
    assert!(archers_only.apply_review(review));
    let archers_id = archers_only.squad().id;
    session.save_squad(archers_only.submit().unwrap());

    assert!(session.delete_unit(knight.id));

    // The referencing squad lost exactly the knight's snapshot
    let cascaded = session.squads().get(with_knight_id).unwrap();
    assert_eq!(cascaded.members.len(), 1);
    assert_eq!(cascaded.members[0].source_id, archer.id);
    // The other squad is untouched
    assert_eq!(session.squads().get(archers_id).unwrap().members.len(), 1);
    // And the roster no longer has the unit
    assert!(session.units().get(knight.id).is_none());
}

#[tokio::test]
async fn test_session_round_trips_through_json_store() {
    let dir = scratch_dir();
    let engine = RulesetEngine::new().unwrap();

    let (unit_count, squad_id) = {
        let mut session = Barracks::open(JsonStore::new(&dir), engine.limits().clone());

        let mut bench = session.new_squad();
        bench.rename("Persistée");
        let unit = session.units().units()[2].clone();
        bench.add_unit(&unit).unwrap();
        let review = bench.review(&engine).await.unwrap();
        assert!(bench.apply_review(review));

        let squad = bench.submit().unwrap();
        let id = squad.id;
        session.save_squad(squad);
        (session.units().len(), id)
    };

    // A fresh session sees the stored state, not the first-run defaults
    let session = Barracks::open(JsonStore::new(&dir), engine.limits().clone());
    assert_eq!(session.units().len(), unit_count);
    let squad = session.squads().get(squad_id).unwrap();
    assert_eq!(squad.name, "Persistée");
    assert_eq!(squad.members.len(), 1);

    std::fs::remove_dir_all(dir).ok();
}

#[tokio::test]
async fn test_editing_a_stored_squad_starts_from_its_members() {
    let engine = RulesetEngine::new().unwrap();
    let mut session = Barracks::open(MemoryStore::new(), engine.limits().clone());

    let mut bench = session.new_squad();
    bench.rename("Originale");
    let unit = session.units().units()[0].clone();
    bench.add_unit(&unit).unwrap();
    let review = bench.review(&engine).await.unwrap();
    assert!(bench.apply_review(review));
    let squad = bench.submit().unwrap();
    let id = squad.id;
    session.save_squad(squad);

    let mut editing = session.edit_squad(id).unwrap();
    assert_eq!(editing.member_count(), 1);
    editing.rename("Renommée");
    let review = editing.review(&engine).await.unwrap();
    assert!(editing.apply_review(review));
    session.save_squad(editing.submit().unwrap());

    assert_eq!(session.squads().len(), 1);
    assert_eq!(session.squads().get(id).unwrap().name, "Renommée");
}
