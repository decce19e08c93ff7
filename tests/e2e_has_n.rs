//! End-to-end tests for many-valued (`has_n`) relationship views.
//!
//! Covers appending, restartable iteration, edge-level access, and the
//! append/iterate cardinality property.

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use graphmap::engine::{GraphEngine, MemoryEngine};
use graphmap::mapping::{Entity, Schema};
use graphmap::{NodeId, PropertyMap, relation_accessors};

relation_accessors! {
    pub struct FolderNode {
        has_n files;
    }
}

fn schema() -> Schema {
    Schema::builder()
        .class("Folder", |c| { c.has_n("files"); })
        .class("File", |_| {})
        .build()
        .unwrap()
}

async fn new_file(engine: &MemoryEngine, schema: &Schema) -> NodeId {
    Entity::create(engine, schema, "File").await.unwrap().node_id()
}

// ============================================================================
// 1. Append then iterate includes the target exactly once
// ============================================================================

#[tokio::test]
async fn test_push_then_iterate_contains_target_once() {
    let engine = MemoryEngine::new();
    let schema = schema();

    let folder = Entity::create(&engine, &schema, "Folder").await.unwrap();
    let file = new_file(&engine, &schema).await;

    folder.has_n("files").unwrap().push(file).await.unwrap();

    let ids = folder.has_n("files").unwrap().node_ids().await.unwrap();
    assert_eq!(ids.iter().filter(|id| **id == file).count(), 1);
}

// ============================================================================
// 2. The folder/files scenario: two files, set equality
// ============================================================================

#[tokio::test]
async fn test_folder_collects_both_files() {
    let engine = MemoryEngine::new();
    let schema = schema();

    let folder = FolderNode(Entity::create(&engine, &schema, "Folder").await.unwrap());
    let f1 = new_file(&engine, &schema).await;
    let f2 = new_file(&engine, &schema).await;

    folder.files().unwrap().push(f1).await.unwrap();
    folder.files().unwrap().push(f2).await.unwrap();

    let ids: BTreeSet<NodeId> = folder.files().unwrap().node_ids().await.unwrap().into_iter().collect();
    assert_eq!(ids, BTreeSet::from([f1, f2]));
}

// ============================================================================
// 3. Restartability: successive iterations agree on an unchanged graph
// ============================================================================

#[tokio::test]
async fn test_restartable_iteration() {
    let engine = MemoryEngine::new();
    let schema = schema();

    let folder = Entity::create(&engine, &schema, "Folder").await.unwrap();
    for _ in 0..3 {
        let file = new_file(&engine, &schema).await;
        folder.has_n("files").unwrap().push(file).await.unwrap();
    }

    let view = folder.has_n("files").unwrap();
    let first: BTreeSet<NodeId> = view.node_ids().await.unwrap().into_iter().collect();
    let second: BTreeSet<NodeId> = view.node_ids().await.unwrap().into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

// ============================================================================
// 4. Iteration is not a snapshot: a later pass sees later appends
// ============================================================================

#[tokio::test]
async fn test_iteration_reflects_graph_at_call_time() {
    let engine = MemoryEngine::new();
    let schema = schema();

    let folder = Entity::create(&engine, &schema, "Folder").await.unwrap();
    let view = folder.has_n("files").unwrap();

    assert_eq!(view.count().await.unwrap(), 0);

    let file = new_file(&engine, &schema).await;
    view.push(file).await.unwrap();

    // Same view object, fresh query.
    assert_eq!(view.count().await.unwrap(), 1);
}

// ============================================================================
// 5. Edge-level access
// ============================================================================

#[tokio::test]
async fn test_rels_exposes_edges() {
    let engine = MemoryEngine::new();
    let schema = schema();

    let folder = Entity::create(&engine, &schema, "Folder").await.unwrap();
    let file = new_file(&engine, &schema).await;
    let created = folder.has_n("files").unwrap().push(file).await.unwrap();

    let rels = folder.has_n("files").unwrap().rels().await.unwrap();
    assert_eq!(rels.len(), 1);
    assert_eq!(rels[0].id, created.id);
    assert_eq!(rels[0].rel_type, "files");
}

// ============================================================================
// 6. No deduplication
// ============================================================================

#[tokio::test]
async fn test_push_does_not_deduplicate() {
    let engine = MemoryEngine::new();
    let schema = schema();

    let folder = Entity::create(&engine, &schema, "Folder").await.unwrap();
    let file = new_file(&engine, &schema).await;

    folder.has_n("files").unwrap().push(file).await.unwrap();
    folder.has_n("files").unwrap().push(file).await.unwrap();

    assert_eq!(folder.has_n("files").unwrap().count().await.unwrap(), 2);
    assert_eq!(engine.relationship_count().await.unwrap(), 2);
}

// ============================================================================
// 7. nodes() resolves full target nodes
// ============================================================================

#[tokio::test]
async fn test_nodes_returns_labeled_targets() {
    let engine = MemoryEngine::new();
    let schema = schema();

    let folder = Entity::create(&engine, &schema, "Folder").await.unwrap();
    let file = new_file(&engine, &schema).await;
    folder.has_n("files").unwrap().push(file).await.unwrap();

    let nodes = folder.has_n("files").unwrap().nodes().await.unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].id, file);
    assert!(nodes[0].has_label("File"));
}

// ============================================================================
// 8. Property: pushing N distinct targets yields exactly N, stable as a set
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_push_n_targets_iterates_n(n in 0usize..12) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        rt.block_on(async {
            let engine = MemoryEngine::new();
            let schema = schema();

            let folder = Entity::create(&engine, &schema, "Folder").await.unwrap();
            let mut expected = BTreeSet::new();
            for _ in 0..n {
                let file = engine.create_node(&["File"], PropertyMap::new()).await.unwrap();
                folder.has_n("files").unwrap().push(file).await.unwrap();
                expected.insert(file);
            }

            let view = folder.has_n("files").unwrap();
            let first: BTreeSet<NodeId> = view.node_ids().await.unwrap().into_iter().collect();
            let second: BTreeSet<NodeId> = view.node_ids().await.unwrap().into_iter().collect();

            assert_eq!(first.len(), n);
            assert_eq!(first, expected);
            assert_eq!(first, second);
        });
    }
}
