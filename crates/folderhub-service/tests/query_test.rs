//! Integration tests for folder queries.

use folderhub_core::error::ErrorKind;
use folderhub_core::types::OrgId;
use folderhub_entity::folder::Folder;
use folderhub_service::FolderService;

fn org(uuid: &str) -> OrgId {
    uuid.parse().expect("valid UUID literal")
}

fn org1() -> OrgId {
    org("38b9879b-f73b-4b0e-b9d9-4fc4c23643a7")
}

fn org2() -> OrgId {
    org("c1556e17-b7c0-45a3-a6ae-9546248fb17a")
}

fn folder(name: &str, org_id: OrgId, path: &str) -> Folder {
    Folder {
        name: name.to_string(),
        org_id,
        path: path.to_string(),
    }
}

#[test]
fn test_folders_by_org_empty_snapshot() {
    let service = FolderService::new(Vec::new());
    assert!(service.folders_by_org(org1()).is_empty());
}

#[test]
fn test_folders_by_org_single_match() {
    let service = FolderService::new(vec![folder("root", org1(), "root")]);
    assert_eq!(
        service.folders_by_org(org1()),
        vec![folder("root", org1(), "root")]
    );
}

#[test]
fn test_folders_by_org_single_non_match() {
    let service = FolderService::new(vec![folder("root", org2(), "root")]);
    assert!(service.folders_by_org(org1()).is_empty());
}

#[test]
fn test_folders_by_org_mixed_orgs_preserves_order() {
    let service = FolderService::new(vec![
        folder("folder1", org1(), "folder1"),
        folder("folder2", org2(), "folder2"),
        folder("folder3", org1(), "folder3"),
    ]);
    assert_eq!(
        service.folders_by_org(org1()),
        vec![
            folder("folder1", org1(), "folder1"),
            folder("folder3", org1(), "folder3"),
        ]
    );
}

#[test]
fn test_folders_by_org_none_matching() {
    let service = FolderService::new(vec![
        folder("folder1", org1(), "folder1"),
        folder("folder2", org2(), "folder2"),
    ]);
    assert!(service.folders_by_org(OrgId::new()).is_empty());
}

#[test]
fn test_folders_by_org_nested_hierarchy() {
    let service = FolderService::new(vec![
        folder("root1", org1(), "root1"),
        folder("child1", org1(), "root1.child1"),
        folder("root2", org2(), "root2"),
        folder("child2", org2(), "root2.child2"),
        folder("child3", org1(), "root1.child3"),
    ]);
    assert_eq!(
        service.folders_by_org(org1()),
        vec![
            folder("root1", org1(), "root1"),
            folder("child1", org1(), "root1.child1"),
            folder("child3", org1(), "root1.child3"),
        ]
    );
}

#[test]
fn test_folders_by_org_partitions_snapshot() {
    let snapshot = vec![
        folder("a", org1(), "a"),
        folder("b", org1(), "a.b"),
        folder("a", org2(), "a"),
        folder("c", org2(), "a.c"),
    ];
    let service = FolderService::new(snapshot.clone());

    let mut union: Vec<Folder> = Vec::new();
    union.extend(service.folders_by_org(org1()));
    union.extend(service.folders_by_org(org2()));

    assert_eq!(union.len(), snapshot.len());
    for f in &snapshot {
        assert!(union.contains(f));
    }
}

#[test]
fn test_folders_by_org_is_idempotent() {
    let snapshot = vec![
        folder("a", org1(), "a"),
        folder("b", org1(), "a.b"),
        folder("c", org2(), "a"),
    ];
    let service = FolderService::new(snapshot.clone());

    let first = service.folders_by_org(org1());
    let second = service.folders_by_org(org1());
    assert_eq!(first, second);
    assert_eq!(service.folders(), snapshot.as_slice());
}

#[test]
fn test_descendants_of_missing_folder() {
    let service = FolderService::new(Vec::new());
    let err = service.descendants_of(org1(), "nonexistent").unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_descendants_of_childless_folder_is_empty_not_error() {
    let service = FolderService::new(vec![folder(
        "creative-scalphunter",
        org1(),
        "creative-scalphunter",
    )]);
    let descendants = service
        .descendants_of(org1(), "creative-scalphunter")
        .expect("folder exists");
    assert!(descendants.is_empty());
}

#[test]
fn test_descendants_of_direct_and_nested_children() {
    let service = FolderService::new(vec![
        folder("creative-scalphunter", org1(), "creative-scalphunter"),
        folder(
            "clear-arclight",
            org1(),
            "creative-scalphunter.clear-arclight",
        ),
        folder(
            "topical-micromax",
            org1(),
            "creative-scalphunter.clear-arclight.topical-micromax",
        ),
    ]);
    let descendants = service
        .descendants_of(org1(), "creative-scalphunter")
        .expect("folder exists");
    assert_eq!(
        descendants,
        vec![
            folder(
                "clear-arclight",
                org1(),
                "creative-scalphunter.clear-arclight",
            ),
            folder(
                "topical-micromax",
                org1(),
                "creative-scalphunter.clear-arclight.topical-micromax",
            ),
        ]
    );
}

#[test]
fn test_descendants_of_folder_in_different_org() {
    let service = FolderService::new(vec![
        folder("creative-scalphunter", org1(), "creative-scalphunter"),
        folder(
            "clear-arclight",
            org1(),
            "creative-scalphunter.clear-arclight",
        ),
    ]);
    let err = service
        .descendants_of(org2(), "creative-scalphunter")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_descendants_of_multiple_branches() {
    let service = FolderService::new(vec![
        folder("creative-scalphunter", org1(), "creative-scalphunter"),
        folder(
            "clear-arclight",
            org1(),
            "creative-scalphunter.clear-arclight",
        ),
        folder(
            "topical-micromax",
            org1(),
            "creative-scalphunter.topical-micromax",
        ),
        folder(
            "bursting-lionheart",
            org1(),
            "creative-scalphunter.clear-arclight.bursting-lionheart",
        ),
    ]);
    let descendants = service
        .descendants_of(org1(), "creative-scalphunter")
        .expect("folder exists");
    assert_eq!(descendants.len(), 3);
    assert!(
        !descendants
            .iter()
            .any(|f| f.path == "creative-scalphunter")
    );
}

#[test]
fn test_descendants_of_excludes_name_prefix_overlap() {
    let service = FolderService::new(vec![
        folder("ab", org1(), "ab"),
        folder("abcd", org1(), "abcd"),
        folder("c", org1(), "ab.c"),
    ]);
    let descendants = service.descendants_of(org1(), "ab").expect("folder exists");
    assert_eq!(descendants, vec![folder("c", org1(), "ab.c")]);
}

#[test]
fn test_descendants_of_duplicate_names_anchors_first_match() {
    // Two folders named "dup" at different paths; the first in snapshot
    // order is the anchor, so only its children are returned.
    let service = FolderService::new(vec![
        folder("dup", org1(), "left.dup"),
        folder("left", org1(), "left"),
        folder("inner", org1(), "left.dup.inner"),
        folder("dup", org1(), "right.dup"),
        folder("other", org1(), "right.dup.other"),
    ]);
    let descendants = service
        .descendants_of(org1(), "dup")
        .expect("folder exists");
    assert_eq!(
        descendants,
        vec![folder("inner", org1(), "left.dup.inner")]
    );
}

#[test]
fn test_descendants_of_is_idempotent() {
    let snapshot = vec![
        folder("root", org1(), "root"),
        folder("child", org1(), "root.child"),
    ];
    let service = FolderService::new(snapshot.clone());

    let first = service.descendants_of(org1(), "root").expect("exists");
    let second = service.descendants_of(org1(), "root").expect("exists");
    assert_eq!(first, second);
    assert_eq!(service.folders(), snapshot.as_slice());
}
