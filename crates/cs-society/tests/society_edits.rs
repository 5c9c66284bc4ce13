use cs_core::errors::CsError;
use cs_society::CircularSociety;

fn society() -> CircularSociety {
    let mut society = CircularSociety::new("edits", 10.0).unwrap();
    society.add_arc("A", 0.0, 3.0).unwrap();
    society.add_arc("B", 2.0, 5.0).unwrap();
    society.add_arc("C", 8.0, 1.0).unwrap();
    society
}

#[test]
fn duplicate_add_is_rejected_and_leaves_society_unchanged() {
    let mut society = society();
    let before = society.clone();
    let err = society.add_arc("B", 4.0, 6.0).unwrap_err();
    match err {
        CsError::DuplicateName(info) => {
            assert_eq!(info.code, "duplicate-name");
            assert_eq!(info.context.get("name"), Some(&"B".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(society, before);
    assert_eq!(society.len(), 3);
}

#[test]
fn lookup_and_find_follow_insertion_order() {
    let society = society();
    assert_eq!(society.find_arc("A"), Some(0));
    assert_eq!(society.find_arc("C"), Some(2));
    assert_eq!(society.find_arc("Z"), None);
    assert_eq!(society.lookup_arc("B").map(|arc| arc.right()), Some(5.0));
    assert!(society.lookup_arc("Z").is_none());
    assert_eq!(society.names(), vec!["A", "B", "C"]);
    assert_eq!(society.left_endpoints(), vec![0.0, 2.0, 8.0]);
    assert_eq!(society.right_endpoints(), vec![3.0, 5.0, 1.0]);
    assert!(society.arcs().iter().all(|arc| arc.modulus() == 10.0));
}

#[test]
fn remove_keeps_indexes_in_sync() {
    let mut society = society();
    let removed = society.remove_arc("B").expect("B present");
    assert_eq!(removed.name(), "B");
    assert_eq!(society.len(), 2);
    assert_eq!(society.names(), vec!["A", "C"]);
    assert_eq!(society.left_endpoints(), vec![0.0, 8.0]);
    assert_eq!(society.find_arc("C"), Some(1));

    assert!(society.remove_arc("B").is_none());
    assert_eq!(society.len(), 2);
}

#[test]
fn edit_moves_endpoints_in_place() {
    let mut society = society();
    society.edit_arc("A", 6.0, 7.0).unwrap();
    let arc = society.lookup_arc("A").unwrap();
    assert_eq!((arc.left(), arc.right()), (6.0, 7.0));
    assert_eq!(arc.modulus(), 10.0);
    assert_eq!(society.find_arc("A"), Some(0));

    let err = society.edit_arc("missing", 1.0, 2.0).unwrap_err();
    assert!(matches!(err, CsError::NameNotFound(_)));
}

#[test]
fn rename_preserves_uniqueness() {
    let mut society = society();
    society.rename_arc("A", "Alpha").unwrap();
    assert_eq!(society.find_arc("Alpha"), Some(0));
    assert!(society.lookup_arc("A").is_none());

    let err = society.rename_arc("Alpha", "B").unwrap_err();
    assert!(matches!(err, CsError::DuplicateName(_)));
    let err = society.rename_arc("A", "D").unwrap_err();
    assert!(matches!(err, CsError::NameNotFound(_)));
    society.rename_arc("B", "B").unwrap();
}

#[test]
fn invalid_geometry_is_rejected() {
    assert!(matches!(
        CircularSociety::new("bad", 0.0),
        Err(CsError::InvalidInput(_))
    ));
    assert!(matches!(
        CircularSociety::new("bad", f64::NAN),
        Err(CsError::InvalidInput(_))
    ));
    let mut society = society();
    assert!(matches!(
        society.add_arc("D", f64::INFINITY, 1.0),
        Err(CsError::InvalidInput(_))
    ));
    assert_eq!(society.len(), 3);
}

#[test]
fn display_lists_every_arc() {
    let text = society().to_string();
    assert!(text.starts_with("Circular Society Name: edits"));
    assert!(text.contains("Number of Voters: 3"));
    assert!(text.contains(" A: [0, 3]"));
    assert!(text.contains(" C: [0, 1] U [8, 10]"));
}
