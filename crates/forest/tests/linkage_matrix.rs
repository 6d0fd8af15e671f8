use linked_forest::{
    child_count, in_order, is_leaf, is_root, min_in_subtree, post_order, pre_order, relationship,
    subtree_size, BinaryNode, Relationship,
};

fn fixture_tree() -> (Vec<BinaryNode<i32>>, Option<u32>) {
    //        50
    //      /    \
    //     25     80
    //      \    /  \
    //      30  60  90
    //             /
    //            85
    let mut arena = vec![
        BinaryNode::new(50),
        BinaryNode::new(25),
        BinaryNode::new(80),
        BinaryNode::new(30),
        BinaryNode::new(60),
        BinaryNode::new(90),
        BinaryNode::new(85),
    ];

    arena[0].l = Some(1);
    arena[0].r = Some(2);

    arena[1].p = Some(0);
    arena[1].r = Some(3);

    arena[2].p = Some(0);
    arena[2].l = Some(4);
    arena[2].r = Some(5);

    arena[3].p = Some(1);
    arena[4].p = Some(2);

    arena[5].p = Some(2);
    arena[5].l = Some(6);

    arena[6].p = Some(5);

    (arena, Some(0))
}

fn values(arena: &[BinaryNode<i32>], indices: &[u32]) -> Vec<i32> {
    indices
        .iter()
        .map(|&i| arena[i as usize].value.unwrap())
        .collect()
}

#[test]
fn relationship_identifies_every_role() {
    let (arena, _) = fixture_tree();

    assert_eq!(relationship(&arena, 0, 1), Relationship::LeftChild);
    assert_eq!(relationship(&arena, 0, 2), Relationship::RightChild);
    assert_eq!(relationship(&arena, 1, 0), Relationship::Parent);
    assert_eq!(relationship(&arena, 2, 0), Relationship::Parent);
    assert_eq!(relationship(&arena, 5, 6), Relationship::LeftChild);
    assert_eq!(relationship(&arena, 6, 5), Relationship::Parent);

    // Siblings and grandchildren are unrelated.
    assert_eq!(relationship(&arena, 1, 2), Relationship::None);
    assert_eq!(relationship(&arena, 0, 3), Relationship::None);
    assert_eq!(relationship(&arena, 0, 6), Relationship::None);
}

#[test]
fn root_leaf_and_child_count_queries() {
    let (arena, _) = fixture_tree();

    assert!(is_root(&arena, 0));
    assert!(!is_root(&arena, 1));
    assert!(!is_root(&arena, 6));

    assert!(is_leaf(&arena, 3));
    assert!(is_leaf(&arena, 4));
    assert!(is_leaf(&arena, 6));
    assert!(!is_leaf(&arena, 0));
    assert!(!is_leaf(&arena, 5));

    assert_eq!(child_count(&arena, 0), 2);
    assert_eq!(child_count(&arena, 1), 1);
    assert_eq!(child_count(&arena, 2), 2);
    assert_eq!(child_count(&arena, 5), 1);
    assert_eq!(child_count(&arena, 3), 0);
}

#[test]
fn subtree_sizes() {
    let (arena, root) = fixture_tree();

    assert_eq!(subtree_size(&arena, root), 7);
    assert_eq!(subtree_size(&arena, Some(1)), 2);
    assert_eq!(subtree_size(&arena, Some(2)), 4);
    assert_eq!(subtree_size(&arena, Some(5)), 2);
    assert_eq!(subtree_size(&arena, Some(6)), 1);
    assert_eq!(subtree_size(&arena, None), 0);
}

#[test]
fn minimum_descendants() {
    let (arena, _) = fixture_tree();

    assert_eq!(min_in_subtree(&arena, 0), 1);
    assert_eq!(min_in_subtree(&arena, 2), 4);
    assert_eq!(min_in_subtree(&arena, 5), 6);
    assert_eq!(min_in_subtree(&arena, 3), 3);
}

#[test]
fn traversals_visit_in_expected_order() {
    let (arena, root) = fixture_tree();

    assert_eq!(
        values(&arena, &in_order(&arena, root)),
        vec![25, 30, 50, 60, 80, 85, 90]
    );
    assert_eq!(
        values(&arena, &pre_order(&arena, root)),
        vec![50, 25, 30, 80, 60, 90, 85]
    );
    assert_eq!(
        values(&arena, &post_order(&arena, root)),
        vec![30, 25, 60, 85, 90, 80, 50]
    );

    assert!(in_order(&arena, None).is_empty());
    assert!(pre_order(&arena, None).is_empty());
    assert!(post_order(&arena, None).is_empty());
}
