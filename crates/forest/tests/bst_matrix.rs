use linked_forest::BinarySearchTree;

//        50
//      /    \
//     25     80
//      \    /  \
//      30  60  90
//             /
//            85
fn tree_a() -> BinarySearchTree<i32> {
    let mut tree = BinarySearchTree::new();
    tree.insert_all([50, 25, 30, 80, 60, 90, 85]);
    tree
}

//            50
//          /    \
//        -1      100
//       /  \        \
//     -30   20      300
//          /  \    /   \
//        10   30  200  400
fn tree_b() -> BinarySearchTree<i32> {
    let mut tree = BinarySearchTree::new();
    tree.insert_all([50, -1, 100, -30, 20, 300, 10, 30, 200, 400]);
    tree
}

#[test]
fn insert_rejects_duplicates() {
    let mut tree = tree_a();
    assert_eq!(tree.size(), 7);

    assert!(!tree.insert(80));
    assert!(!tree.insert(50));
    assert_eq!(tree.size(), 7);

    assert!(tree.insert(55));
    assert_eq!(tree.size(), 8);

    // One duplicate poisons the batch result, the rest still lands.
    let mut tree = BinarySearchTree::new();
    assert!(!tree.insert_all([10, 20, 10, 30]));
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.in_order(), vec![10, 20, 30]);
}

#[test]
fn search_finds_only_present_values() {
    let tree = tree_a();

    for value in [50, 25, 30, 80, 60, 90, 85] {
        assert!(tree.search(&value));
    }
    assert!(!tree.search(&0));
    assert!(!tree.search(&86));
    assert!(!tree.search(&-25));

    let empty = BinarySearchTree::<i32>::new();
    assert!(!empty.search(&50));
}

#[test]
fn depth_counts_edges_from_root() {
    let tree = tree_b();

    assert_eq!(tree.depth(&50), 0);
    assert_eq!(tree.depth(&100), 1);
    assert_eq!(tree.depth(&-1), 1);
    assert_eq!(tree.depth(&20), 2);
    assert_eq!(tree.depth(&200), 3);
    assert_eq!(tree.depth(&10), 3);
    assert_eq!(tree.depth(&123), -1);

    let empty = BinarySearchTree::<i32>::new();
    assert_eq!(empty.depth(&50), -1);
}

#[test]
fn traversals_follow_insertion_shape() {
    let tree = tree_a();

    assert_eq!(tree.in_order(), vec![25, 30, 50, 60, 80, 85, 90]);
    assert_eq!(tree.pre_order(), vec![50, 25, 30, 80, 60, 90, 85]);
    assert_eq!(tree.post_order(), vec![30, 25, 60, 85, 90, 80, 50]);

    let empty = BinarySearchTree::<i32>::new();
    assert!(empty.in_order().is_empty());
    assert!(empty.pre_order().is_empty());
    assert!(empty.post_order().is_empty());
}

#[test]
fn delete_leaf() {
    let mut tree = tree_a();

    assert!(tree.delete(&30));
    assert_eq!(tree.size(), 6);
    assert_eq!(tree.in_order(), vec![25, 50, 60, 80, 85, 90]);

    assert!(!tree.delete(&30));
    assert_eq!(tree.size(), 6);
}

#[test]
fn delete_node_with_one_child() {
    // 25 keeps only its right child 30, 90 only its left child 85.
    let mut tree = tree_a();

    assert!(tree.delete(&25));
    assert_eq!(tree.in_order(), vec![30, 50, 60, 80, 85, 90]);
    assert_eq!(tree.depth(&30), 1);

    assert!(tree.delete(&90));
    assert_eq!(tree.in_order(), vec![30, 50, 60, 80, 85]);
    assert_eq!(tree.depth(&85), 2);
    assert_eq!(tree.size(), 5);
}

#[test]
fn delete_node_with_two_children_transplants_successor() {
    // 80's in-order successor is 85, the minimum of its right subtree.
    let mut tree = tree_a();

    assert!(tree.delete(&80));
    assert_eq!(tree.in_order(), vec![25, 30, 50, 60, 85, 90]);
    assert_eq!(tree.depth(&85), 1);
    assert_eq!(tree.depth(&60), 2);
    assert_eq!(tree.depth(&90), 2);
    assert_eq!(tree.size(), 6);
}

#[test]
fn delete_root_promotes_successor() {
    // 50's successor is 100, its direct right child; 100's own right
    // subtree is spliced up before the transplant.
    let mut tree = tree_b();

    assert!(tree.delete(&50));
    assert_eq!(
        tree.in_order(),
        vec![-30, -1, 10, 20, 30, 100, 200, 300, 400]
    );
    assert_eq!(tree.depth(&100), 0);
    assert_eq!(tree.depth(&300), 1);
    assert_eq!(tree.depth(&200), 2);
    assert_eq!(tree.size(), 9);
}

#[test]
fn delete_until_empty() {
    let mut tree = tree_a();

    for value in [50, 25, 30, 80, 60, 90, 85] {
        assert!(tree.delete(&value));
    }
    assert_eq!(tree.size(), 0);
    assert!(tree.is_empty());
    assert!(tree.in_order().is_empty());
    assert!(!tree.delete(&50));
}

#[test]
fn clear_round_trip() {
    let mut tree = tree_a();
    tree.clear();

    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert!(!tree.search(&50));

    assert!(tree.insert_all([3, 1, 2]));
    assert_eq!(tree.in_order(), vec![1, 2, 3]);
}

#[test]
fn custom_comparator_reverses_order() {
    let mut tree = BinarySearchTree::with_comparator(|a: &i32, b: &i32| b - a);
    tree.insert_all([50, 25, 80]);

    assert_eq!(tree.in_order(), vec![80, 50, 25]);
    assert!(tree.search(&25));
    assert!(!tree.insert(80));
}
