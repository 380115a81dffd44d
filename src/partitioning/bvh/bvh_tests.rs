use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};
use crate::partitioning::{Bvh, BvhNodeId};
use crate::utils::hashmap::HashMap;

fn make_test_sphere(i: usize) -> BoundingSphere {
    BoundingSphere::new(Point::new(i as Real * 1.5, 0.0, 0.0), 1.0)
}

fn insert_and_track(
    bvh: &mut Bvh<usize, BoundingSphere>,
    leaf_ids: &mut HashMap<usize, BvhNodeId>,
    i: usize,
) {
    for (data, id) in bvh.insert(make_test_sphere(i), i) {
        let _ = leaf_ids.insert(data, id);
    }
}

fn remove_and_track(
    bvh: &mut Bvh<usize, BoundingSphere>,
    leaf_ids: &mut HashMap<usize, BvhNodeId>,
    i: usize,
) {
    let id = leaf_ids.remove(&i).unwrap();
    if let Some((data, id)) = bvh.remove(id) {
        let _ = leaf_ids.insert(data, id);
    }
}

#[test]
fn bvh_incremental_build_and_removal() {
    // Check various removal patterns against incrementally built trees.
    // The tree validity is asserted at every step.
    #[derive(Copy, Clone, Debug)]
    enum RemovalPattern {
        InOrder,
        RevOrder,
        EvenOdd,
    }

    for removal_pattern in [
        RemovalPattern::InOrder,
        RemovalPattern::RevOrder,
        RemovalPattern::EvenOdd,
    ] {
        for len in 1..=50 {
            let mut bvh = Bvh::new();
            let mut leaf_ids = HashMap::default();

            for i in 0..len {
                insert_and_track(&mut bvh, &mut leaf_ids, i);
                bvh.assert_well_formed();
            }

            assert_eq!(bvh.leaf_count(), len);
            assert_eq!(bvh.node_count(), 2 * len - 1);
            assert_eq!(leaf_ids.len(), len);

            match removal_pattern {
                RemovalPattern::InOrder => {
                    for i in 0..len {
                        remove_and_track(&mut bvh, &mut leaf_ids, i);
                        bvh.assert_well_formed();
                    }
                }
                RemovalPattern::RevOrder => {
                    for i in (0..len).rev() {
                        remove_and_track(&mut bvh, &mut leaf_ids, i);
                        bvh.assert_well_formed();
                    }
                }
                RemovalPattern::EvenOdd => {
                    for i in (0..len).filter(|i| i % 2 == 0) {
                        remove_and_track(&mut bvh, &mut leaf_ids, i);
                        bvh.assert_well_formed();
                    }
                    for i in (0..len).filter(|i| i % 2 != 0) {
                        remove_and_track(&mut bvh, &mut leaf_ids, i);
                        bvh.assert_well_formed();
                    }
                }
            }

            assert!(bvh.is_empty());
            assert_eq!(bvh.leaf_count(), 0);
            assert!(leaf_ids.is_empty());
        }
    }
}

#[test]
fn insert_reports_created_and_relocated_leaves() {
    let mut bvh = Bvh::new();

    // First insertion: the new leaf becomes the root.
    let first = bvh.insert(make_test_sphere(0), 0usize);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].0, 0);

    // Second insertion splits the root leaf: both the relocated payload and the new
    // leaf must be reported, at fresh node indices.
    let second = bvh.insert(make_test_sphere(1), 1usize);
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].0, 0);
    assert_eq!(second[1].0, 1);
    assert_ne!(second[0].1, second[1].1);
    assert_ne!(second[0].1, first[0].1);
}

#[test]
fn in_order_iteration_visits_every_node() {
    let mut bvh = Bvh::new();
    assert_eq!(bvh.iter().count(), 0);

    let len = 17;
    for i in 0..len {
        let _ = bvh.insert(make_test_sphere(i), i);
    }

    assert_eq!(bvh.iter().count(), 2 * len - 1);
    assert_eq!(bvh.iter().filter(|node| node.is_leaf()).count(), len);

    // Iteration is restartable: a second traversal sees the same sequence.
    let leaves: Vec<_> = bvh.iter().filter_map(|node| node.leaf_data()).collect();
    let leaves_again: Vec<_> = bvh.iter().filter_map(|node| node.leaf_data()).collect();
    assert_eq!(leaves, leaves_again);
}

#[test]
fn tree_traversals_emit_overlapping_leaf_pairs() {
    let mut left: Bvh<usize, _> = Bvh::new();
    let mut right: Bvh<usize, _> = Bvh::new();

    let _ = left.insert(BoundingSphere::new(Point::new(0.0, 0.0, 0.0), 5.0), 0);
    let _ = right.insert(BoundingSphere::new(Point::new(3.0, 0.0, 0.0), 1.0), 1);
    let _ = right.insert(BoundingSphere::new(Point::new(50.0, 0.0, 0.0), 1.0), 2);

    let mut pairs = Vec::new();
    let count = left
        .potential_contacts_with(&right, &mut |a, b| {
            pairs.push((a, b));
            Ok::<(), ()>(())
        })
        .unwrap();

    assert_eq!(count, 1);
    assert_eq!(pairs, vec![(0, 1)]);

    // Traversing against an empty tree contributes nothing.
    let empty = Bvh::new();
    let count = left
        .potential_contacts_with(&empty, &mut |_, _| Ok::<(), ()>(()))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn traversal_failure_aborts_early() {
    let mut bvh: Bvh<usize, _> = Bvh::new();
    for i in 0..8 {
        // All spheres overlap each other.
        let _ = bvh.insert(BoundingSphere::new(Point::new(0.0, 0.0, 0.0), 2.0), i);
    }

    let mut emitted = 0;
    let result = bvh.self_potential_contacts(&mut |_, _| {
        emitted += 1;
        if emitted == 3 {
            Err("stop")
        } else {
            Ok(())
        }
    });

    assert_eq!(result, Err("stop"));
    assert_eq!(emitted, 3);
}
