use algorithms::data_structures::BinarySearchTree;
use algorithms::dynamic_programming::knapsack::{knapsack_rolling, knapsack_table};
use algorithms::dynamic_programming::max_subarray::{max_subarray_divide, max_subarray_kadane};
use algorithms::graph::adj_list::AdjList;
use algorithms::graph::bellman_ford::bellman_ford;
use algorithms::graph::dijkstra::dijkstra;
use algorithms::invariant::{Invariant, PermutationOf, Sorted};
use algorithms::searching::SearchAlgorithm;
use algorithms::sorting::SortAlgorithm;
use proptest::prelude::*;

fn random_graph() -> impl Strategy<Value = AdjList> {
    (1usize..12).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0i64..50), 0..40).prop_map(move |edges| {
            let mut g = AdjList::new(n);
            for (u, v, w) in edges {
                g.add_edge(u, v, w).unwrap();
            }
            g
        })
    })
}

proptest! {
    #[test]
    fn every_sort_yields_sorted_permutation(input in prop::collection::vec(-1000i64..1000, 0..200)) {
        for algo in SortAlgorithm::ALL {
            let mut v = input.clone();
            algo.sort(&mut v).unwrap();
            prop_assert!(Sorted.check(&v[..]), "{} left the slice unsorted", algo);
            prop_assert!(PermutationOf(&input[..]).check(&v[..]), "{} changed the elements", algo);
        }
    }

    #[test]
    fn searches_find_exactly_the_present_values(
        mut arr in prop::collection::vec(-500i64..500, 0..100),
        target in -500i64..500,
    ) {
        arr.sort();
        let present = arr.contains(&target);
        for algo in SearchAlgorithm::ALL {
            match algo.search(&arr, target) {
                Some(i) => prop_assert_eq!(arr[i], target, "{}", algo),
                None => prop_assert!(!present, "{} missed {}", algo, target),
            }
        }
    }

    #[test]
    fn searches_reach_deep_targets(
        start in -1_000i64..1_000,
        step in 1i64..5,
        len in 100usize..400,
        pick in any::<prop::sample::Index>(),
    ) {
        // sorted distinct input turns the BST into a chain of depth len - 1
        let arr: Vec<i64> = (0..len as i64).map(|i| start + i * step).collect();
        let k = pick.index(len);
        for algo in SearchAlgorithm::ALL {
            prop_assert_eq!(algo.search(&arr, arr[k]), Some(k), "{}", algo);
        }
    }

    #[test]
    fn max_subarray_forms_agree(arr in prop::collection::vec(any::<i64>(), 1..60)) {
        let kadane = max_subarray_kadane(&arr).map(|(sum, _)| sum);
        prop_assert_eq!(kadane, max_subarray_divide(&arr));
        if let Ok((sum, range)) = max_subarray_kadane(&arr) {
            let total: i128 = arr[range].iter().map(|&x| i128::from(x)).sum();
            prop_assert_eq!(total, i128::from(sum));
        }
    }

    #[test]
    fn knapsack_forms_agree(
        items in prop::collection::vec((1usize..10, any::<u64>()), 0..8),
        capacity in 0usize..30,
    ) {
        let (weights, values): (Vec<usize>, Vec<u64>) = items.into_iter().unzip();
        prop_assert_eq!(
            knapsack_table(&weights, &values, capacity),
            knapsack_rolling(&weights, &values, capacity)
        );
    }

    #[test]
    fn dijkstra_agrees_with_bellman_ford(g in random_graph(), source in 0usize..12) {
        let source = source % g.vertex_count();
        let fast = dijkstra(&g.non_negative().unwrap(), source).unwrap();
        let slow = bellman_ford(g.vertex_count(), &g.edges(), source).unwrap();
        for v in 0..g.vertex_count() {
            prop_assert_eq!(fast.distance(v).map(|d| d as i64), slow.distance(v));
            if let Some(path) = fast.path_to(v) {
                let weight: i64 = path.windows(2).map(|e| g.weight(e[0], e[1]).unwrap()).sum();
                prop_assert_eq!(Some(weight), slow.distance(v));
            }
        }
    }

    #[test]
    fn bst_inorder_is_sorted_and_deduplicated(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let tree: BinarySearchTree<i32> = values.iter().copied().collect();
        let mut expected = values.clone();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(tree.inorder(), expected);
        prop_assert!(tree.is_bst());
        prop_assert_eq!(tree.inorder_iterative(), tree.inorder());
    }
}
