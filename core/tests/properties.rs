use proptest::prelude::*;
use proptest::sample::Index;
use synset_core::{distances_from, Digraph, ScaError, ShortestCommonAncestor, VertexId};

/// Random single-rooted DAG: every vertex `i > 0` gets one to three
/// hypernyms among `0..i`, so vertex 0 is the only root.
fn rooted_dag() -> impl Strategy<Value = Digraph> {
    (1usize..24)
        .prop_flat_map(|n| prop::collection::vec(prop::collection::vec(any::<Index>(), 1..4), n))
        .prop_map(|parents| {
            let n = parents.len();
            let mut g = Digraph::new(n);
            for (child, picks) in parents.iter().enumerate().skip(1) {
                for pick in picks {
                    g.add_edge(child, pick.index(child)).unwrap();
                }
            }
            g
        })
}

fn dag_with_pair() -> impl Strategy<Value = (Digraph, VertexId, VertexId)> {
    (rooted_dag(), any::<Index>(), any::<Index>()).prop_map(|(g, a, b)| {
        let n = g.vertex_count();
        let (v, w) = (a.index(n), b.index(n));
        (g, v, w)
    })
}

fn dag_with_subsets() -> impl Strategy<Value = (Digraph, Vec<VertexId>, Vec<VertexId>)> {
    (
        rooted_dag(),
        prop::collection::vec(any::<Index>(), 1..5),
        prop::collection::vec(any::<Index>(), 1..5),
    )
        .prop_map(|(g, a, b)| {
            let n = g.vertex_count();
            let a = a.iter().map(|i| i.index(n)).collect();
            let b = b.iter().map(|i| i.index(n)).collect();
            (g, a, b)
        })
}

/// Minimum `dist(v, x) + dist(w, x)` over every vertex `x`, by exhaustive scan.
fn brute_force_length(g: &Digraph, v: VertexId, w: VertexId) -> Option<u32> {
    let from_v = distances_from(g, v).unwrap();
    let from_w = distances_from(g, w).unwrap();
    (0..g.vertex_count())
        .filter_map(|x| Some(from_v.get(x)? + from_w.get(x)?))
        .min()
}

proptest! {
    #[test]
    fn same_vertex_is_its_own_ancestor((g, v, _w) in dag_with_pair()) {
        let sca = ShortestCommonAncestor::new(&g);
        prop_assert_eq!(sca.ancestor(v, v).unwrap(), Some(v));
        prop_assert_eq!(sca.length(v, v).unwrap(), Some(0));
    }

    #[test]
    fn pair_length_is_minimal_and_consistent((g, v, w) in dag_with_pair()) {
        let sca = ShortestCommonAncestor::new(&g);
        let ancestor = sca.ancestor(v, w).unwrap().expect("rooted DAG always has an ancestor");
        let length = sca.length(v, w).unwrap().unwrap();

        let dv = distances_from(&g, v).unwrap().get(ancestor);
        let dw = distances_from(&g, w).unwrap().get(ancestor);
        prop_assert_eq!(Some(length), dv.zip(dw).map(|(a, b)| a + b));
        prop_assert_eq!(Some(length), brute_force_length(&g, v, w));
    }

    #[test]
    fn pair_queries_are_symmetric((g, v, w) in dag_with_pair()) {
        let sca = ShortestCommonAncestor::new(&g);
        prop_assert_eq!(sca.ancestor(v, w).unwrap(), sca.ancestor(w, v).unwrap());
        prop_assert_eq!(sca.length(v, w).unwrap(), sca.length(w, v).unwrap());
    }

    #[test]
    fn singleton_subsets_reduce_to_pair((g, v, w) in dag_with_pair()) {
        let sca = ShortestCommonAncestor::new(&g);
        prop_assert_eq!(sca.length_subsets([v], [w]).unwrap(), sca.length(v, w).unwrap());
        prop_assert_eq!(sca.ancestor_subsets([v], [w]).unwrap(), sca.ancestor(v, w).unwrap());
    }

    #[test]
    fn subset_result_is_best_over_cross_product((g, a, b) in dag_with_subsets()) {
        let sca = ShortestCommonAncestor::new(&g);
        let path = sca.triad(a.clone(), b.clone()).unwrap().unwrap();

        let expected = a
            .iter()
            .flat_map(|&v| b.iter().map(move |&w| (v, w)))
            .filter_map(|(v, w)| sca.length(v, w).unwrap())
            .min();
        prop_assert_eq!(Some(path.length), expected);

        // The ancestor is reached from the chosen members themselves.
        prop_assert!(a.contains(&path.v));
        prop_assert!(b.contains(&path.w));
        let dv = distances_from(&g, path.v).unwrap().get(path.ancestor);
        let dw = distances_from(&g, path.w).unwrap().get(path.ancestor);
        prop_assert_eq!(dv.zip(dw).map(|(x, y)| x + y), Some(path.length));
    }

    #[test]
    fn out_of_range_rejected_everywhere((g, v, _w) in dag_with_pair(), extra in 0usize..10) {
        let sca = ShortestCommonAncestor::new(&g);
        let bad = g.vertex_count() + extra;
        let is_range_err = |e: ScaError| matches!(e, ScaError::VertexOutOfRange { vertex, .. } if vertex == bad);
        prop_assert!(is_range_err(sca.length(v, bad).unwrap_err()));
        prop_assert!(is_range_err(sca.ancestor(bad, v).unwrap_err()));
        prop_assert!(is_range_err(sca.length_subsets([v], [bad]).unwrap_err()));
        prop_assert!(is_range_err(sca.ancestor_subsets([bad, v], [v]).unwrap_err()));
    }
}

#[test]
fn empty_subsets_rejected_for_every_set_query() {
    let g = Digraph::from_edges(3, vec![(1, 0), (2, 0)]).unwrap();
    let sca = ShortestCommonAncestor::new(&g);
    let none: [VertexId; 0] = [];
    assert!(matches!(
        sca.length_subsets(none, [1]),
        Err(ScaError::EmptySubset { argument: "A" })
    ));
    assert!(matches!(
        sca.ancestor_subsets([1], none),
        Err(ScaError::EmptySubset { argument: "B" })
    ));
    assert!(matches!(
        sca.triad(none, none),
        Err(ScaError::EmptySubset { argument: "A" })
    ));
}

#[test]
fn engines_share_one_graph_across_threads() {
    let g = Digraph::from_edges(5, vec![(1, 0), (2, 0), (3, 1), (4, 2)]).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    let sca = ShortestCommonAncestor::new(&g);
                    (sca.ancestor(3, 4).unwrap(), sca.length(3, 4).unwrap())
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), (Some(0), Some(4)));
        }
    });
}
