//! Built indexes are immutable and can be shared across threads.

use std::sync::Arc;
use std::thread;

use crate::common::{pairs, synthetic_vocabulary};
use autocomplete::{build_autocompletor, Autocompletor, IndexConfig, Strategy};

#[test]
fn test_shared_index_answers_consistently_across_threads() {
    let vocab = synthetic_vocabulary(1_000);
    for strategy in Strategy::ALL {
        let index: Arc<dyn Autocompletor> =
            Arc::from(build_autocompletor(strategy, vocab.clone(), &IndexConfig::default()));
        let expected = pairs(&index.top_matches("a", 25));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let index = Arc::clone(&index);
                thread::spawn(move || pairs(&index.top_matches("a", 25)))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected, "{}", strategy);
        }
    }
}

#[test]
fn test_scoped_threads_borrow_one_index() {
    let index = build_autocompletor(
        Strategy::Linear,
        synthetic_vocabulary(1_000),
        &IndexConfig::default(),
    );
    let prefixes = ["a", "b", "c", "d", "ab", "cd"];

    let results: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = prefixes
            .iter()
            .map(|prefix| {
                let index = &index;
                scope.spawn(move || index.top_matches(prefix, 10).len())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (prefix, count) in prefixes.iter().zip(results) {
        assert_eq!(count, index.top_matches(prefix, 10).len());
    }
}
