//! Partitions shared across threads

use crate::common::vertex;
use labelgraph::{AnyLabelReadPartition, Partition, ReadPartition};
use std::sync::Arc;
use std::thread;

#[test]
fn shared_partition_answers_consistently() {
    let partition: Arc<dyn ReadPartition> = Arc::new(AnyLabelReadPartition::new(["t1", "t2"]));
    let expected = partition.vertex_match_predicate("n");

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let partition = Arc::clone(&partition);
            let expected = expected.clone();
            thread::spawn(move || {
                for j in 0..500 {
                    let label = if (i + j) % 2 == 0 { "t1" } else { "other" };
                    let visible = partition.contains_vertex(&vertex(&[label]));
                    assert_eq!(visible, label == "t1");
                    assert_eq!(partition.vertex_match_predicate("n"), expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn partition_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Partition>();
    assert_send_sync::<Arc<dyn ReadPartition>>();
}
