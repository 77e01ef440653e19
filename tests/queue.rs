use strq::{Error, Queue};

#[test]
fn smoke() {
    let mut queue = Queue::new();

    queue.insert_tail("banana");
    queue.insert_tail("apple");
    queue.insert_head("cherry");

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.front(), Some("cherry"));
    assert_eq!(queue.back(), Some("apple"));

    queue.sort();
    let sorted: Vec<_> = queue.iter().collect();
    assert_eq!(sorted, ["apple", "banana", "cherry"]);

    queue.reverse();
    assert_eq!(queue.front(), Some("cherry"));
    assert_eq!(queue.back(), Some("apple"));

    assert_eq!(queue.remove_head().as_deref(), Ok("cherry"));
    assert_eq!(queue.remove_head().as_deref(), Ok("banana"));
    assert_eq!(queue.remove_head().as_deref(), Ok("apple"));
    assert_eq!(queue.remove_head(), Err(Error::Empty));
    assert!(queue.is_empty());
}

#[test]
fn serde_round_trip() {
    let queue: Queue = ["fig", "", "date", "fig"].iter().copied().collect();

    let buf = bincode::serialize(&queue).unwrap();
    let decoded: Queue = bincode::deserialize(&buf).unwrap();

    assert_eq!(decoded, queue);
}

#[test]
fn workload() {
    let mut queue = Queue::new();

    for round in 0..10 {
        for i in 0..20u32 {
            let value = format!("{:04}", (i * 13 + round) % 97);
            if i % 3 == 0 {
                queue.insert_head(&value);
            } else {
                queue.insert_tail(&value);
            }
        }

        for _ in 0..15 {
            queue.remove_head().unwrap();
        }
    }

    // 10 rounds of 20 pushes and 15 pops.
    assert_eq!(queue.len(), 50);

    queue.sort();

    let values: Vec<_> = queue.iter().collect();
    assert_eq!(values.len(), 50);
    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}
