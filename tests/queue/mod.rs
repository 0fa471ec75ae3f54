
use std::collections::VecDeque;

use linked_queue::{Queue, QueueError};

use crate::util::random_values;

#[test]
fn test_empty_queue() {
    let queue: Queue<u64> = Queue::new();

    assert_eq!(queue.is_empty(), true);
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.head(), None);
    assert_eq!(queue.tail(), None);
    assert_eq!(queue.iter().next(), None);
}

#[test]
fn test_queue() {
    let mut queue = Queue::new();

    queue.enqueue(4);
    queue.enqueue(5);
    queue.enqueue(6);
    queue.enqueue(7);

    assert_eq!(queue.len(), 4);
    assert_eq!(queue.peek(), Ok(&4));
    assert_eq!(queue.head(), Some(&4));
    assert_eq!(queue.tail(), Some(&7));

    assert_eq!(queue.dequeue(), Ok(4));
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![5, 6, 7]);

    assert_eq!(queue.dequeue(), Ok(5));
    assert_eq!(queue.dequeue(), Ok(6));
    assert_eq!(queue.dequeue(), Ok(7));

    assert_eq!(queue.is_empty(), true);
    assert_eq!(queue.head(), None);
    assert_eq!(queue.tail(), None);
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_single_element_head_is_tail() {
    let mut queue = Queue::new();
    queue.enqueue(2);

    assert_eq!(queue.head(), Some(&2));
    assert_eq!(queue.tail(), Some(&2));

    assert_eq!(queue.dequeue(), Ok(2));
    assert_eq!(queue.head(), None);
    assert_eq!(queue.tail(), None);
    assert_eq!(queue.len(), 0);

    // reusable after becoming empty
    queue.enqueue(3);
    queue.enqueue(8);
    assert_eq!(queue.head(), Some(&3));
    assert_eq!(queue.tail(), Some(&8));
}

#[test]
fn test_interleaved_enqueue_dequeue() {
    let mut queue = Queue::new();
    let mut expected = VecDeque::new();

    for n in 0..12 {
        queue.enqueue(n);
        expected.push_back(n);

        if n % 3 != 0 {
            assert_eq!(queue.dequeue().ok(), expected.pop_front());
        }

        assert_eq!(queue.len(), expected.len());
        assert_eq!(queue.head(), expected.front());
        assert_eq!(queue.tail(), expected.back());
        assert_eq!(
            queue.iter().copied().collect::<Vec<_>>(),
            expected.iter().copied().collect::<Vec<_>>()
        );
    }

    // enqueue right after the head moved past the first of several nodes
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    assert_eq!(queue.dequeue(), Ok(1));
    queue.enqueue(3);

    assert_eq!(queue.tail(), Some(&3));
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn test_dequeue_empty() {
    let mut queue: Queue<u64> = Queue::new();

    assert!(matches!(queue.dequeue(), Err(QueueError::InvalidOperation(_))));
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_peek_empty() {
    let queue: Queue<u64> = Queue::new();

    assert!(matches!(queue.peek(), Err(QueueError::InvalidOperation(_))));
}

#[test]
fn test_peek_does_not_mutate() {
    let mut queue: Queue<_> = vec![2, 3].into_iter().collect();

    for _ in 0..3 {
        assert_eq!(queue.peek(), Ok(&2));
    }

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.head(), Some(&2));
    assert_eq!(queue.tail(), Some(&3));
    assert_eq!(queue.dequeue(), Ok(2));
}

#[test]
fn test_from_source() {
    for expected in [vec![1, 2, 3], vec![1, 2], vec![1], vec![]] {
        let queue = Queue::from_source(Some(expected.clone())).unwrap();

        assert_eq!(queue.len(), expected.len());
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn test_from_source_absent() {
    let result = Queue::<String>::from_source(None::<Vec<String>>);

    assert!(matches!(result, Err(QueueError::InvalidArgument(_))));
}

#[test]
fn test_contains() {
    let queue = Queue::from_source(Some([1, 2, 3])).unwrap();

    assert_eq!(queue.contains(&2), true);
    assert_eq!(queue.contains(&9), false);

    let empty: Queue<i32> = Queue::new();
    assert_eq!(empty.contains(&0), false);
}

#[test]
fn test_contains_random() {
    let values = random_values(200);
    let mut queue: Queue<_> = values.iter().copied().collect();

    for v in values.iter() {
        assert!(queue.contains(v));
    }

    // dequeued values are no longer contained unless they appear again later
    while let Ok(v) = queue.dequeue() {
        assert_eq!(queue.contains(&v), queue.iter().any(|x| *x == v));
    }
}

#[test]
fn test_clear() {
    let mut queue = Queue::from_source(Some(vec![13, 53, 6, 0])).unwrap();

    queue.clear();

    assert_eq!(queue.is_empty(), true);
    assert_eq!(queue.head(), None);
    assert_eq!(queue.tail(), None);
    assert_eq!(queue.len(), 0);

    queue.clear();
    assert_eq!(queue.len(), 0);

    queue.enqueue(1);
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_fifo_order_random() {
    for _ in 0..20 {
        let values = random_values(1_000);
        let mut queue = Queue::new();

        for v in values.iter() {
            queue.enqueue(*v);
        }

        assert_eq!(queue.len(), values.len());
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), values);

        for v in values {
            assert_eq!(queue.dequeue(), Ok(v));
        }

        assert_eq!(queue.is_empty(), true);
    }
}

#[test]
fn test_iteration_is_live() {
    fn short(queue: &Queue<&str>) -> usize {
        queue.iter().filter(|c| c.len() == 3).count()
    }

    let mut queue = Queue::from_source(Some(vec!["green", "brown", "blue", "red"])).unwrap();
    assert_eq!(short(&queue), 1);

    queue.dequeue().unwrap();
    queue.enqueue("tan");
    assert_eq!(short(&queue), 2);

    queue.clear();
    assert_eq!(short(&queue), 0);
}

#[test]
fn test_iter_exact_size() {
    let queue: Queue<_> = (0..10).collect();
    let mut iter = queue.iter();

    assert_eq!(iter.len(), 10);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 8);
    assert_eq!(iter.clone().count(), 8);

    let mut sum = 0;
    for v in &queue {
        sum += v;
    }
    assert_eq!(sum, 45);
}

#[test]
fn test_into_iter() {
    let queue: Queue<_> = vec![String::from("a"), String::from("b")].into_iter().collect();

    let drained: Vec<String> = queue.into_iter().collect();
    assert_eq!(drained, vec!["a", "b"]);
}

#[test]
fn test_extend() {
    let mut queue: Queue<_> = vec![1, 2].into_iter().collect();
    queue.extend(vec![3, 4]);

    assert_eq!(queue.len(), 4);
    assert_eq!(queue.tail(), Some(&4));
    assert_eq!(format!("{:?}", queue), "[1, 2, 3, 4]");
}

#[test]
fn test_deep_queue() {
    let mut queue = Queue::new();

    for n in 1..100_000 {
        queue.enqueue(n);
    }

    for n in 1..50_000 {
        assert_eq!(queue.dequeue(), Ok(n));
    }

    // remaining nodes are released without recursion
    queue.clear();
    assert_eq!(queue.is_empty(), true);

    for n in 1..100_000 {
        queue.enqueue(n);
    }
    drop(queue);
}
