use std::cmp::Ordering;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;

use comparator_heap::{ordering, Builder, Drain, PriorityQueue, QueueError};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

#[derive(Debug, Clone, Default, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

impl Person {
    fn new(name: &str, age: u32) -> Person {
        Person {
            name: name.to_string(),
            age,
        }
    }
}

fn by_age(a: &Person, b: &Person) -> Ordering {
    a.age.cmp(&b.age)
}

/// Deliberately implements neither `PartialEq` nor `Ord`.
#[derive(Debug, Clone, Default)]
struct Ticket {
    id: u64,
    weight: i16,
}

fn ticket_queue() -> Builder<Ticket> {
    PriorityQueue::builder_by(|a: &Ticket, b: &Ticket| a.weight.cmp(&b.weight))
}

fn drain_by_poll<E: Default>(heap: &mut PriorityQueue<E>) -> Vec<E> {
    let mut out = Vec::with_capacity(heap.size());
    while !heap.is_empty() {
        out.push(heap.poll());
    }
    out
}

#[test]
fn test_poll_ascending() {
    let mut heap = PriorityQueue::new();
    heap.add(3);
    heap.add(2);
    heap.add(1);

    assert_eq!(heap.poll(), 1);
    assert_eq!(heap.poll(), 2);
    assert_eq!(heap.poll(), 3);
    assert!(heap.is_empty());
}

#[test]
fn test_peek_and_contains_by_age() {
    let mut heap = PriorityQueue::with_comparator(by_age);
    heap.add(Person::new("Alice", 28));
    heap.add(Person::new("Bob", 29));
    heap.add(Person::new("Carol", 25));

    assert_eq!(heap.peek(), Person::new("Carol", 25));
    assert_eq!(heap.size(), 3);

    let dave = Person::new("Dave", 25);
    assert!(!heap.contains(&dave));
    heap.add(dave.clone());
    assert!(heap.contains(&dave));
    assert_eq!(heap.size(), 4);
}

#[test]
fn test_try_remove_without_equality_on_empty() {
    let mut heap = ticket_queue().build();
    assert!(heap.is_empty());
    assert_eq!(
        heap.try_remove(&Ticket::default()),
        Err(QueueError::NoEquality)
    );
    assert_eq!(
        heap.try_contains(&Ticket::default()),
        Err(QueueError::NoEquality)
    );
}

#[test]
fn test_no_equality_error_message() {
    assert_eq!(
        QueueError::NoEquality.to_string(),
        "type is not equality-comparable and no equality function was configured"
    );
}

#[test]
fn test_offer_has_no_ceiling() {
    let mut heap = PriorityQueue::with_capacity(1);
    for i in (0..100_000).rev() {
        assert!(heap.offer(i));
    }
    assert_eq!(heap.size(), 100_000);
    assert_eq!(heap.peek(), 0);
}

#[test]
fn test_add_returns_true() {
    let mut heap = PriorityQueue::new();
    assert!(heap.add("b"));
    assert!(heap.add("a"));
    assert_eq!(heap.peek(), "a");
}

#[test]
fn test_empty_poll_and_peek_return_default() {
    let mut heap = PriorityQueue::<i32>::new();
    assert_eq!(heap.poll(), 0);
    assert_eq!(heap.peek(), 0);
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.head(), None);

    let mut people = PriorityQueue::with_comparator(by_age);
    assert_eq!(people.poll(), Person::default());
    assert_eq!(people.peek(), Person::default());
}

#[test]
fn test_zero_value_is_ambiguous() {
    let mut heap = PriorityQueue::new();
    heap.add(0u8);
    assert_eq!(heap.poll(), 0);
    assert_eq!(heap.poll(), 0);
    assert!(heap.is_empty());
}

#[test]
fn test_clear() {
    let mut heap = PriorityQueue::from(vec![5, 9, 3]);
    heap.clear();
    assert_eq!(heap.size(), 0);
    assert_eq!(heap.poll(), 0);
    assert_eq!(heap.peek(), 0);
    heap.clear();
    assert!(heap.is_empty());
    heap.add(4);
    assert_eq!(heap.peek(), 4);
}

#[test]
fn test_to_array_is_a_copy() {
    let mut heap = PriorityQueue::from(vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1]);
    let mut copy = heap.to_array();
    assert_eq!(copy.len(), heap.size());
    assert_eq!(copy, heap.iter().copied().collect::<Vec<_>>());

    for x in copy.iter_mut() {
        *x = -100;
    }
    copy.push(-1);

    assert_eq!(
        drain_by_poll(&mut heap),
        [0, 1, 1, 2, 2, 3, 4, 5, 6, 7, 8, 9, 10]
    );
}

#[test]
fn test_to_array_is_heap_order() {
    let mut heap = PriorityQueue::new();
    for x in [5, 4, 3, 2, 1] {
        heap.add(x);
    }
    let array = heap.to_array();
    assert_eq!(array[0], 1);
    for child in 1..array.len() {
        assert!(array[(child - 1) / 2] <= array[child]);
    }
}

#[test]
fn test_remove_native_equality() {
    let mut heap = PriorityQueue::from(vec![9, 11, 9, 9, 0, 0, 2, 3]);
    assert!(heap.remove(&9));
    assert!(heap.is_heap());
    assert_eq!(heap.size(), 7);
    assert!(heap.contains(&9));
    assert!(!heap.remove(&42));
    assert_eq!(heap.size(), 7);
    assert_eq!(heap.into_sorted_vec(), [0, 0, 2, 3, 9, 9, 11]);
}

#[test]
fn test_remove_person_uses_structural_equality() {
    let mut heap = PriorityQueue::with_comparator(by_age);
    heap.add(Person::new("Alice", 28));
    heap.add(Person::new("Carol", 25));

    assert!(!heap.remove(&Person::new("Carol", 28)));
    assert!(heap.remove(&Person::new("Carol", 25)));
    assert_eq!(heap.peek(), Person::new("Alice", 28));
}

#[test]
fn test_configured_equality() {
    let mut heap = ticket_queue()
        .equality(|a: &Ticket, b: &Ticket| a.id == b.id)
        .build();

    for (id, weight) in [(1, 40), (2, -3), (3, 12), (4, 7)] {
        heap.add(Ticket { id, weight });
    }

    let needle = Ticket { id: 3, weight: 0 };
    assert_eq!(heap.try_contains(&needle), Ok(true));
    assert_eq!(heap.try_remove(&needle), Ok(true));
    assert_eq!(heap.try_contains(&needle), Ok(false));
    assert_eq!(heap.try_remove(&needle), Ok(false));

    let weights: Vec<i16> = drain_by_poll(&mut heap).iter().map(|t| t.weight).collect();
    assert_eq!(weights, [-3, 7, 40]);
}

#[test]
fn test_comparator_is_the_configured_one() {
    let heap = PriorityQueue::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    let cmp = heap.comparator();
    assert_eq!(cmp(&1, &2), Ordering::Greater);

    let natural = PriorityQueue::<i32>::new();
    assert_eq!(natural.comparator()(&1, &2), Ordering::Less);
}

#[test]
fn test_shared_comparator_seeds_another_queue() {
    let mut first = PriorityQueue::with_comparator(ordering::lexicographic::<String>());
    first.add("pear".to_string());

    let mut second = Builder::shared(Arc::clone(first.comparator())).build();
    second.add("quince".to_string());
    second.add("apple".to_string());

    assert_eq!(second.poll(), "apple");
}

#[test]
fn test_float_ordering() {
    let mut heap = PriorityQueue::with_comparator(ordering::partial::<f64>());
    for x in [3.5, -0.5, 2.25, 1e9, -7.0] {
        heap.add(x);
    }
    assert_eq!(drain_by_poll(&mut heap), [-7.0, -0.5, 2.25, 3.5, 1e9]);
}

#[test]
fn test_max_queue() {
    let mut heap = PriorityQueue::with_comparator(ordering::reversed(ordering::natural::<u32>()));
    heap.extend([4, 8, 15, 16, 23, 42]);
    assert_eq!(heap.poll(), 42);
    assert_eq!(heap.poll(), 23);
}

#[test]
fn test_builder_equality_with_indifferent_order() {
    let mut heap = Builder::new(ordering::indifferent::<Ticket>())
        .equality(|a: &Ticket, b: &Ticket| a.id == b.id)
        .build();
    heap.add(Ticket { id: 7, weight: 1 });
    assert_eq!(heap.try_contains(&Ticket { id: 7, weight: 0 }), Ok(true));
    assert_eq!(heap.size(), 1);
}

#[test]
fn test_builder_capacity_keeps_natural_order() {
    let mut ints = PriorityQueue::<i32>::builder().capacity(4).build();
    for x in [3, 2, 1] {
        ints.add(x);
    }
    assert_eq!(drain_by_poll(&mut ints), [1, 2, 3]);

    let mut words = PriorityQueue::<String>::builder().build();
    for w in ["pear", "apple", "fig"] {
        words.add(w.to_string());
    }
    assert_eq!(drain_by_poll(&mut words), ["apple", "fig", "pear"]);

    let mut floats = Builder::<f64>::partial().capacity(4).build();
    for x in [3.0, 2.0, 1.0] {
        floats.add(x);
    }
    assert_eq!(drain_by_poll(&mut floats), [1.0, 2.0, 3.0]);
}

#[test]
fn test_iterator() {
    let data = vec![5, 9, 3];
    let heap = PriorityQueue::from(data);
    let mut seen: Vec<_> = (&heap).into_iter().copied().collect();
    assert_eq!(seen[0], 3);
    seen.sort();
    assert_eq!(seen, [3, 5, 9]);
}

#[test]
fn test_into_iter_sorted_collect() {
    let heap = PriorityQueue::from(vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1]);
    let sorted = heap.into_iter_sorted().collect::<Vec<_>>();
    assert_eq!(sorted, vec![0, 1, 1, 2, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn test_drain_sorted_collect() {
    let mut heap = PriorityQueue::from(vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1]);
    let sorted = heap.drain_sorted().collect::<Vec<_>>();
    assert_eq!(sorted, vec![0, 1, 1, 2, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert!(heap.is_empty());
}

#[test]
fn test_drain() {
    let mut heap: PriorityQueue<_> = [9, 8, 7, 6, 5, 4, 3, 2, 1].iter().cloned().collect();
    assert_eq!(heap.drain().take(5).count(), 5);
    assert!(heap.is_empty());
}

#[test]
fn test_into_vec() {
    let heap = PriorityQueue::from(vec![3, 1, 2]);
    let mut v: Vec<i32> = heap.clone().into_vec();
    v.sort();
    assert_eq!(v, [1, 2, 3]);

    let mut w: Vec<i32> = heap.into();
    w.sort();
    assert_eq!(w, [1, 2, 3]);
}

fn check_exact_size_iterator<I: ExactSizeIterator>(len: usize, it: I) {
    let mut it = it;

    for i in 0..it.len() {
        let (lower, upper) = it.size_hint();
        assert_eq!(Some(lower), upper);
        assert_eq!(lower, len - i);
        assert_eq!(it.len(), len - i);
        it.next();
    }
    assert_eq!(it.len(), 0);
}

#[test]
fn test_exact_size_iterator() {
    let heap = PriorityQueue::from(vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1]);
    check_exact_size_iterator(heap.len(), heap.iter());
    check_exact_size_iterator(heap.len(), heap.clone().into_iter());
    check_exact_size_iterator(heap.len(), heap.clone().into_iter_sorted());
    check_exact_size_iterator(heap.len(), heap.clone().drain());
    check_exact_size_iterator(heap.len(), heap.clone().drain_sorted());
}

fn check_to_vec(mut data: Vec<i32>) {
    let heap = PriorityQueue::from(data.clone());
    let mut v = heap.clone().into_vec();
    v.sort();
    data.sort();

    assert_eq!(v, data);
    assert_eq!(heap.into_sorted_vec(), data);
}

#[test]
fn test_to_vec() {
    check_to_vec(vec![]);
    check_to_vec(vec![5]);
    check_to_vec(vec![3, 2]);
    check_to_vec(vec![2, 3]);
    check_to_vec(vec![5, 1, 2]);
    check_to_vec(vec![1, 100, 2, 3]);
    check_to_vec(vec![1, 3, 5, 7, 9, 2, 4, 6, 8, 0]);
    check_to_vec(vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1]);
    check_to_vec(vec![9, 11, 9, 9, 9, 9, 11, 2, 3, 4, 11, 9, 0, 0, 0, 0]);
    check_to_vec(vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    check_to_vec(vec![5, 4, 3, 2, 1, 5, 4, 3, 2, 1, 5, 4, 3, 2, 1]);
}

#[test]
fn test_drain_sorted_drops_the_rest() {
    static DROPS: AtomicUsize = AtomicUsize::new(0);

    struct D(u32);

    impl Drop for D {
        fn drop(&mut self) {
            DROPS.fetch_add(1, AtomicOrdering::SeqCst);
        }
    }

    let mut heap = PriorityQueue::with_comparator(|a: &D, b: &D| a.0.cmp(&b.0));
    for i in 0..6 {
        heap.add(D(i));
    }

    let first = heap.drain_sorted().next().map(|d| d.0);
    assert_eq!(first, Some(0));
    assert_eq!(DROPS.load(AtomicOrdering::SeqCst), 6);
    assert!(heap.is_empty());
}

#[test]
fn test_panicking_comparator_keeps_elements() {
    static ARMED: AtomicBool = AtomicBool::new(false);

    let mut heap = PriorityQueue::with_comparator(|a: &i32, b: &i32| {
        if ARMED.load(AtomicOrdering::SeqCst) {
            panic!("comparator failure");
        }
        a.cmp(b)
    });
    for i in (0..10).rev() {
        heap.add(i);
    }

    ARMED.store(true, AtomicOrdering::SeqCst);
    let result = catch_unwind(AssertUnwindSafe(|| heap.add(-1)));
    assert!(result.is_err());
    ARMED.store(false, AtomicOrdering::SeqCst);

    assert_eq!(heap.size(), 11);
    let mut all = heap.to_array();
    all.sort();
    assert_eq!(all, [-1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_random_operations_keep_invariants() {
    let mut rng = XorShiftRng::seed_from_u64(0x5eed);
    let mut heap = PriorityQueue::new();
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..5_000 {
        match rng.gen_range(0, 10) {
            0..=4 => {
                let x = rng.gen_range(-500, 500);
                if rng.gen() {
                    assert!(heap.add(x));
                } else {
                    assert!(heap.offer(x));
                }
                model.push(x);
            }
            5..=7 => {
                let polled = heap.pop();
                let expected = model.iter().copied().min();
                assert_eq!(polled, expected);
                if let Some(x) = expected {
                    let pos = model.iter().position(|&y| y == x).unwrap();
                    model.swap_remove(pos);
                }
            }
            _ => {
                let x = rng.gen_range(-500, 500);
                let expected = model.iter().position(|&y| y == x);
                assert_eq!(heap.contains(&x), expected.is_some());
                assert_eq!(heap.remove(&x), expected.is_some());
                if let Some(pos) = expected {
                    model.swap_remove(pos);
                }
            }
        }

        assert!(heap.is_heap());
        assert_eq!(heap.size(), model.len());
        assert_eq!(heap.head().copied(), model.iter().copied().min());
    }

    model.sort();
    assert_eq!(drain_by_poll(&mut heap), model);
}

#[test]
fn test_random_custom_comparator_sorted_extraction() {
    let mut rng = XorShiftRng::seed_from_u64(7);
    let cmp = |a: &(u8, u32), b: &(u8, u32)| b.0.cmp(&a.0);
    let mut heap = PriorityQueue::with_comparator(cmp);

    for i in 0..2_000 {
        heap.add((rng.gen::<u8>(), i));
    }
    let out = drain_by_poll(&mut heap);
    assert_eq!(out.len(), 2_000);
    for pair in out.windows(2) {
        assert_ne!(cmp(&pair[0], &pair[1]), Ordering::Greater);
    }
}

#[test]
fn test_random_equality_removal() {
    let mut rng = XorShiftRng::seed_from_u64(99);
    let mut heap = ticket_queue()
        .capacity(256)
        .equality(|a: &Ticket, b: &Ticket| a.id == b.id)
        .build();

    for id in 0..256 {
        heap.add(Ticket {
            id,
            weight: rng.gen_range(-1000, 1000),
        });
    }
    for id in (0..256).step_by(3) {
        assert_eq!(heap.try_remove(&Ticket { id, weight: 0 }), Ok(true));
        assert!(heap.is_heap());
    }

    let remaining = drain_by_poll(&mut heap);
    assert_eq!(remaining.len(), 256 - 86);
    assert!(remaining.iter().all(|t| t.id % 3 != 0));
    for pair in remaining.windows(2) {
        assert!(pair[0].weight <= pair[1].weight);
    }
}

#[test]
fn test_send_across_threads() {
    let mut heap = PriorityQueue::with_comparator(ordering::by_key(|s: &String| s.len()));
    heap.add("three".to_string());
    heap.add("one".to_string());

    let handle = std::thread::spawn(move || heap.poll());
    assert_eq!(handle.join().unwrap(), "one");
}

#[test]
fn test_extend_order() {
    let mut a = PriorityQueue::new();
    a.add(1);
    a.add(2);
    a.extend([3, 4, 5]);
    assert_eq!(a.len(), 5);
    assert_eq!(a.into_sorted_vec(), [1, 2, 3, 4, 5]);

    let mut b = PriorityQueue::from(vec![-10, 1, 2, 3, 3]);
    b.extend(PriorityQueue::from(vec![-20, 5, 43]));
    assert_eq!(b.into_sorted_vec(), [-20, -10, 1, 2, 3, 3, 5, 43]);
}

#[test]
fn test_retain() {
    let mut a = PriorityQueue::from(vec![100, 10, 50, 1, 2, 20, 30]);
    a.retain(|&x| x != 2);
    assert!(a.is_heap());
    assert_eq!(a.len(), 6);

    a.retain(|&x| x < 50);
    assert_eq!(a.clone().into_sorted_vec(), [1, 10, 20, 30]);

    a.retain(|_| false);
    assert!(a.is_empty());
}

#[allow(dead_code)]
fn assert_covariance() {
    fn drain<'new>(d: Drain<'static, &'static str>) -> Drain<'new, &'new str> {
        d
    }
}
