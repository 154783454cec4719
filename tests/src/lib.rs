#[cfg(test)]
mod tests {
    use mary_heap::{ByKey, Greater, Heap, Less, Priority};
    use rand::seq::SliceRandom;
    use rand::{thread_rng, Rng};
    use rand_distr::Uniform;
    use test_log::test;

    type K = i64;

    // Every mutation re-validates the whole heap under the `debug` feature,
    // so workloads stay small.
    const NUM: usize = 2_000;

    fn random_keys(num: usize, low: K, high: K) -> Vec<K> {
        thread_rng()
            .sample_iter(Uniform::new(low, high))
            .take(num)
            .collect()
    }

    /// Pushes random keys, then pops them one at a time, comparing every
    /// `top` against a sorted reference.
    fn test_heap_sort<C>(arity: usize, priority: C, sort: fn(&mut Vec<K>)) -> anyhow::Result<()>
    where
        C: Priority<K> + Clone,
    {
        // Narrow range to force duplicates
        for (low, high) in [(K::MIN, K::MAX), (0, 64)] {
            let keys = random_keys(NUM, low, high);
            let mut heap = Heap::try_with_priority(arity, priority.clone())?;

            for (i, &key) in keys.iter().enumerate() {
                heap.push(key);
                assert_eq!(heap.len(), i + 1);
            }

            let mut expected = keys.clone();
            sort(&mut expected);

            for (i, &key) in expected.iter().enumerate() {
                assert_eq!(heap.top()?, &key);
                heap.pop()?;
                assert_eq!(heap.len(), NUM - i - 1);
            }

            assert!(heap.is_empty());
            assert!(heap.top().unwrap_err().is_underflow());
            assert!(heap.pop().unwrap_err().is_underflow());
        }

        Ok(())
    }

    /// Random interleaving of pushes and pops checked against a sorted `Vec`.
    fn test_interleaved(arity: usize) -> anyhow::Result<()> {
        let mut rng = thread_rng();
        let key_dist = Uniform::new(-1_000, 1_000);

        let mut heap: Heap<K> = Heap::with_arity(arity);
        let mut model: Vec<K> = Vec::new();

        for _ in 0..NUM {
            if model.is_empty() || rng.gen_bool(0.6) {
                let key = rng.sample(key_dist);
                heap.push(key);

                let index = model.partition_point(|&x| x < key);
                model.insert(index, key);
            } else {
                assert_eq!(heap.pop()?, model.remove(0));
            }

            assert_eq!(heap.len(), model.len());
            assert_eq!(heap.is_empty(), model.is_empty());
            assert_eq!(heap.peek(), model.first());
        }

        Ok(())
    }

    /// The popped sequence does not depend on the push order.
    fn test_push_order_independent(arity: usize) {
        let mut rng = thread_rng();
        let mut keys = random_keys(NUM, -500, 500);

        let mut sorted = keys.clone();
        sorted.sort();

        for _ in 0..4 {
            keys.shuffle(&mut rng);

            let pushed: Heap<K> = {
                let mut heap = Heap::with_arity(arity);
                heap.extend(keys.iter().copied());
                heap
            };
            let built = Heap::from_vec(arity, Less, keys.clone());

            assert!(built.is_valid());
            assert_eq!(pushed.into_sorted_vec(), sorted);
            assert_eq!(built.into_sorted_vec(), sorted);
        }
    }

    macro_rules! test_arity {
        ($fname: ident, $arity: expr) => {
            mod $fname {
                use super::*;
                use test_log::test;

                #[test]
                fn min_heap_sort() -> anyhow::Result<()> {
                    test_heap_sort($arity, Less, |keys| keys.sort())
                }

                #[test]
                fn max_heap_sort() -> anyhow::Result<()> {
                    test_heap_sort($arity, Greater, |keys| keys.sort_by(|a, b| b.cmp(a)))
                }

                #[test]
                fn closure_heap_sort() -> anyhow::Result<()> {
                    // Even keys before odd keys, ascending within each group
                    let parity = |a: &K, b: &K| (a.rem_euclid(2), a) < (b.rem_euclid(2), b);
                    test_heap_sort($arity, parity, |keys| {
                        keys.sort_by_key(|&key| (key.rem_euclid(2), key))
                    })
                }

                #[test]
                fn interleaved() -> anyhow::Result<()> {
                    test_interleaved($arity)
                }

                #[test]
                fn push_order_independent() {
                    test_push_order_independent($arity);
                }
            }
        };
    }

    test_arity!(arity_2, 2);
    test_arity!(arity_3, 3);
    test_arity!(arity_4, 4);
    test_arity!(arity_7, 7);
    test_arity!(arity_16, 16);

    #[test]
    fn ternary_min_heap_example() -> anyhow::Result<()> {
        let mut heap: Heap<i32> = Heap::with_arity(3);
        for item in [5, 1, 9, 3, 7, 2] {
            heap.push(item);
        }

        let mut popped = Vec::new();
        while !heap.is_empty() {
            popped.push(*heap.top()?);
            heap.pop()?;
        }

        assert_eq!(popped, vec![1, 2, 3, 5, 7, 9]);
        Ok(())
    }

    #[test]
    fn binary_max_heap_example() -> anyhow::Result<()> {
        let mut heap: Heap<i32, Greater> = Heap::new();
        for item in [5, 1, 9, 3, 7, 2] {
            heap.push(item);
        }

        let mut popped = Vec::new();
        while !heap.is_empty() {
            popped.push(heap.pop()?);
        }

        assert_eq!(popped, vec![9, 7, 5, 3, 2, 1]);
        Ok(())
    }

    #[test]
    fn fresh_heap_underflows() {
        let mut heap: Heap<String> = Heap::default();

        let err = heap.top().unwrap_err();
        assert!(err.is_underflow());
        assert_eq!(err.to_string(), "heap underflow: top called on an empty heap");

        let err = heap.pop().unwrap_err();
        assert!(err.is_underflow());

        // The error converts into a caller's error type
        let result: anyhow::Result<String> = heap.pop().map_err(Into::into);
        assert!(result.is_err());
    }

    #[test]
    fn task_queue_by_key() -> anyhow::Result<()> {
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Task {
            name: &'static str,
            deadline: u32,
        }

        let mut queue: Heap<Task, _> = Heap::with_priority(4, ByKey(|task: &Task| task.deadline));
        for (name, deadline) in [("write", 30), ("review", 10), ("deploy", 50), ("test", 20)] {
            queue.push(Task { name, deadline });
        }

        assert_eq!(queue.top()?.name, "review");

        let order: Vec<&str> = queue.drain_sorted().map(|task| task.name).collect();
        assert_eq!(order, vec!["review", "test", "write", "deploy"]);
        assert!(queue.is_empty());

        Ok(())
    }
}
