#[cfg(test)]
mod tests {
    use binary_relations::OneToMany;

    fn construct_fruit_map() -> OneToMany<u64, &'static str> {
        let mut map = OneToMany::new();
        map.insert(1, "apple");
        map.insert(1, "banana");
        map.insert(2, "cherry");
        map.insert(3, "date");
        map
    }

    #[test]
    fn construction_test() {
        let map: OneToMany<u64, String> = OneToMany::new();
        assert_eq!(map.len(), 0);
        assert_eq!(map.len_left(), 0);
        assert_eq!(map.len_right(), 0);
        assert!(map.is_empty());

        let map: OneToMany<u64, String> = OneToMany::with_capacity(100);
        assert!(map.capacity_left() >= 100);
        assert!(map.capacity_right() >= 100);
    }

    #[test]
    fn insert_test() {
        let mut map = construct_fruit_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map.len_left(), 3);
        assert_eq!(map.len_right(), 4);
        assert_eq!(map.get_right(&1), &["apple", "banana"]);
        assert_eq!(map.get_left(&"cherry"), Some(&2));

        // A right value already bound elsewhere is transferred
        assert_eq!(map.insert(3, "cherry"), Some(2));
        assert_eq!(map.get_left(&"cherry"), Some(&3));
        assert!(!map.contains(&2, &"cherry"));
        assert_eq!(map.len(), 4);
        // 2 lost its last right value and is gone entirely
        assert!(!map.contains_left(&2));
        assert_eq!(map.len_left(), 2);

        // Re-inserting an existing pair changes nothing
        assert_eq!(map.insert(1, "apple"), None);
        assert_eq!(map.len(), 4);
        assert_eq!(map.get_right(&1), &["apple", "banana"]);
    }

    #[test]
    fn erase_test() {
        let mut map = construct_fruit_map();

        assert_eq!(map.erase(&1, &"apple"), Some((1, "apple")));
        assert!(!map.contains(&1, &"apple"));
        assert!(map.contains(&1, &"banana"));
        assert_eq!(map.len(), 3);

        // Double erase is a no-op
        assert_eq!(map.erase(&1, &"apple"), None);
        assert_eq!(map.len(), 3);

        // A mismatched pair is not erased
        assert_eq!(map.erase(&1, &"cherry"), None);
        assert!(map.contains(&2, &"cherry"));

        // Removing the last right value removes the left value too
        map.erase(&1, &"banana");
        assert!(!map.contains_left(&1));
        assert_eq!(map.get_right(&1), &[] as &[&str]);
    }

    #[test]
    fn erase_left_and_right_test() {
        let mut map = construct_fruit_map();

        assert_eq!(map.erase_left(&1), Some(vec!["apple", "banana"]));
        assert_eq!(map.len(), 2);
        assert!(!map.contains_right(&"apple"));
        assert!(!map.contains_right(&"banana"));
        assert_eq!(map.erase_left(&1), None);

        assert_eq!(map.erase_right(&"cherry"), Some(2));
        assert!(!map.contains_left(&2));
        assert_eq!(map.erase_right(&"cherry"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn bulk_insert_matches_sequential_test() {
        let pairs = vec![
            (1, "apple"),
            (2, "banana"),
            (1, "cherry"),
            (3, "banana"),
            (2, "date"),
            (1, "apple"),
        ];

        let mut sequential: OneToMany<u64, &str> = OneToMany::new();
        for &(l, r) in &pairs {
            sequential.insert(l, r);
        }

        let mut bulk: OneToMany<u64, &str> = OneToMany::new();
        bulk.insert_many(pairs);

        // "banana" conflicts within the batch; the later pair wins, same as
        // inserting one at a time
        assert_eq!(bulk.get_left(&"banana"), Some(&3));
        assert_eq!(bulk, sequential);
    }

    #[test]
    fn bulk_insert_transfers_test() {
        let mut map = construct_fruit_map();
        map.insert_many(vec![(5, "apple"), (5, "cherry"), (5, "elderberry")]);

        assert_eq!(map.get_right(&5), &["apple", "cherry", "elderberry"]);
        assert!(!map.contains(&1, &"apple"));
        assert!(!map.contains_left(&2));
        assert_eq!(map.get_right(&1), &["banana"]);
        assert_eq!(map.len(), 5);
    }

    #[test]
    fn erase_many_test() {
        let mut map = construct_fruit_map();
        map.erase_many(vec![
            (1, "apple"),
            (1, "banana"),
            // Mismatched and absent pairs are ignored
            (2, "date"),
            (9, "fig"),
        ]);

        assert!(!map.contains_left(&1));
        assert!(map.contains(&2, &"cherry"));
        assert!(map.contains(&3, &"date"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn erase_all_test() {
        let mut map = construct_fruit_map();
        let other: OneToMany<u64, &str> = [(1, "apple"), (2, "cherry")].into_iter().collect();
        map.erase_all(&other);

        assert_eq!(map.len(), 2);
        assert!(map.contains(&1, &"banana"));
        assert!(map.contains(&3, &"date"));
    }

    #[test]
    fn iter_test() {
        let map = construct_fruit_map();
        let mut pairs: Vec<(u64, &str)> = map.iter().map(|(l, r)| (*l, *r)).collect();
        assert_eq!(map.iter().len(), 4);
        pairs.sort_unstable();
        assert_eq!(
            pairs,
            vec![(1, "apple"), (1, "banana"), (2, "cherry"), (3, "date")]
        );

        assert_eq!(map.iter_left().len(), 3);
        assert_eq!(map.iter_right().len(), 4);

        // Right values of one left value come out in ascending order
        assert_eq!(map.get_right(&1), &["apple", "banana"]);
    }

    #[test]
    fn eq_test() {
        let map = construct_fruit_map();
        let mut other = construct_fruit_map();
        assert_eq!(map, other);

        other.insert(3, "cherry");
        assert_ne!(map, other);
    }

    #[test]
    fn clear_test() {
        let mut map = construct_fruit_map();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.len_left(), 0);
        assert_eq!(map.len_right(), 0);
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn fmt_test() {
        let mut map: OneToMany<u64, u64> = OneToMany::new();
        map.insert(1, 10);
        assert_eq!(format!("{map:?}"), "{(1, 10)}");
    }
}
