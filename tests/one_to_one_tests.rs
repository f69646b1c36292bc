#[cfg(test)]
mod tests {
    use binary_relations::{OneToOne, OptionalPair};

    fn construct_seat_map() -> OneToOne<u64, &'static str> {
        let mut map = OneToOne::new();
        map.insert(1, "front");
        map.insert(2, "middle");
        map.insert(3, "back");
        map
    }

    #[test]
    fn construction_test() {
        let map: OneToOne<u64, String> = OneToOne::new();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());

        let map: OneToOne<u64, String> = OneToOne::with_capacity(100);
        assert!(map.capacity_left() >= 100);
        assert!(map.capacity_right() >= 100);
    }

    #[test]
    fn insert_test() {
        let mut map = construct_seat_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map.len_left(), 3);
        assert_eq!(map.len_right(), 3);
        assert_eq!(map.get_right(&1), Some(&"front"));
        assert_eq!(map.get_left(&"back"), Some(&3));
    }

    #[test]
    fn insert_eviction_test() {
        let mut map = construct_seat_map();

        // Re-inserting an existing pair changes nothing
        assert_eq!(map.insert(1, "front"), OptionalPair::Neither);
        assert_eq!(map.len(), 3);

        // A new right value for 1 releases "front"
        assert_eq!(map.insert(1, "window"), OptionalPair::SomeLeft((1, "front")));
        assert!(!map.contains_right(&"front"));
        assert_eq!(map.get_right(&1), Some(&"window"));
        assert_eq!(map.len(), 3);

        // A new left value for "back" releases 3
        assert_eq!(map.insert(4, "back"), OptionalPair::SomeRight((3, "back")));
        assert!(!map.contains_left(&3));
        assert_eq!(map.len(), 3);

        // A pair that collides on both sides evicts two pairings
        assert_eq!(
            map.insert(2, "window"),
            OptionalPair::SomeBoth((2, "middle"), (1, "window"))
        );
        assert_eq!(map.get_right(&2), Some(&"window"));
        assert!(!map.contains_left(&1));
        assert!(!map.contains_right(&"middle"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn erase_test() {
        let mut map = construct_seat_map();

        assert_eq!(map.erase(&1, &"front"), Some((1, "front")));
        assert!(!map.contains_left(&1));
        assert!(!map.contains_right(&"front"));
        assert_eq!(map.len(), 2);

        assert_eq!(map.erase(&1, &"front"), None);

        // A mismatched pair is not erased
        assert_eq!(map.erase(&2, &"back"), None);
        assert!(map.contains(&2, &"middle"));
        assert!(map.contains(&3, &"back"));
    }

    #[test]
    fn erase_left_and_right_test() {
        let mut map = construct_seat_map();

        assert_eq!(map.erase_left(&1), Some("front"));
        assert!(!map.contains_right(&"front"));
        assert_eq!(map.erase_left(&1), None);

        assert_eq!(map.erase_right(&"middle"), Some(2));
        assert!(!map.contains_left(&2));
        assert_eq!(map.erase_right(&"middle"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn bulk_test() {
        let mut map: OneToOne<u64, &str> = OneToOne::new();
        // Later pairs win conflicts with earlier ones
        map.insert_many(vec![(1, "front"), (2, "middle"), (1, "back"), (3, "back")]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get_right(&3), Some(&"back"));
        assert_eq!(map.get_right(&2), Some(&"middle"));
        assert!(!map.contains_left(&1));
        assert!(!map.contains_right(&"front"));

        map.erase_many(vec![(2, "middle"), (9, "nowhere")]);
        assert_eq!(map.len(), 1);
        assert!(map.contains(&3, &"back"));
    }

    #[test]
    fn erase_all_test() {
        let mut map = construct_seat_map();
        let other: OneToOne<u64, &str> = [(1, "front"), (3, "back")].into_iter().collect();
        map.erase_all(&other);

        assert_eq!(map.len(), 1);
        assert!(map.contains(&2, &"middle"));
    }

    #[test]
    fn iter_test() {
        let map = construct_seat_map();
        assert_eq!(map.iter().len(), 3);
        let mut pairs: Vec<(u64, &str)> = map.iter().map(|(l, r)| (*l, *r)).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(1, "front"), (2, "middle"), (3, "back")]);

        assert_eq!(map.iter_left().len(), 3);
        assert_eq!(map.iter_right().len(), 3);
    }

    #[test]
    fn eq_test() {
        let map = construct_seat_map();
        let mut other = construct_seat_map();
        assert_eq!(map, other);

        other.insert(1, "back");
        assert_ne!(map, other);
    }

    #[test]
    fn clear_test() {
        let mut map = construct_seat_map();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);
    }
}
