#[cfg(test)]
mod tests {
    use binary_relations::{ManyToMany, OneToMany, OneToOne};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    // Random operation mixes over small key ranges, so that transfers,
    // evictions, and bucket removals all fire often. After every operation the
    // two indexes must still describe the same pair set.

    fn check_one_to_many(map: &OneToMany<u64, u64>) {
        let mut total = 0;
        for left in map.iter_left() {
            let rights = map.get_right(left);
            assert!(!rights.is_empty());
            assert!(rights.windows(2).all(|w| w[0] < w[1]));
            for right in rights {
                assert_eq!(map.get_left(right), Some(left));
            }
            total += rights.len();
        }
        assert_eq!(map.len(), total);
        assert_eq!(map.len(), map.len_right());
        assert_eq!(map.len(), map.iter().count());
        for right in map.iter_right() {
            let left = map.get_left(right).unwrap();
            assert!(map.contains(left, right));
        }
    }

    fn check_many_to_many(map: &ManyToMany<u64, u64>) {
        let mut left_total = 0;
        for left in map.iter_left() {
            let rights = map.get_right(left);
            assert!(!rights.is_empty());
            assert!(rights.windows(2).all(|w| w[0] < w[1]));
            for right in rights {
                assert!(map.get_left(right).contains(left));
            }
            left_total += rights.len();
        }
        let mut right_total = 0;
        for right in map.iter_right() {
            let lefts = map.get_left(right);
            assert!(!lefts.is_empty());
            assert!(lefts.windows(2).all(|w| w[0] < w[1]));
            for left in lefts {
                assert!(map.get_right(left).contains(right));
            }
            right_total += lefts.len();
        }
        assert_eq!(map.len(), left_total);
        assert_eq!(map.len(), right_total);
        assert_eq!(map.len(), map.iter().count());
    }

    fn check_one_to_one(map: &OneToOne<u64, u64>) {
        assert_eq!(map.len_left(), map.len_right());
        for (left, right) in map.iter() {
            assert_eq!(map.get_left(right), Some(left));
            assert_eq!(map.get_right(left), Some(right));
        }
    }

    #[test]
    fn one_to_many_random_ops_test() {
        let mut rng = StdRng::seed_from_u64(0x1c0ffee);
        let mut map: OneToMany<u64, u64> = OneToMany::new();
        for _ in 0..2_000 {
            let left = rng.gen_range(0..8);
            let right = rng.gen_range(0..32);
            match rng.gen_range(0..6) {
                0..=2 => {
                    map.insert(left, right);
                }
                3 => {
                    map.erase(&left, &right);
                }
                4 => {
                    map.erase_left(&left);
                }
                _ => {
                    map.erase_right(&right);
                }
            }
            check_one_to_many(&map);
        }
    }

    #[test]
    fn one_to_many_bulk_equivalence_test() {
        let mut rng = StdRng::seed_from_u64(0xfeed);
        for _ in 0..50 {
            let inserts: Vec<(u64, u64)> = (0..rng.gen_range(0..60))
                .map(|_| (rng.gen_range(0..6), rng.gen_range(0..20)))
                .collect();
            let erases: Vec<(u64, u64)> = (0..rng.gen_range(0..30))
                .map(|_| (rng.gen_range(0..6), rng.gen_range(0..20)))
                .collect();

            let mut sequential: OneToMany<u64, u64> = OneToMany::new();
            for &(l, r) in &inserts {
                sequential.insert(l, r);
            }
            for (l, r) in &erases {
                sequential.erase(l, r);
            }

            let mut bulk: OneToMany<u64, u64> = OneToMany::new();
            bulk.insert_many(inserts);
            bulk.erase_many(erases);

            check_one_to_many(&bulk);
            assert_eq!(bulk, sequential);
        }
    }

    #[test]
    fn many_to_many_random_ops_test() {
        let mut rng = StdRng::seed_from_u64(0xdeadbeef);
        let mut map: ManyToMany<u64, u64> = ManyToMany::new();
        for _ in 0..2_000 {
            let left = rng.gen_range(0..8);
            let right = rng.gen_range(0..8);
            match rng.gen_range(0..6) {
                0..=2 => {
                    map.insert(left, right);
                }
                3 => {
                    map.erase(&left, &right);
                }
                4 => {
                    map.erase_left(&left);
                }
                _ => {
                    map.erase_right(&right);
                }
            }
            check_many_to_many(&map);
        }
    }

    #[test]
    fn many_to_many_bulk_equivalence_test() {
        let mut rng = StdRng::seed_from_u64(0xabcdef);
        for _ in 0..50 {
            let inserts: Vec<(u64, u64)> = (0..rng.gen_range(0..60))
                .map(|_| (rng.gen_range(0..6), rng.gen_range(0..6)))
                .collect();
            let erases: Vec<(u64, u64)> = (0..rng.gen_range(0..30))
                .map(|_| (rng.gen_range(0..6), rng.gen_range(0..6)))
                .collect();

            let mut sequential: ManyToMany<u64, u64> = ManyToMany::new();
            for &(l, r) in &inserts {
                sequential.insert(l, r);
            }
            for (l, r) in &erases {
                sequential.erase(l, r);
            }

            let mut bulk: ManyToMany<u64, u64> = ManyToMany::new();
            bulk.insert_many(inserts);
            bulk.erase_many(erases);

            check_many_to_many(&bulk);
            assert_eq!(bulk, sequential);
        }
    }

    #[test]
    fn one_to_one_random_ops_test() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut map: OneToOne<u64, u64> = OneToOne::new();
        for _ in 0..2_000 {
            let left = rng.gen_range(0..12);
            let right = rng.gen_range(0..12);
            match rng.gen_range(0..6) {
                0..=2 => {
                    map.insert(left, right);
                }
                3 => {
                    map.erase(&left, &right);
                }
                4 => {
                    map.erase_left(&left);
                }
                _ => {
                    map.erase_right(&right);
                }
            }
            check_one_to_one(&map);
        }
    }
}
