extern crate balanced_collections;
extern crate rand;

use self::rand::{thread_rng, Rng};
use balanced_collections::red_black_tree::RedBlackSet;
use std::vec::Vec;

#[test]
fn int_test_red_black_set() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = RedBlackSet::new();
    let mut expected = Vec::new();

    for _ in 0..10_000 {
        let key = rng.gen::<u32>();

        if set.insert(key) {
            expected.push(key);
        }
    }

    for key in &expected {
        assert!(set.contains(key));
    }

    // the height of a red black tree with n keys is at most 2 log2(n + 1)
    assert!(set.height() <= 28);

    thread_rng().shuffle(&mut expected);

    for key in &expected {
        assert!(set.remove(key));
        assert!(!set.contains(key));
    }

    assert_eq!(set.height(), 0);
}

#[test]
fn int_test_red_black_set_interleaved() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = RedBlackSet::new();
    let mut expected: Vec<u32> = Vec::new();

    for _ in 0..2000 {
        let key = rng.gen::<u32>() % 200;

        if rng.gen::<bool>() {
            assert_eq!(set.insert(key), !expected.contains(&key));
            if !expected.contains(&key) {
                expected.push(key);
            }
        } else {
            assert_eq!(set.remove(&key), expected.contains(&key));
            expected.retain(|k| *k != key);
        }

        for key in &expected {
            assert!(set.contains(key));
        }
    }
}
