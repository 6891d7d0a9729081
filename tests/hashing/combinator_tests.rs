use crate::common;
use hashmix::{ByAddress, Combiner, MemberHash, hash3, hash4, hash7, process_seed};
use std::hash::{Hash, Hasher};

/// Hashes only its `id`, so values with different payloads share a code.
struct Keyed {
    id: u32,
    payload: &'static str,
}

impl Hash for Keyed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[test]
fn order_is_part_of_the_input() {
    common::init_test_logging();
    hashmix::test_phase!("order_is_part_of_the_input");
    let combiner = Combiner::new(0x5eed);
    let forward = combiner.hash3(1, 2, 3);
    let swapped = combiner.hash3(2, 1, 3);
    let forward_codes = combiner.combine_codes([1i32.member_hash(), 2i32.member_hash(), 3i32.member_hash()]);
    let swapped_codes = combiner.combine_codes([2i32.member_hash(), 1i32.member_hash(), 3i32.member_hash()]);
    hashmix::assert_with_log!(forward == forward_codes, "forward order", forward_codes, forward);
    hashmix::assert_with_log!(swapped == swapped_codes, "swapped order", swapped_codes, swapped);
    hashmix::test_complete!("order_is_part_of_the_input");
}

#[test]
fn identical_member_codes_give_identical_results() {
    common::init_test_logging();
    hashmix::test_phase!("identical_member_codes_give_identical_results");
    let a = Keyed { id: 7, payload: "left" };
    let b = Keyed { id: 7, payload: "right" };
    assert_ne!(a.payload, b.payload);
    let combiner = Combiner::new(11);
    let left = combiner.hash3(&a, 2u8, "z");
    let right = combiner.hash3(&b, 2u8, "z");
    hashmix::assert_with_log!(left == right, "collision is inherited", left, right);

    let left = hash3(&a, 2u8, "z");
    let right = hash3(&b, 2u8, "z");
    hashmix::assert_with_log!(left == right, "same under process seed", left, right);
    hashmix::test_complete!("identical_member_codes_give_identical_results");
}

#[test]
fn seed_changes_combined_hash() {
    common::init_test_logging();
    hashmix::test_phase!("seed_changes_combined_hash");
    let base = Combiner::new(0).hash4("k", 1, 2, 3);
    let differing = (1u32..64)
        .filter(|seed| Combiner::new(*seed).hash4("k", 1, 2, 3) != base)
        .count();
    hashmix::assert_with_log!(differing == 63, "every sampled seed differs", 63, differing);
    hashmix::test_complete!("seed_changes_combined_hash");
}

#[test]
fn process_seed_is_shared_by_free_functions() {
    common::init_test_logging();
    hashmix::test_phase!("process_seed_is_shared_by_free_functions");
    let pinned = Combiner::new(process_seed());
    let free = hash7('a', 'b', 'c', 'd', 'e', 'f', 'g');
    let bound = pinned.hash7('a', 'b', 'c', 'd', 'e', 'f', 'g');
    hashmix::assert_with_log!(free == bound, "hash7 uses the process seed", bound, free);

    let from_thread = std::thread::spawn(|| hash4(1, 2, 3, 4)).join().unwrap();
    let here = hash4(1, 2, 3, 4);
    hashmix::assert_with_log!(from_thread == here, "seed shared across threads", here, from_thread);
    hashmix::test_complete!("process_seed_is_shared_by_free_functions");
}

#[test]
fn heterogeneous_members() {
    common::init_test_logging();
    hashmix::test_phase!("heterogeneous_members");
    let owned = vec![1u16, 2, 3];
    let combiner = Combiner::new(1);
    let first = combiner.hash7(
        "str",
        String::from("string"),
        &owned[..],
        Some(5u8),
        (1i64, -1i64),
        ByAddress(&owned),
        (),
    );
    let second = combiner.hash7(
        "str",
        String::from("string"),
        &owned[..],
        Some(5u8),
        (1i64, -1i64),
        ByAddress(&owned),
        (),
    );
    hashmix::assert_with_log!(first == second, "mixed member types", first, second);
    hashmix::test_complete!("heterogeneous_members");
}
