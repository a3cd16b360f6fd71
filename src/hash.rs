//  Copyright 2023 MrCroxx
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//  http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.


//! Index derivation for counting tables.
//!
//! Every key is mapped to three slots by hashing three views of it: the key itself, the key
//! reversed, and the key interleaved with its reverse. All three views go through the same
//! [`string_hash`], so positions are stable across platforms and releases.

const MUL: i32 = 31;

/// Polynomial hash over the UTF-16 code units of `chars`.
///
/// h = 31 * h + unit, wrapping at 32 bits, starting from 0.
#[inline(always)]
pub(crate) fn string_hash<I>(chars: I) -> i32
where
    I: IntoIterator<Item = char>,
{
    let mut buf = [0u16; 2];
    chars.into_iter().fold(0i32, |hash, c| {
        c.encode_utf16(&mut buf)
            .iter()
            .fold(hash, |hash, &unit| hash.wrapping_mul(MUL).wrapping_add(unit as i32))
    })
}

pub(crate) fn reversed(s: &str) -> String {
    s.chars().rev().collect()
}

/// Even positions come from `s`, odd positions from `reversed(s)` at the same position.
pub(crate) fn interleaved(s: &str) -> String {
    let forward = s.chars().collect::<Vec<_>>();
    forward
        .iter()
        .zip(forward.iter().rev())
        .enumerate()
        .map(|(i, (&f, &r))| if i % 2 == 0 { f } else { r })
        .collect()
}

/// Absolute value modulo `size`. `i32::MIN` has no absolute value and maps to slot 0.
#[inline(always)]
pub(crate) fn reduce(hash: i32, size: usize) -> usize {
    debug_assert!(size > 0, "size: {size}");
    match hash.checked_abs() {
        Some(abs) => abs as usize % size,
        None => 0,
    }
}

pub(crate) fn first_index(s: &str, size: usize) -> usize {
    reduce(string_hash(s.chars()), size)
}

pub(crate) fn second_index(s: &str, size: usize) -> usize {
    reduce(string_hash(reversed(s).chars()), size)
}

pub(crate) fn third_index(s: &str, size: usize) -> usize {
    reduce(string_hash(interleaved(s).chars()), size)
}

#[inline(always)]
pub(crate) fn indices(s: &str, size: usize) -> [usize; 3] {
    [first_index(s, size), second_index(s, size), third_index(s, size)]
}

/// A zero in any slot means the key was never incremented.
#[inline(always)]
pub(crate) fn is_any_zero<T>(first: T, second: T, third: T) -> bool
where
    T: Default + PartialEq,
{
    let zero = T::default();
    first == zero || second == zero || third == zero
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_string_hash() {
        assert_eq!(string_hash("".chars()), 0);
        assert_eq!(string_hash("i".chars()), 105);
        assert_eq!(string_hash("test".chars()), 3556498);
        assert_eq!(string_hash("tset".chars()), 3569518);
        assert_eq!(string_hash("hello".chars()), 99162322);
        // wraps past i32::MAX
        assert_eq!(string_hash("hello world".chars()), 1794106052);
    }

    #[test]
    fn test_string_hash_surrogate_pair() {
        // U+1F600 is 0xD83D 0xDE00 in UTF-16.
        assert_eq!(string_hash("\u{1F600}".chars()), 0xD83D * 31 + 0xDE00);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(reversed("test"), "tset");
        assert_eq!(reversed(""), "");
        assert_eq!(reversed("i"), "i");
        assert_eq!(reversed("a\u{1F600}b"), "b\u{1F600}a");
    }

    #[test]
    fn test_interleaved() {
        assert_eq!(interleaved(""), "");
        assert_eq!(interleaved("i"), "i");
        assert_eq!(interleaved("id"), "ii");
        assert_eq!(interleaved("test"), "tsst");
        assert_eq!(interleaved("abcde"), "adcbe");
    }

    #[test]
    fn test_reduce() {
        assert_eq!(reduce(0, 3), 0);
        assert_eq!(reduce(7, 3), 1);
        assert_eq!(reduce(-7, 3), 1);
        assert_eq!(reduce(i32::MAX, 10), 7);
        assert_eq!(reduce(i32::MIN, 3), 0);
        assert_eq!(reduce(i32::MIN + 1, 10), 7);
    }

    #[test]
    fn test_first_index() {
        assert_eq!(first_index("test", 3), 1);
        assert_eq!(first_index("", 3), 0);
    }

    #[test]
    fn test_second_index() {
        assert_eq!(second_index("test", 3), 1);
        assert_eq!(second_index("", 3), 0);
    }

    #[test]
    fn test_third_index() {
        assert_eq!(third_index("test", 3), 0);
        assert_eq!(third_index("", 3), 0);
        assert_eq!(third_index("i", 3), 0);
        assert_eq!(third_index("id", 3), 0);
        assert_eq!(third_index("i", 3), first_index("i", 3));
    }

    #[test]
    fn test_single_slot_table() {
        assert_eq!(indices("anything", 1), [0, 0, 0]);
    }

    #[test]
    fn test_is_any_zero() {
        assert!(!is_any_zero(1u32, 1, 1));
        assert!(is_any_zero(0u32, 0, 0));
        assert!(is_any_zero(3u32, 0, 5));
        assert!(is_any_zero(3u8, 5, 0));
        assert!(!is_any_zero(u64::MAX, 1, 2));
    }

    proptest! {
        #[test]
        fn test_indices_in_range(s in any::<String>(), size in 1usize..4096) {
            for index in indices(&s, size) {
                prop_assert!(index < size);
            }
        }

        #[test]
        fn test_indices_deterministic(s in any::<String>(), size in 1usize..4096) {
            prop_assert_eq!(indices(&s, size), indices(&s, size));
        }

        #[test]
        fn test_second_index_matches_reversed_key(s in any::<String>(), size in 1usize..4096) {
            prop_assert_eq!(second_index(&s, size), first_index(&reversed(&s), size));
        }

        #[test]
        fn test_interleaved_keeps_length(s in any::<String>()) {
            prop_assert_eq!(interleaved(&s).chars().count(), s.chars().count());
        }
    }
}
