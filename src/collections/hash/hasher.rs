use std::hash::{BuildHasher, Hasher};

const MULTIPLIER: u64 = 31;

/// A [`Hasher`] that reports a value's own hash code instead of scrambling it.
///
/// Integers are folded in verbatim, so a single integer hashes to itself (`17_u32` hashes to 17
/// and lands in slot 0 of a table of size 17). Byte sequences, such as strings, are folded one
/// byte at a time as `state * 31 + byte`. Arithmetic wraps.
///
/// This is deterministic and easy to reason about, which is the point, but it is trivially
/// attackable and clusters sequential keys. Plug a different [`BuildHasher`] into
/// [`HashTable`](super::HashTable) if that matters.
#[derive(Debug, Clone, Default)]
pub struct NativeHasher {
    state: u64,
}

impl NativeHasher {
    fn fold(&mut self, value: u64) {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(value);
    }
}

impl Hasher for NativeHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.fold(u64::from(*byte));
        }
    }

    fn write_u8(&mut self, i: u8) {
        self.fold(u64::from(i));
    }

    fn write_u16(&mut self, i: u16) {
        self.fold(u64::from(i));
    }

    fn write_u32(&mut self, i: u32) {
        self.fold(u64::from(i));
    }

    fn write_u64(&mut self, i: u64) {
        self.fold(i);
    }

    fn write_u128(&mut self, i: u128) {
        self.fold((i >> 64) as u64);
        self.fold(i as u64);
    }

    fn write_usize(&mut self, i: usize) {
        self.fold(i as u64);
    }
}

/// Builds [`NativeHasher`]s, all starting from a zero state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeHashBuilder;

impl BuildHasher for NativeHashBuilder {
    type Hasher = NativeHasher;

    fn build_hasher(&self) -> Self::Hasher {
        NativeHasher::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_hash_to_themselves() {
        assert_eq!(NativeHashBuilder.hash_one(17_u32), 17);
        assert_eq!(NativeHashBuilder.hash_one(120_u64), 120);
        assert_eq!(NativeHashBuilder.hash_one(3_usize), 3);
        assert_eq!(NativeHashBuilder.hash_one(-1_i32), u64::from(u32::MAX));
    }

    #[test]
    fn test_bytes_are_folded() {
        let mut hasher = NativeHasher::default();
        hasher.write(b"ab");
        assert_eq!(hasher.finish(), 97 * 31 + 98);
        assert_eq!(
            NativeHashBuilder.hash_one("ab"),
            NativeHashBuilder.hash_one("ab"),
            "Hashing should be deterministic."
        );
        assert_ne!(NativeHashBuilder.hash_one("ab"), NativeHashBuilder.hash_one("ba"));
    }
}
