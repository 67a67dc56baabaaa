use crate::Key;

/// Maps `key` to a slot in a table of `capacity` slots.
///
/// Negative keys use the Euclidean remainder, so the result is always in
/// `0..capacity`. For non-negative keys this is plain `key % capacity`.
/// `capacity` must be non-zero; the tables enforce that on construction.
pub fn hash_key(key: Key, capacity: usize) -> usize {
    i64::from(key).rem_euclid(capacity as i64) as usize
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::TABLE_SIZE;

    #[test]
    fn modulo() {
        assert_eq!(hash_key(5, TABLE_SIZE), 5);
        assert_eq!(hash_key(1014, TABLE_SIZE), 5);
        assert_eq!(hash_key(2023, TABLE_SIZE), 5);
        assert_eq!(hash_key(TABLE_SIZE as Key, TABLE_SIZE), 0);
    }

    #[test]
    fn negative_keys_stay_in_range() {
        assert_eq!(hash_key(-1, TABLE_SIZE), TABLE_SIZE - 1);
        assert_eq!(hash_key(-1009, TABLE_SIZE), 0);
        assert_eq!(hash_key(-1004, TABLE_SIZE), 5);
        for key in [i32::MIN, i32::MIN + 1, -7, i32::MAX] {
            assert!(hash_key(key, TABLE_SIZE) < TABLE_SIZE);
        }
    }
}
