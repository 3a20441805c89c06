use crate::config::KILOBYTE;
use rand::RngCore;
use uuid::Uuid;

/// Shape of the data written into each generated kilobyte record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockPattern {
    /// Independent random bytes, different on every call.
    Random,
    /// Little-endian counters, record `i` holding `i*256 .. i*256 + 256`.
    Monotonic,
    /// Little-endian samples of `floor(1024 * sin(phase))`.
    Sinusoidal,
}

impl BlockPattern {
    pub fn name(&self) -> &str {
        match self {
            BlockPattern::Random => "random",
            BlockPattern::Monotonic => "monotonic",
            BlockPattern::Sinusoidal => "sinusoidal",
        }
    }

    /// Lazily generates `count` records. Calling it again restarts the sequence.
    pub fn records(self, count: usize) -> impl Iterator<Item = Vec<u8>> {
        (0..count).map(move |i| self.record(i))
    }

    /// Builds record `index` of the sequence.
    pub fn record(&self, index: usize) -> Vec<u8> {
        match self {
            BlockPattern::Random => random_kilobyte(),
            BlockPattern::Monotonic => monotonic_kilobyte(index),
            BlockPattern::Sinusoidal => sinusoidal_kilobyte(index),
        }
    }
}

fn random_kilobyte() -> Vec<u8> {
    let mut kb = vec![0u8; KILOBYTE];
    rand::thread_rng().fill_bytes(&mut kb);
    kb
}

fn monotonic_kilobyte(index: usize) -> Vec<u8> {
    let from = (index as u32).wrapping_mul(256);
    let mut kb = Vec::with_capacity(KILOBYTE);
    for k in 0..(KILOBYTE / 4) as u32 {
        kb.extend_from_slice(&from.wrapping_add(k).to_le_bytes());
    }
    kb
}

fn sinusoidal_kilobyte(index: usize) -> Vec<u8> {
    let start = index as f64 * 256.0;
    let mut kb = Vec::with_capacity(KILOBYTE);
    for k in 0..KILOBYTE / 4 {
        let value = (1024.0 * (start + k as f64).sin()).floor() as i32;
        kb.extend_from_slice(&value.to_le_bytes());
    }
    kb
}

/// Lazily generates `count` random (version 4) UUIDs.
pub fn uuids(count: usize) -> impl Iterator<Item = Uuid> {
    (0..count).map(|_| Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(record: &[u8]) -> Vec<i32> {
        record
            .chunks_exact(4)
            .map(|w| i32::from_le_bytes([w[0], w[1], w[2], w[3]]))
            .collect()
    }

    #[test]
    fn monotonic_first_record_counts_from_zero() {
        let records: Vec<Vec<u8>> = BlockPattern::Monotonic.records(1).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), KILOBYTE);
        let expected: Vec<i32> = (0..256).collect();
        assert_eq!(words(&records[0]), expected);
    }

    #[test]
    fn monotonic_records_continue_where_previous_ended() {
        let record = BlockPattern::Monotonic.record(3);
        let values = words(&record);
        assert_eq!(values[0], 768);
        assert_eq!(values[255], 1023);
    }

    #[test]
    fn monotonic_is_stable_across_invocations() {
        let first: Vec<Vec<u8>> = BlockPattern::Monotonic.records(100_000).collect();
        let second: Vec<Vec<u8>> = BlockPattern::Monotonic.records(100_000).collect();
        assert_eq!(first.len(), second.len());
        for (i, (a, b)) in first.iter().zip(second.iter()).enumerate() {
            assert_eq!(a, b, "record {} differs between invocations", i);
        }
    }

    #[test]
    fn sinusoidal_is_stable_across_invocations() {
        let first: Vec<Vec<u8>> = BlockPattern::Sinusoidal.records(1_000).collect();
        let second: Vec<Vec<u8>> = BlockPattern::Sinusoidal.records(1_000).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn sinusoidal_values_follow_phase() {
        let values = words(&BlockPattern::Sinusoidal.record(2));
        for (k, &value) in values.iter().enumerate() {
            let expected = (1024.0 * (512.0 + k as f64).sin()).floor() as i32;
            assert_eq!(value, expected);
            assert!((-1024..=1024).contains(&value));
        }
    }

    #[test]
    fn random_records_are_not_repeated() {
        let first: Vec<Vec<u8>> = BlockPattern::Random.records(4).collect();
        let second: Vec<Vec<u8>> = BlockPattern::Random.records(4).collect();
        assert!(first.iter().all(|kb| kb.len() == KILOBYTE));
        assert_ne!(first, second);
    }

    #[test]
    fn zero_count_is_empty() {
        assert_eq!(BlockPattern::Monotonic.records(0).count(), 0);
        assert_eq!(BlockPattern::Random.records(0).count(), 0);
        assert_eq!(uuids(0).count(), 0);
    }

    #[test]
    fn uuids_are_random_v4() {
        let ids: Vec<Uuid> = uuids(8).collect();
        assert_eq!(ids.len(), 8);
        assert!(ids.iter().all(|id| id.get_version_num() == 4));
        assert_ne!(ids[0], ids[1]);
    }
}
