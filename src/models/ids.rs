//! Id providers: where teams, matches and scoreboards get their unique ids.

use uuid::Uuid;

/// Source of unique identifiers. Injected into parsing and pairing so tests can
/// use predictable ids.
pub trait IdProvider {
    fn next_id(&mut self) -> Uuid;
}

/// Random v4 UUIDs (production).
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdProvider for RandomIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Counts up from 1: `00000000-0000-0000-0000-000000000001`, `...0002`, ...
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    issued: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&mut self) -> Uuid {
        self.issued += 1;
        Uuid::from_u128(self.issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_are_distinct_and_ordered() {
        let mut ids = SequentialIds::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert_eq!(first, Uuid::from_u128(1));
        assert_eq!(second, Uuid::from_u128(2));
    }

    #[test]
    fn random_ids_differ() {
        let mut ids = RandomIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
