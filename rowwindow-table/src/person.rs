use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const FIRST_NAMES: [&str; 20] = [
    "Ada", "Alan", "Barbara", "Claude", "Donald", "Edsger", "Frances", "Grace", "Hedy", "John",
    "Katherine", "Ken", "Leslie", "Linus", "Margaret", "Niklaus", "Radia", "Robin", "Sophie",
    "Tim",
];

const LAST_NAMES: [&str; 20] = [
    "Allen", "Baker", "Carter", "Diaz", "Evans", "Foster", "Garcia", "Hughes", "Iverson",
    "Johnson", "Kim", "Lopez", "Morris", "Nguyen", "Ortiz", "Patel", "Quinn", "Rivera", "Silva",
    "Turner",
];

/// Relationship status of a synthetic person record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Single,
    InRelationship,
    Complicated,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::InRelationship => "relationship",
            Self::Complicated => "complicated",
        }
    }
}

/// One fixed-shape row record. Identified by its position in the sequence;
/// the dataset is immutable for the session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub visits: u32,
    pub status: Status,
    pub progress: u8,
}

/// Seeded generator of synthetic person records.
///
/// A given seed reproduces the same sequence, so tests and demos can pin
/// their datasets.
#[derive(Clone, Debug)]
pub struct PersonGenerator {
    rng: SmallRng,
    next_id: u64,
}

impl PersonGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            next_id: 0,
        }
    }

    /// Produces the next record in the sequence.
    pub fn generate(&mut self) -> Person {
        let id = self.next_id;
        self.next_id += 1;
        Person {
            id,
            first_name: FIRST_NAMES[self.rng.random_range(0..FIRST_NAMES.len())].to_owned(),
            last_name: LAST_NAMES[self.rng.random_range(0..LAST_NAMES.len())].to_owned(),
            age: self.rng.random_range(18..80),
            visits: self.rng.random_range(0..1_000),
            status: match self.rng.random_range(0..3u8) {
                0 => Status::Single,
                1 => Status::InRelationship,
                _ => Status::Complicated,
            },
            progress: self.rng.random_range(0..=100),
        }
    }

    /// Calls `generate` exactly `count` times and collects the rows.
    pub fn take(&mut self, count: usize) -> Vec<Person> {
        (0..count).map(|_| self.generate()).collect()
    }
}
