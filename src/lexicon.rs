//! Tamil number lexicon and Indian place-value tiers.

/// Word for zero. Only emitted for a whole amount of zero.
pub const ZERO: &str = "பூஜ்ஜியம்";

/// Suffix for the rupee clause.
pub const RUPEES: &str = "ரூபாய்";

/// Suffix for the paisa clause.
pub const PAISA: &str = "காசு";

/// Joiner between the rupee and paisa clauses ("and").
pub const AND: &str = "மற்றும்";

/// Hundred, when nothing follows it.
pub const HUNDRED: &str = "நூறு";

/// Hundred, when a remainder follows it.
pub const HUNDRED_JOINED: &str = "நூற்று";

/// Words for 0 through 19. Index 0 is a placeholder and never emitted.
///
/// 11 to 19 are irregular and cannot be built from "ten" plus a unit.
pub const UNITS: [&str; 20] = [
    "",
    "ஒன்று",
    "இரண்டு",
    "மூன்று",
    "நான்கு",
    "ஐந்து",
    "ஆறு",
    "ஏழு",
    "எட்டு",
    "ஒன்பது",
    "பத்து",
    "பதினொன்று",
    "பன்னிரண்டு",
    "பதிமூன்று",
    "பதினான்கு",
    "பதினைந்து",
    "பதினாறு",
    "பதினேழு",
    "பதினெட்டு",
    "பத்தொன்பது",
];

/// Words for multiples of ten. Indices 0 and 1 are covered by [`UNITS`].
pub const TENS: [&str; 10] = [
    "",
    "",
    "இருபது",
    "முப்பது",
    "நாற்பது",
    "ஐம்பது",
    "அறுபது",
    "எழுபது",
    "எண்பது",
    "தொண்ணூறு",
];

/// A grouping level in the Indian numbering system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    /// Place value of one unit of this tier.
    pub divisor: u64,

    /// Fixed idiom used when the tier count is exactly one.
    pub single: &'static str,

    /// Word appended after the count when it is greater than one.
    pub suffix: &'static str,
}

pub const THOUSAND: u64 = 1_000;
pub const LAKH: u64 = 100_000;
pub const CRORE: u64 = 10_000_000;

/// Tiers ordered from largest to smallest; the first with `n >= divisor` applies.
pub const TIERS: [Tier; 3] = [
    Tier {
        divisor: CRORE,
        single: "ஒரு கோடி",
        suffix: "கோடி",
    },
    Tier {
        divisor: LAKH,
        single: "ஒரு இலட்சம்",
        suffix: "இலட்சம்",
    },
    Tier {
        divisor: THOUSAND,
        single: "ஆயிரம்",
        suffix: "ஆயிரம்",
    },
];
