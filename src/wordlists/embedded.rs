//! Embedded topic word lists
//!
//! Small built-in vocabularies so puzzles can be generated without an external
//! word source. Every entry is uppercase with no whitespace.

/// Mathematics vocabulary
pub const MATH: &[&str] = &[
    "ANGLE", "SUM", "PRIME", "RATIO", "AREA", "VECTOR", "MATRIX", "CUBE", "SINE", "COSINE",
    "TANGENT", "RADIUS", "DIGIT", "FACTOR", "MEAN", "MEDIAN", "MODE", "LIMIT", "GRAPH", "SLOPE",
    "AXIS", "PI", "ROOT", "POWER", "PROOF", "SET", "RING", "FIELD", "GROUP", "LEMMA",
];

/// Animal names
pub const ANIMALS: &[&str] = &[
    "CAT", "DOG", "HORSE", "TIGER", "LION", "ZEBRA", "OTTER", "EAGLE", "SHARK", "WHALE", "MOOSE",
    "BISON", "CAMEL", "LLAMA", "PANDA", "KOALA", "SLOTH", "GECKO", "RAVEN", "HERON", "BEAVER",
    "BADGER", "FERRET", "FALCON", "OX", "YAK", "EMU", "OWL", "BEE", "ANT",
];

/// Astronomy vocabulary
pub const SPACE: &[&str] = &[
    "STAR", "MOON", "SUN", "ORBIT", "COMET", "NOVA", "GALAXY", "PLANET", "NEBULA", "QUASAR",
    "PULSAR", "METEOR", "MARS", "VENUS", "EARTH", "PLUTO", "SATURN", "COSMOS", "ECLIPSE", "APOGEE",
    "ROCKET", "LUNAR", "SOLAR", "DWARF", "GIANT", "VOID", "ION", "DUST", "RING", "AXIS",
];

/// Topic names and their lists, in display order
pub const TOPICS: &[(&str, &[&str])] = &[("math", MATH), ("animals", ANIMALS), ("space", SPACE)];
