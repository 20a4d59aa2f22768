//! Hand-checked orbits and unions with their expected classification.

/// A single orbit: digit string, σ, expected rotation number `(p, q)` or
/// `None` when not rotational.
pub type OrbitFixture = (&'static str, u32, Option<(u64, u64)>);

/// A union: member digit strings, σ, expected rotational flag.
pub type UnionFixture = (&'static [&'static str], u32, bool);

/// Orbits with known classification.
pub const KNOWN_ORBITS: &[OrbitFixture] = &[
    ("0", 2, Some((1, 1))),
    ("1", 3, Some((1, 1))),
    ("01", 2, Some((1, 2))),
    ("001", 2, Some((1, 3))),
    ("011", 2, Some((2, 3))),
    ("0001", 2, Some((1, 4))),
    ("0011", 2, None),
    ("00101", 2, Some((2, 5))),
    ("01", 3, Some((1, 2))),
    ("02", 3, Some((1, 2))),
    ("12", 3, Some((1, 2))),
    ("0012", 3, Some((1, 4))),
    ("0212", 3, None),
];

/// Unions with known classification.
pub const KNOWN_UNIONS: &[UnionFixture] = &[
    (&["01", "02"], 3, true),
    (&["02", "12"], 3, true),
    (&["01", "12"], 3, false),
    (&["01", "02", "12"], 3, false),
    (&["0", "01"], 3, false),
    (&["01", "001"], 2, false),
];
