//! # Spell Module
//!
//! Spells a whole amount of currency units as Spanish cardinal words. This is
//! the text printed on the "Total en Letras" line of a budget.
//!
//! ## Tier Decomposition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  spell(2_500_321)                                                       │
//! │                                                                         │
//! │  Millions    q = 2,   r = 500_321  ──► "dos millones"                   │
//! │      │                                                                  │
//! │      ▼ remainder                                                        │
//! │  Thousands   q = 500, r = 321      ──► "quinientos mil"                 │
//! │      │                                                                  │
//! │      ▼ remainder                                                        │
//! │  Hundreds    h = 3,   rest = 21    ──► "trescientos"                    │
//! │      │                                                                  │
//! │      ▼ remainder                                                        │
//! │  Tens        t = 2,   u = 1        ──► "veinte y uno"                   │
//! │                                                                         │
//! │  Result: "dos millones quinientos mil trescientos veinte y uno"         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The magnitude phrase always comes before the remainder phrase, and a zero
//! remainder drops the trailing clause entirely.
//!
//! ## Usage
//! ```rust
//! use presupuesto_core::spell::spell;
//!
//! assert_eq!(spell(2021).unwrap(), "dos mil veinte y uno");
//! assert_eq!(spell(1_000_000).unwrap(), "un millón");
//! assert!(spell(-1).is_err());
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::SpellError;

// =============================================================================
// Bounds
// =============================================================================

/// First amount that can no longer be spelled (one trillion, 10^12).
pub const SPELL_UPPER_BOUND: i64 = 1_000_000_000_000;

/// Text shown in place of the spelled total when the amount is out of range.
pub const OUT_OF_RANGE_PLACEHOLDER: &str = "Número fuera de rango";

// =============================================================================
// Lexical Tables
// =============================================================================

const ZERO: &str = "cero";
const CONJUNCTION: &str = "y";
const HUNDRED_PREFIX: &str = "ciento";
const APOCOPATED_ONE: &str = "un";
const THOUSAND: &str = "mil";
const MILLION: &str = "millón";
const MILLIONS: &str = "millones";

static UNITS: [&str; 10] = [
    ZERO, "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

static TEENS: [&str; 10] = [
    "diez",
    "once",
    "doce",
    "trece",
    "catorce",
    "quince",
    "dieciséis",
    "diecisiete",
    "dieciocho",
    "diecinueve",
];

/// Multiples of ten from twenty to ninety.
static TENS: [&str; 8] = [
    "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta", "noventa",
];

/// Multiples of a hundred. Index 0 is the bare "cien"; "ciento" is only used
/// when something follows.
static HUNDREDS: [&str; 9] = [
    "cien",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

static THOUSAND_SCALE: [&str; 1] = [THOUSAND];
static MILLION_SCALE: [&str; 2] = [MILLION, MILLIONS];
static THOUSAND_MILLION_SCALE: [&str; 2] = [THOUSAND, MILLIONS];

// =============================================================================
// Magnitude Tier
// =============================================================================

/// The scale bands an amount is decomposed into, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudeTier {
    /// 0 to 9
    Units,
    /// 10 to 19
    Teens,
    /// 20 to 99
    Tens,
    /// 100 to 999
    Hundreds,
    /// 1,000 to 999,999
    Thousands,
    /// 10^6 to 10^9 - 1
    Millions,
    /// 10^9 to 10^12 - 1
    ThousandMillions,
}

impl MagnitudeTier {
    /// All tiers in ascending order.
    pub const ALL: [MagnitudeTier; 7] = [
        MagnitudeTier::Units,
        MagnitudeTier::Teens,
        MagnitudeTier::Tens,
        MagnitudeTier::Hundreds,
        MagnitudeTier::Thousands,
        MagnitudeTier::Millions,
        MagnitudeTier::ThousandMillions,
    ];

    /// Returns the tier that owns `n`.
    ///
    /// ## Example
    /// ```rust
    /// use presupuesto_core::spell::MagnitudeTier;
    ///
    /// assert_eq!(MagnitudeTier::of(19), MagnitudeTier::Teens);
    /// assert_eq!(MagnitudeTier::of(20), MagnitudeTier::Tens);
    /// assert_eq!(MagnitudeTier::of(1_000_000), MagnitudeTier::Millions);
    /// ```
    pub const fn of(n: u64) -> Self {
        match n {
            0..=9 => MagnitudeTier::Units,
            10..=19 => MagnitudeTier::Teens,
            20..=99 => MagnitudeTier::Tens,
            100..=999 => MagnitudeTier::Hundreds,
            1_000..=999_999 => MagnitudeTier::Thousands,
            1_000_000..=999_999_999 => MagnitudeTier::Millions,
            _ => MagnitudeTier::ThousandMillions,
        }
    }

    /// Smallest value that belongs to this tier.
    pub const fn lower_bound(self) -> u64 {
        match self {
            MagnitudeTier::Units => 0,
            MagnitudeTier::Teens => 10,
            MagnitudeTier::Tens => 20,
            MagnitudeTier::Hundreds => 100,
            MagnitudeTier::Thousands => 1_000,
            MagnitudeTier::Millions => 1_000_000,
            MagnitudeTier::ThousandMillions => 1_000_000_000,
        }
    }

    /// Divisor that splits a value of this tier into quotient and remainder.
    pub const fn scale(self) -> u64 {
        match self {
            MagnitudeTier::Units | MagnitudeTier::Teens => 1,
            MagnitudeTier::Tens => 10,
            MagnitudeTier::Hundreds => 100,
            MagnitudeTier::Thousands => 1_000,
            MagnitudeTier::Millions => 1_000_000,
            MagnitudeTier::ThousandMillions => 1_000_000_000,
        }
    }

    /// Word forms this tier owns.
    ///
    /// The scale tiers return their scale words (singular before plural where
    /// both exist).
    pub fn lexicon(self) -> &'static [&'static str] {
        match self {
            MagnitudeTier::Units => &UNITS,
            MagnitudeTier::Teens => &TEENS,
            MagnitudeTier::Tens => &TENS,
            MagnitudeTier::Hundreds => &HUNDREDS,
            MagnitudeTier::Thousands => &THOUSAND_SCALE,
            MagnitudeTier::Millions => &MILLION_SCALE,
            MagnitudeTier::ThousandMillions => &THOUSAND_MILLION_SCALE,
        }
    }

    /// Spells `n` through this tier only.
    ///
    /// Returns `None` when `n` does not belong to the tier, so each tier can
    /// be exercised on its own.
    ///
    /// ## Example
    /// ```rust
    /// use presupuesto_core::spell::MagnitudeTier;
    ///
    /// assert_eq!(MagnitudeTier::Hundreds.phrase(100).as_deref(), Some("cien"));
    /// assert_eq!(MagnitudeTier::Hundreds.phrase(99), None);
    /// ```
    pub fn phrase(self, n: u64) -> Option<String> {
        if n >= SPELL_UPPER_BOUND as u64 || MagnitudeTier::of(n) != self {
            return None;
        }
        let mut words = Vec::new();
        self.push_words(n, &mut words);
        Some(words.join(" "))
    }

    /// Appends the words for `n`, which must belong to this tier.
    fn push_words(self, n: u64, words: &mut Vec<&'static str>) {
        let (quotient, rest) = (n / self.scale(), n % self.scale());

        match self {
            MagnitudeTier::Units => words.push(UNITS[n as usize]),
            MagnitudeTier::Teens => words.push(TEENS[(n - 10) as usize]),
            MagnitudeTier::Tens => {
                words.push(TENS[(quotient - 2) as usize]);
                if rest > 0 {
                    words.push(CONJUNCTION);
                    words.push(UNITS[rest as usize]);
                }
            }
            MagnitudeTier::Hundreds => {
                words.push(match (quotient, rest) {
                    (1, 0) => HUNDREDS[0],
                    (1, _) => HUNDRED_PREFIX,
                    _ => HUNDREDS[(quotient - 1) as usize],
                });
                push_remainder(rest, words);
            }
            MagnitudeTier::Thousands => {
                // A lone thousand is just "mil", never "uno mil".
                if quotient != 1 {
                    push_words(quotient, words);
                }
                words.push(THOUSAND);
                push_remainder(rest, words);
            }
            MagnitudeTier::Millions => {
                if quotient == 1 {
                    words.extend([APOCOPATED_ONE, MILLION]);
                } else {
                    push_words(quotient, words);
                    words.push(MILLIONS);
                }
                push_remainder(rest, words);
            }
            MagnitudeTier::ThousandMillions => {
                if quotient != 1 {
                    push_words(quotient, words);
                }
                words.extend([THOUSAND, MILLIONS]);
                push_remainder(rest, words);
            }
        }
    }
}

fn push_words(n: u64, words: &mut Vec<&'static str>) {
    MagnitudeTier::of(n).push_words(n, words);
}

fn push_remainder(rest: u64, words: &mut Vec<&'static str>) {
    if rest > 0 {
        push_words(rest, words);
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Spells a whole amount as Spanish cardinal words.
///
/// ## Rules
/// - `amount` must be in `0..SPELL_UPPER_BOUND`
/// - Zero is spelled "cero"; zero never appears inside a longer phrase
/// - Words are joined by single spaces with nothing at either edge
///
/// ## Errors
/// - [`SpellError::NegativeInput`] when `amount < 0`
/// - [`SpellError::TooLarge`] when `amount >= SPELL_UPPER_BOUND`
///
/// ## Example
/// ```rust
/// use presupuesto_core::spell::spell;
///
/// assert_eq!(spell(0).unwrap(), "cero");
/// assert_eq!(spell(101).unwrap(), "ciento uno");
/// assert_eq!(spell(2_500_000).unwrap(), "dos millones quinientos mil");
/// ```
pub fn spell(amount: i64) -> Result<String, SpellError> {
    if amount < 0 {
        return Err(SpellError::NegativeInput { amount });
    }
    if amount >= SPELL_UPPER_BOUND {
        return Err(SpellError::TooLarge { amount });
    }
    if amount == 0 {
        return Ok(ZERO.to_string());
    }

    let mut words = Vec::with_capacity(24);
    push_words(amount as u64, &mut words);
    Ok(words.join(" "))
}

/// Spells `amount`, falling back to [`OUT_OF_RANGE_PLACEHOLDER`] on failure.
///
/// For document output where a bad total must not abort rendering.
pub fn spell_or_placeholder(amount: i64) -> String {
    spell(amount).unwrap_or_else(|_| OUT_OF_RANGE_PLACEHOLDER.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn spelled(amount: i64) -> String {
        spell(amount).unwrap()
    }

    #[test]
    fn test_documented_scenarios() {
        assert_eq!(spelled(0), "cero");
        assert_eq!(spelled(15), "quince");
        assert_eq!(spelled(21), "veinte y uno");
        assert_eq!(spelled(100), "cien");
        assert_eq!(spelled(101), "ciento uno");
        assert_eq!(spelled(1000), "mil");
        assert_eq!(spelled(2021), "dos mil veinte y uno");
        assert_eq!(spelled(1_000_000), "un millón");
        assert_eq!(spelled(2_500_000), "dos millones quinientos mil");
    }

    #[test]
    fn test_units_and_teens() {
        assert_eq!(spelled(1), "uno");
        assert_eq!(spelled(9), "nueve");
        assert_eq!(spelled(10), "diez");
        assert_eq!(spelled(16), "dieciséis");
        assert_eq!(spelled(19), "diecinueve");
    }

    #[test]
    fn test_tens_conjunction() {
        assert_eq!(spelled(20), "veinte");
        assert_eq!(spelled(30), "treinta");
        assert_eq!(spelled(45), "cuarenta y cinco");
        assert_eq!(spelled(99), "noventa y nueve");
        assert_eq!(spelled(21).matches(" y ").count(), 1);
    }

    #[test]
    fn test_conjunction_only_inside_tens() {
        // Not between hundreds and tens, nor between thousands and the rest
        assert_eq!(spelled(120), "ciento veinte");
        assert_eq!(spelled(110), "ciento diez");
        assert_eq!(spelled(1005), "mil cinco");
        assert_eq!(spelled(1_000_020), "un millón veinte");
    }

    #[test]
    fn test_hundreds_irregular_forms() {
        assert_eq!(spelled(100), "cien");
        assert_eq!(spelled(101), "ciento uno");
        assert_eq!(spelled(199), "ciento noventa y nueve");
        assert_eq!(spelled(200), "doscientos");
        assert_eq!(spelled(500), "quinientos");
        assert_eq!(spelled(999), "novecientos noventa y nueve");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(spelled(1000), "mil");
        assert_eq!(spelled(1001), "mil uno");
        assert_eq!(spelled(2000), "dos mil");
        assert_eq!(spelled(9999), "nueve mil novecientos noventa y nueve");
        assert_eq!(spelled(10_000), "diez mil");
        assert_eq!(spelled(21_000), "veinte y uno mil");
        assert_eq!(spelled(100_000), "cien mil");
        assert_eq!(spelled(101_000), "ciento uno mil");
        assert_eq!(
            spelled(999_999),
            "novecientos noventa y nueve mil novecientos noventa y nueve"
        );
    }

    #[test]
    fn test_millions_pluralization() {
        assert_eq!(spelled(1_000_000), "un millón");
        assert_eq!(spelled(1_000_001), "un millón uno");
        assert_eq!(spelled(2_000_000), "dos millones");
        assert_eq!(spelled(10_000_000), "diez millones");
        assert_eq!(spelled(100_000_000), "cien millones");
        assert_eq!(spelled(1_001_000), "un millón mil");
        assert_eq!(spelled(21_000_000), "veinte y uno millones");
    }

    #[test]
    fn test_thousand_millions() {
        assert_eq!(spelled(1_000_000_000), "mil millones");
        assert_eq!(spelled(1_000_000_001), "mil millones uno");
        assert_eq!(spelled(1_001_000_000), "mil millones un millón");
        assert_eq!(spelled(2_000_000_000), "dos mil millones");
        assert_eq!(spelled(1_000_001_000), "mil millones mil");
        assert_eq!(
            spelled(999_999_999_999),
            "novecientos noventa y nueve mil millones \
             novecientos noventa y nueve millones \
             novecientos noventa y nueve mil \
             novecientos noventa y nueve"
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(spell(-1), Err(SpellError::NegativeInput { amount: -1 }));
        assert_eq!(
            spell(i64::MIN),
            Err(SpellError::NegativeInput { amount: i64::MIN })
        );
        assert_eq!(
            spell(SPELL_UPPER_BOUND),
            Err(SpellError::TooLarge {
                amount: SPELL_UPPER_BOUND
            })
        );
        assert!(matches!(spell(i64::MAX), Err(SpellError::TooLarge { .. })));
        assert!(spell(SPELL_UPPER_BOUND - 1).is_ok());
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(spell_or_placeholder(21), "veinte y uno");
        assert_eq!(spell_or_placeholder(-5), OUT_OF_RANGE_PLACEHOLDER);
        assert_eq!(
            spell_or_placeholder(SPELL_UPPER_BOUND),
            OUT_OF_RANGE_PLACEHOLDER
        );
    }

    #[test]
    fn test_tier_classification() {
        for tier in MagnitudeTier::ALL {
            assert_eq!(MagnitudeTier::of(tier.lower_bound()), tier);
        }
        assert_eq!(MagnitudeTier::of(999), MagnitudeTier::Hundreds);
        assert_eq!(MagnitudeTier::of(999_999_999), MagnitudeTier::Millions);
    }

    #[test]
    fn test_tier_phrases() {
        assert_eq!(MagnitudeTier::Units.phrase(0).as_deref(), Some("cero"));
        assert_eq!(MagnitudeTier::Teens.phrase(12).as_deref(), Some("doce"));
        assert_eq!(MagnitudeTier::Tens.phrase(12), None);
        assert_eq!(
            MagnitudeTier::Thousands.phrase(1000).as_deref(),
            Some("mil")
        );
        assert_eq!(MagnitudeTier::Millions.phrase(1000), None);
        assert_eq!(
            MagnitudeTier::ThousandMillions.phrase(SPELL_UPPER_BOUND as u64),
            None
        );
    }

    #[test]
    fn test_lexicon_sizes() {
        assert_eq!(MagnitudeTier::Units.lexicon().len(), 10);
        assert_eq!(MagnitudeTier::Teens.lexicon().len(), 10);
        assert_eq!(MagnitudeTier::Tens.lexicon().len(), 8);
        assert_eq!(MagnitudeTier::Hundreds.lexicon().len(), 9);
        assert_eq!(MagnitudeTier::Millions.lexicon(), &["millón", "millones"]);
    }

    #[test]
    fn test_public_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MagnitudeTier>();
        assert_send_sync::<SpellError>();
        assert_send_sync::<fn(i64) -> Result<String, SpellError>>();
    }

    #[test]
    fn test_concurrent_calls_agree() {
        let amounts = [0, 21, 101, 2021, 2_500_000, 999_999_999_999];
        let expected: Vec<String> = amounts.iter().map(|&n| spelled(n)).collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        for _ in 0..500 {
                            let got: Vec<String> = amounts.iter().map(|&n| spelled(n)).collect();
                            assert_eq!(got, expected);
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    }

    /// Walks every value below 20,000 and a scattered sample above it.
    #[test]
    fn test_output_shape() {
        let mut samples: Vec<i64> = (0..20_000).collect();
        let mut x: u64 = 0x2545_F491_4F6C_DD1D;
        for _ in 0..20_000 {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            samples.push((x % SPELL_UPPER_BOUND as u64) as i64);
        }

        for amount in samples {
            let text = spelled(amount);
            assert!(!text.is_empty(), "{amount}");
            assert_eq!(text.trim(), text, "{amount}");
            assert!(!text.contains("  "), "{amount}: {text}");
            assert!(!text.ends_with(" y"), "{amount}: {text}");
            if amount != 0 {
                assert!(!text.contains("cero"), "{amount}: {text}");
            }
            assert_eq!(spelled(amount), text);
        }
    }
}
