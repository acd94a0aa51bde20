/// The probability-name table, one entry per percentile from `TRUE` (1.00)
/// down to `FALSE` (0.00).
///
/// Two names appear twice (`BARELYLIKELY` at 0.51 and 0.06, `PROBABLYNOT`
/// at 0.30 and 0.12). Lookup scans from the top, so the higher percentage
/// is the canonical mapping for both.
pub const CHANCE_TABLE: &[(&str, f64)] = &[("TRUE", 1.00),
                                           ("CERTAIN", 0.99),
                                           ("ALMOSTCERTAIN", 0.98),
                                           ("NEARLYCERTAIN", 0.97),
                                           ("VIRTUALLYCERTAIN", 0.96),
                                           ("EXTREMELYLIKELY", 0.95),
                                           ("EXCEEDINGLYLIKELY", 0.94),
                                           ("OVERWHELMINGLYLIKELY", 0.93),
                                           ("SUPREMELYLIKELY", 0.92),
                                           ("HIGHLYLIKELY", 0.91),
                                           ("VERYLIKELY", 0.90),
                                           ("VERYPROBABLE", 0.89),
                                           ("MOSTLIKELY", 0.88),
                                           ("MOSTLYCERTAIN", 0.87),
                                           ("QUITELIKELY", 0.86),
                                           ("PRETTYLIKELY", 0.85),
                                           ("RATHERLIKELY", 0.84),
                                           ("FAIRLYLIKELY", 0.83),
                                           ("REASONABLYLIKELY", 0.82),
                                           ("GENERALLYLIKELY", 0.81),
                                           ("USUALLY", 0.80),
                                           ("OFTEN", 0.79),
                                           ("FREQUENTLY", 0.78),
                                           ("COMMONLY", 0.77),
                                           ("REGULARLY", 0.76),
                                           ("PROBABLE", 0.75),
                                           ("QUITEPROBABLE", 0.74),
                                           ("RATHERPROBABLE", 0.73),
                                           ("FAIRLYPROBABLE", 0.72),
                                           ("SOMEWHATPROBABLE", 0.71),
                                           ("PROBABLY", 0.70),
                                           ("PRESUMABLY", 0.69),
                                           ("GOODCHANCE", 0.68),
                                           ("DECENTCHANCE", 0.67),
                                           ("SOLIDCHANCE", 0.66),
                                           ("BETTERTHANNOT", 0.65),
                                           ("LEANINGYES", 0.64),
                                           ("PLAUSIBLE", 0.63),
                                           ("QUITEPLAUSIBLE", 0.62),
                                           ("SOMEWHATLIKELY", 0.61),
                                           ("MODERATELYLIKELY", 0.60),
                                           ("MILDLYLIKELY", 0.59),
                                           ("SLIGHTLYLIKELY", 0.58),
                                           ("ABITLIKELY", 0.57),
                                           ("MARGINALLYLIKELY", 0.56),
                                           ("FRACTIONALLYLIKELY", 0.55),
                                           ("JUSTLIKELY", 0.54),
                                           ("SCARCELYLIKELY", 0.53),
                                           ("NARROWLYLIKELY", 0.52),
                                           ("BARELYLIKELY", 0.51),
                                           ("MAYBE", 0.50),
                                           ("BARELYUNLIKELY", 0.49),
                                           ("NARROWLYUNLIKELY", 0.48),
                                           ("SCARCELYUNLIKELY", 0.47),
                                           ("JUSTUNLIKELY", 0.46),
                                           ("FRACTIONALLYUNLIKELY", 0.45),
                                           ("MARGINALLYUNLIKELY", 0.44),
                                           ("ABITUNLIKELY", 0.43),
                                           ("SLIGHTLYUNLIKELY", 0.42),
                                           ("MILDLYUNLIKELY", 0.41),
                                           ("MODERATELYUNLIKELY", 0.40),
                                           ("SOMEWHATUNLIKELY", 0.39),
                                           ("IMPLAUSIBLE", 0.38),
                                           ("LEANINGNO", 0.37),
                                           ("WORSETHANNOT", 0.36),
                                           ("SLIMCHANCE", 0.35),
                                           ("LONGSHOT", 0.34),
                                           ("DOUBTFUL", 0.33),
                                           ("QUITEDOUBTFUL", 0.32),
                                           ("RATHERDOUBTFUL", 0.31),
                                           ("PROBABLYNOT", 0.30),
                                           ("PRESUMABLYNOT", 0.29),
                                           ("OFTENNOT", 0.28),
                                           ("MOSTLYNOT", 0.27),
                                           ("USUALLYNOT", 0.26),
                                           ("IMPROBABLE", 0.25),
                                           ("QUITEIMPROBABLE", 0.24),
                                           ("RATHERIMPROBABLE", 0.23),
                                           ("FAIRLYIMPROBABLE", 0.22),
                                           ("SOMEWHATIMPROBABLE", 0.21),
                                           ("UNLIKELY", 0.20),
                                           ("QUITEUNLIKELY", 0.19),
                                           ("RATHERUNLIKELY", 0.18),
                                           ("FAIRLYUNLIKELY", 0.17),
                                           ("REASONABLYUNLIKELY", 0.16),
                                           ("GENERALLYUNLIKELY", 0.15),
                                           ("SELDOM", 0.14),
                                           ("RARELY", 0.13),
                                           ("PROBABLYNOT", 0.12),
                                           ("HARDLYEVER", 0.11),
                                           ("VERYUNLIKELY", 0.10),
                                           ("HIGHLYUNLIKELY", 0.09),
                                           ("EXTREMELYUNLIKELY", 0.08),
                                           ("EXCEEDINGLYUNLIKELY", 0.07),
                                           ("BARELYLIKELY", 0.06),
                                           ("VIRTUALLYNEVER", 0.05),
                                           ("NEARLYNEVER", 0.04),
                                           ("ALMOSTNEVER", 0.03),
                                           ("FORGETIT", 0.02),
                                           ("MIRACLE", 0.01),
                                           ("FALSE", 0.00)];

/// Looks up a probability name, case-insensitively.
///
/// # Parameters
/// - `name`: The candidate token.
///
/// # Returns
/// - `Some(f64)`: The probability of the first matching entry.
/// - `None`: If the token is not a probability name.
///
/// # Example
/// ```
/// use lumina::interpreter::evaluator::chance::chance_of;
///
/// assert_eq!(chance_of("maybe"), Some(0.5));
/// assert_eq!(chance_of("TRUE"), Some(1.0));
/// assert_eq!(chance_of("sometimes"), None);
/// ```
#[must_use]
pub fn chance_of(name: &str) -> Option<f64> {
    CHANCE_TABLE.iter()
                .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
                .map(|(_, probability)| *probability)
}

/// Draws a fresh boolean with the given probability of being true.
///
/// Every read of a probability name is an independent draw; `TRUE` and
/// `FALSE` are the degenerate entries that always and never hit.
#[must_use]
pub fn draw(probability: f64) -> bool {
    rand::random::<f64>() < probability
}

/// The number words and their values, `zero` through `ten`.
pub const NUMBER_WORDS: &[(&str, f64)] = &[("zero", 0.0),
                                           ("one", 1.0),
                                           ("two", 2.0),
                                           ("three", 3.0),
                                           ("four", 4.0),
                                           ("five", 5.0),
                                           ("six", 6.0),
                                           ("seven", 7.0),
                                           ("eight", 8.0),
                                           ("nine", 9.0),
                                           ("ten", 10.0)];

/// Looks up a number word, case-insensitively.
///
/// # Example
/// ```
/// use lumina::interpreter::evaluator::chance::number_word;
///
/// assert_eq!(number_word("Seven"), Some(7.0));
/// assert_eq!(number_word("eleven"), None);
/// ```
#[must_use]
pub fn number_word(name: &str) -> Option<f64> {
    NUMBER_WORDS.iter()
                .find(|(word, _)| word.eq_ignore_ascii_case(name))
                .map(|(_, value)| *value)
}
