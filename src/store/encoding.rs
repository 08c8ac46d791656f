//! Fixed remap table for legacy encoding artifacts.
//!
//! Three families of damage show up in file names and user-supplied text
//! that passed through older systems: decomposed accents (letter plus
//! combining mark), UTF-8 bytes re-decoded as Windows-1252 (mojibake), and
//! HTML entities. Each entry maps one damaged sequence to its precomposed
//! letter; the table is data, not an algorithm.

/// Damaged sequence -> precomposed replacement, applied in order.
const REPLACEMENTS: &[(&str, &str)] = &[
    // Combining accent sequences.
    ("a\u{301}", "á"),
    ("e\u{301}", "é"),
    ("i\u{301}", "í"),
    ("o\u{301}", "ó"),
    ("u\u{301}", "ú"),
    ("n\u{303}", "ñ"),
    // Lowercase mojibake (UTF-8 read as Windows-1252).
    ("\u{c3}\u{a1}", "á"), // Ã¡
    ("\u{c3}\u{a9}", "é"), // Ã©
    ("\u{c3}\u{ad}", "í"), // Ã + soft hyphen
    ("\u{c3}\u{b3}", "ó"), // Ã³
    ("\u{c3}\u{ba}", "ú"), // Ãº
    ("\u{c3}\u{b1}", "ñ"), // Ã±
    // Uppercase mojibake.
    ("\u{c3}\u{81}", "Á"),
    ("\u{c3}\u{2030}", "É"), // Ã‰
    ("\u{c3}\u{8d}", "Í"),
    ("\u{c3}\u{201c}", "Ó"), // Ã“
    ("\u{c3}\u{161}", "Ú"), // Ãš
    ("\u{c3}\u{2018}", "Ñ"), // Ã‘
    // HTML entities.
    ("&aacute;", "á"),
    ("&eacute;", "é"),
    ("&iacute;", "í"),
    ("&oacute;", "ó"),
    ("&uacute;", "ú"),
    ("&ntilde;", "ñ"),
];

/// Apply the remap table to `text`, returning the cleaned string.
pub fn replace(text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in REPLACEMENTS {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}
