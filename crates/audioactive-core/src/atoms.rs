//! Atoms - Conway's common elements and substring detection
//!
//! Under repeated decay every sufficiently long term splits into a
//! compound of 92 "common elements" (Conway's cosmological theorem).
//! Detection here is plain substring containment: an entry is reported
//! whenever its pattern occurs anywhere in the term, whether or not it
//! sits on a split point of the actual factorization.
//!
//! Cost is `O(atoms * term_len * pattern_len)` in the worst case: 92
//! patterns of at most 42 digits against terms of ~1e5 digits after 40
//! iterations and ~1.4e6 after 50.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{AudioactiveError, Result};
use crate::types::constants::ALPHABET;

/// Conway's common elements, hydrogen to uranium
const CONWAY_ELEMENTS: [(u8, &str, &str); 92] = [
    (1, "H", "22"),
    (2, "He", "13112221133211322112211213322112"),
    (3, "Li", "312211322212221121123222112"),
    (4, "Be", "111312211312113221133211322112211213322112"),
    (5, "B", "1321132122211322212221121123222112"),
    (6, "C", "3113112211322112211213322112"),
    (7, "N", "111312212221121123222112"),
    (8, "O", "132112211213322112"),
    (9, "F", "31121123222112"),
    (10, "Ne", "111213322112"),
    (11, "Na", "123222112"),
    (12, "Mg", "3113322112"),
    (13, "Al", "1113222112"),
    (14, "Si", "1322112"),
    (15, "P", "311311222112"),
    (16, "S", "1113122112"),
    (17, "Cl", "132112"),
    (18, "Ar", "3112"),
    (19, "K", "1112"),
    (20, "Ca", "12"),
    (21, "Sc", "3113112221133112"),
    (22, "Ti", "11131221131112"),
    (23, "V", "13211312"),
    (24, "Cr", "31132"),
    (25, "Mn", "111311222112"),
    (26, "Fe", "13122112"),
    (27, "Co", "32112"),
    (28, "Ni", "11133112"),
    (29, "Cu", "131112"),
    (30, "Zn", "312"),
    (31, "Ga", "13221133122211332"),
    (32, "Ge", "31131122211311122113222"),
    (33, "As", "11131221131211322113322112"),
    (34, "Se", "13211321222113222112"),
    (35, "Br", "3113112211322112"),
    (36, "Kr", "11131221222112"),
    (37, "Rb", "1321122112"),
    (38, "Sr", "3112112"),
    (39, "Y", "1112133"),
    (40, "Zr", "12322211331222113112211"),
    (41, "Nb", "1113122113322113111221131221"),
    (42, "Mo", "13211322211312113211"),
    (43, "Tc", "311322113212221"),
    (44, "Ru", "132211331222113112211"),
    (45, "Rh", "311311222113111221131221"),
    (46, "Pd", "111312211312113211"),
    (47, "Ag", "132113212221"),
    (48, "Cd", "3113112211"),
    (49, "In", "11131221"),
    (50, "Sn", "13211"),
    (51, "Sb", "3112221"),
    (52, "Te", "1322113312211"),
    (53, "I", "311311222113111221"),
    (54, "Xe", "11131221131211"),
    (55, "Cs", "13211321"),
    (56, "Ba", "311311"),
    (57, "La", "11131"),
    (58, "Ce", "1321133112"),
    (59, "Pr", "31131112"),
    (60, "Nd", "111312"),
    (61, "Pm", "132"),
    (62, "Sm", "311332"),
    (63, "Eu", "1113222"),
    (64, "Gd", "13221133112"),
    (65, "Tb", "3113112221131112"),
    (66, "Dy", "111312211312"),
    (67, "Ho", "1321132"),
    (68, "Er", "311311222"),
    (69, "Tm", "11131221133112"),
    (70, "Yb", "1321131112"),
    (71, "Lu", "311312"),
    (72, "Hf", "11132"),
    (73, "Ta", "13112221133211322112211213322113"),
    (74, "W", "312211322212221121123222113"),
    (75, "Re", "111312211312113221133211322112211213322113"),
    (76, "Os", "1321132122211322212221121123222113"),
    (77, "Ir", "3113112211322112211213322113"),
    (78, "Pt", "111312212221121123222113"),
    (79, "Au", "132112211213322113"),
    (80, "Hg", "31121123222113"),
    (81, "Tl", "111213322113"),
    (82, "Pb", "123222113"),
    (83, "Bi", "3113322113"),
    (84, "Po", "1113222113"),
    (85, "At", "1322113"),
    (86, "Rn", "311311222113"),
    (87, "Fr", "1113122113"),
    (88, "Ra", "132113"),
    (89, "Ac", "3113"),
    (90, "Th", "1113"),
    (91, "Pa", "13"),
    (92, "U", "3"),
];

static CONWAY_TABLE: Lazy<AtomTable> = Lazy::new(|| {
    AtomTable::new(
        CONWAY_ELEMENTS
            .iter()
            .map(|&(number, symbol, pattern)| Atom {
                number,
                symbol: symbol.to_string(),
                pattern: pattern.to_string(),
            })
            .collect(),
    )
});

/// A named decay fragment
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Atom {
    /// Position in the periodic ordering (1 = H)
    pub number: u8,
    /// Element symbol, e.g. "Pa"
    pub symbol: String,
    /// Digit pattern, e.g. "13"
    pub pattern: String,
}

impl Atom {
    /// Create an atom, checking that the pattern is a non-empty string
    /// over {1, 2, 3}
    pub fn new(number: u8, symbol: impl Into<String>, pattern: impl Into<String>) -> Result<Self> {
        let symbol = symbol.into();
        let pattern = pattern.into();

        if pattern.is_empty() || !pattern.chars().all(|c| ALPHABET.contains(&c)) {
            return Err(AudioactiveError::InvalidInput(format!(
                "atom {} pattern {:?} must be a non-empty string over {{1, 2, 3}}",
                symbol, pattern
            )));
        }

        Ok(Self {
            number,
            symbol,
            pattern,
        })
    }
}

/// Atoms found in one term, in table order
///
/// `matches` holds whole atoms (number, symbol, pattern) so renderers can
/// show symbols; `patterns()` gives the plain matched strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AtomDetection {
    pub matches: Vec<Atom>,
    pub count: usize,
}

impl AtomDetection {
    /// Patterns of the matched atoms
    pub fn patterns(&self) -> Vec<&str> {
        self.matches.iter().map(|a| a.pattern.as_str()).collect()
    }

    /// Symbols of the matched atoms
    pub fn symbols(&self) -> Vec<&str> {
        self.matches.iter().map(|a| a.symbol.as_str()).collect()
    }
}

/// Ordered, read-only reference table of atoms
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AtomTable {
    atoms: Vec<Atom>,
}

impl AtomTable {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    /// The 92 common elements, built once per process
    pub fn conway() -> &'static AtomTable {
        &CONWAY_TABLE
    }

    /// Keep only the named atoms, preserving table order
    ///
    /// Fails with `UnknownAtom` on the first symbol not in the table.
    pub fn subset<S: AsRef<str>>(&self, symbols: &[S]) -> Result<AtomTable> {
        let wanted: Vec<&str> = symbols.iter().map(|s| s.as_ref()).collect();

        if let Some(unknown) = wanted.iter().find(|s| self.get(s).is_none()) {
            return Err(AudioactiveError::UnknownAtom(unknown.to_string()));
        }

        let atoms = self
            .atoms
            .iter()
            .filter(|atom| wanted.contains(&atom.symbol.as_str()))
            .cloned()
            .collect();

        Ok(Self { atoms })
    }

    /// Look up an atom by symbol
    pub fn get(&self, symbol: &str) -> Option<&Atom> {
        self.atoms.iter().find(|atom| atom.symbol == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Every atom whose pattern occurs in `term`, in table order
    ///
    /// Overlapping and nested occurrences are reported independently.
    pub fn detect(&self, term: &str) -> AtomDetection {
        let matches: Vec<Atom> = self
            .atoms
            .iter()
            .filter(|atom| term.contains(atom.pattern.as_str()))
            .cloned()
            .collect();

        AtomDetection {
            count: matches.len(),
            matches,
        }
    }
}
