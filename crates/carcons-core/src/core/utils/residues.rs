use phf::{Map, phf_map};

/// The gap symbol used in aligned sequences.
pub const GAP: u8 = b'-';

/// Alternative gap symbols normalized to [`GAP`] when sequences are read.
const GAP_ALIASES: &[u8] = b".";

static AMINO_ACID_NAMES: Map<char, &'static str> = phf_map! {
    'A' => "ALA", 'R' => "ARG", 'N' => "ASN", 'D' => "ASP", 'C' => "CYS",
    'Q' => "GLN", 'E' => "GLU", 'G' => "GLY", 'H' => "HIS", 'I' => "ILE",
    'L' => "LEU", 'K' => "LYS", 'M' => "MET", 'F' => "PHE", 'P' => "PRO",
    'S' => "SER", 'T' => "THR", 'W' => "TRP", 'Y' => "TYR", 'V' => "VAL",
    'B' => "ASX", 'Z' => "GLX", 'X' => "UNK",
};

pub fn is_gap(symbol: u8) -> bool {
    symbol == GAP
}

/// Maps a raw alignment byte onto the canonical residue alphabet: upper case,
/// with gap aliases folded onto [`GAP`].
pub fn normalize_symbol(symbol: u8) -> u8 {
    if GAP_ALIASES.contains(&symbol) {
        GAP
    } else {
        symbol.to_ascii_uppercase()
    }
}

pub fn is_amino_acid(symbol: char) -> bool {
    AMINO_ACID_NAMES.contains_key(&symbol.to_ascii_uppercase())
}

pub fn three_letter_code(symbol: char) -> Option<&'static str> {
    AMINO_ACID_NAMES.get(&symbol.to_ascii_uppercase()).copied()
}
