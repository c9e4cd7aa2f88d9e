pub mod residues;
