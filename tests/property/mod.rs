mod decoding;
mod ordering;
