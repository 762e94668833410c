//! Struct `Sample` represents a batch of labeled examples.
//! Struct `WeightedSample` pairs it with a weight vector.

// Provides sample struct.
pub(crate) mod sample_struct;

// Provides the weighted, append-only training buffer.
pub(crate) mod weighted_sample;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
pub use weighted_sample::WeightedSample;
