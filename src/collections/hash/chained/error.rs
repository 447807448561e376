use derive_more::{Display, Error};

/// A [`ChainedMap`](super::ChainedMap) was configured with a bucket exponent outside of
/// `1..=MAX_BUCKET_BITS`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to create a map with 2^{bits} buckets, expected between 2^1 and 2^24!")]
pub struct InvalidBucketBits {
    pub bits: u32,
}
