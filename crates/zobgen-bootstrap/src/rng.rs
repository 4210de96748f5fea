use rand::{Error, RngCore, SeedableRng};

/// The SplitMix64 generator of Steele, Lea and Flood, as specified by Vigna's
/// reference implementation: the state advances by the 64-bit golden gamma on
/// every draw, and the output is a murmur-style mix of the advanced state.
///
/// Generated tables must be byte-identical across runs, platforms and
/// library upgrades, which rules out generators whose algorithm or seeding
/// procedure may change between versions (`StdRng` documents exactly that
/// caveat). SplitMix64 is pinned here in full so a reimplementation in any
/// language can reproduce the sequence bit for bit.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    const GOLDEN_GAMMA: u64 = 0x9E3779B97F4A7C15;
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(Self::GOLDEN_GAMMA);

        let mut output = self.state;
        output = (output ^ (output >> 30)).wrapping_mul(0xBF58476D1CE4E58B);
        output = (output ^ (output >> 27)).wrapping_mul(0x94D049BB133111EB);

        output ^ (output >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(8);

        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u64().to_le_bytes());
        }

        let remainder = chunks.into_remainder();

        if !remainder.is_empty() {
            let last = self.next_u64().to_le_bytes();
            remainder.copy_from_slice(&last[..remainder.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);

        Ok(())
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed),
        }
    }

    // The default implementation pre-mixes the seed. The state must be the
    // seed itself, or the pinned algorithm no longer describes the sequence.
    fn seed_from_u64(state: u64) -> Self {
        Self { state }
    }
}
