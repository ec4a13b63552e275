/*!

# One Place to Choose a Hash

Every hashed collection in this crate is drawn from this module. None of the pattern modules
name `hashbrown` or `twox_hash` directly; they use [`HashMap`] and [`HashSet`] from here. If
we ever want a different hash function or a different table implementation, this is the only
file that changes.

It's the most boring software engineering practice there is, and it is ignored constantly for
hashing. The same goes for thread pools, interning, spans, and `smallvec`-alikes. Logging is
the happy exception, thanks to the `log` crate, which is why the rest of the crate only ever
talks to the `log` facade.

*/

use std::hash::{BuildHasherDefault, Hash, Hasher};

use twox_hash::XxHash3_128;

/// A streaming XXH3 hasher with a 128-bit digest available on demand.
pub struct Xxh3Hasher128(XxHash3_128);

impl Default for Xxh3Hasher128 {
    fn default() -> Self {
        Self(XxHash3_128::new())
    }
}

impl Hasher for Xxh3Hasher128 {
    fn write(&mut self, bytes: &[u8]) {
        self.0.write(bytes);
    }

    // `Hasher` wants a u64; hand out the low half of the 128-bit digest.
    fn finish(&self) -> u64 {
        self.0.finish_128() as u64
    }
}

impl Xxh3Hasher128 {
    pub fn finish_u128(self) -> u128 {
        self.0.finish_128()
    }
}

pub type Xxh3BuildHasher = BuildHasherDefault<Xxh3Hasher128>;

pub type HashMap<K, V> = hashbrown::HashMap<K, V, Xxh3BuildHasher>;
pub type HashSet<T> = hashbrown::HashSet<T, Xxh3BuildHasher>;

/// Hashes a single value to its full 128-bit digest.
pub fn one_shot_128<T: Hash + ?Sized>(value: &T) -> u128 {
    let mut h = Xxh3Hasher128::default();
    value.hash(&mut h);
    h.finish_u128()
}
