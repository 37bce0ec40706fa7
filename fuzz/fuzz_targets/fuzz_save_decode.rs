//! Fuzz target: `save::deserialize`
//!
//! Drives arbitrary bytes into the save decoder and asserts that it never
//! panics, that anything it accepts has every need in range, and that an
//! accepted pet survives a second encode/decode unchanged.
//!
//! cargo fuzz run fuzz_save_decode

#![no_main]

use libfuzzer_sys::fuzz_target;
use pocketpet::character::{NEED_MAX_MILLI, NeedKind};
use pocketpet::save;

fuzz_target!(|data: &[u8]| {
    let Ok(pet) = save::deserialize(data) else {
        return;
    };
    for kind in NeedKind::ALL {
        assert!(pet.need_milli(kind) <= NEED_MAX_MILLI, "{kind:?} out of range");
    }
    let again = save::deserialize(&save::serialize(&pet));
    assert_eq!(again, Ok(pet), "accepted record must survive re-encoding");
});
