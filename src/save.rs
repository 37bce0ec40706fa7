//! Save-game codec.
//!
//! The pet is persisted as one flat postcard record:
//!
//! | Field             | Encoding            |
//! |-------------------|---------------------|
//! | magic             | 4 raw bytes `PPET`  |
//! | version           | 1 raw byte          |
//! | needs (milli)     | 5 × varint `u32`    |
//! | carries           | 5 × varint `u32`    |
//! | age_ms            | varint `u64`        |
//! | last_updated_ms   | varint `u64`        |
//!
//! Magic and version are checked on the raw bytes before decoding so a
//! future format can change everything after byte 5.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::character::{CharacterState, NeedKind, NeedLevel, PerNeed};
use crate::config::GameConfig;
use crate::error::{Result, SaveError};

pub const MAGIC: [u8; 4] = *b"PPET";
pub const VERSION: u8 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SaveRecord {
    magic: [u8; 4],
    version: u8,
    needs: [u32; NeedKind::COUNT],
    carries: [u32; NeedKind::COUNT],
    age_ms: u64,
    last_updated_ms: u64,
}

impl SaveRecord {
    fn capture(state: &CharacterState) -> Self {
        let levels = state.needs();
        Self {
            magic: MAGIC,
            version: VERSION,
            needs: NeedKind::ALL.map(|k| levels.get(k).milli()),
            carries: NeedKind::ALL.map(|k| levels.get(k).carry()),
            age_ms: state.age_ms(),
            last_updated_ms: state.last_updated_ms(),
        }
    }

    fn restore(&self) -> core::result::Result<CharacterState, SaveError> {
        let mut needs = PerNeed::<NeedLevel>::default();
        for (i, kind) in NeedKind::ALL.into_iter().enumerate() {
            *needs.get_mut(kind) =
                NeedLevel::from_raw(self.needs[i], self.carries[i]).ok_or(SaveError::OutOfRange)?;
        }
        Ok(CharacterState::from_parts(needs, self.age_ms, self.last_updated_ms))
    }
}

/// Encode `state` as a save record.
pub fn serialize(state: &CharacterState) -> Vec<u8> {
    // A fixed-size record of integers cannot fail to encode.
    postcard::to_allocvec(&SaveRecord::capture(state)).unwrap_or_default()
}

/// Decode a save record.  Any defect is reported as
/// [`Error::MalformedSaveData`](crate::error::Error::MalformedSaveData).
pub fn deserialize(bytes: &[u8]) -> Result<CharacterState> {
    Ok(decode(bytes)?)
}

fn decode(bytes: &[u8]) -> core::result::Result<CharacterState, SaveError> {
    if bytes.is_empty() {
        return Err(SaveError::Missing);
    }
    if bytes.len() < MAGIC.len() || bytes[..MAGIC.len()] != MAGIC {
        return Err(SaveError::BadMagic);
    }
    match bytes.get(MAGIC.len()) {
        Some(&VERSION) => {}
        Some(&other) => return Err(SaveError::UnsupportedVersion(other)),
        None => return Err(SaveError::Decode),
    }

    let (record, rest): (SaveRecord, _) =
        postcard::take_from_bytes(bytes).map_err(|_| SaveError::Decode)?;
    if !rest.is_empty() {
        return Err(SaveError::TrailingBytes);
    }
    record.restore()
}

/// Restore the pet from `bytes`, or hatch a fresh one.
///
/// Never fails.  The second element says why the save was not used, if
/// it was not.  A restored pet is rebased to `now_ms`: the stored
/// timestamp belongs to a previous power cycle.
pub fn load_or_default(
    bytes: Option<&[u8]>,
    config: &GameConfig,
    now_ms: u64,
) -> (CharacterState, Option<SaveError>) {
    let result = match bytes {
        Some(b) => decode(b),
        None => Err(SaveError::Missing),
    };
    match result {
        Ok(mut state) => {
            state.rebase(now_ms);
            info!("Save restored (age {} s)", state.age_ms() / 1000);
            (state, None)
        }
        Err(SaveError::Missing) => {
            info!("No save found, hatching a new pet");
            (CharacterState::new(config, now_ms), Some(SaveError::Missing))
        }
        Err(e) => {
            warn!("Save rejected ({}), hatching a new pet", e);
            (CharacterState::new(config, now_ms), Some(e))
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_valid_state_round_trips(
            needs in proptest::array::uniform5(0u32..=100_000),
            carries in proptest::array::uniform5(0u32..60_000),
            age in any::<u64>(),
            last in any::<u64>(),
        ) {
            let mut levels = PerNeed::<NeedLevel>::default();
            for (i, kind) in NeedKind::ALL.into_iter().enumerate() {
                *levels.get_mut(kind) = NeedLevel::from_raw(needs[i], carries[i]).unwrap();
            }
            let state = CharacterState::from_parts(levels, age, last);
            prop_assert_eq!(deserialize(&serialize(&state)), Ok(state));
        }

        #[test]
        fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let _ = deserialize(&bytes);
        }
    }
}
