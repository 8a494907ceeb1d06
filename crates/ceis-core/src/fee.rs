//! Conference fee computation
//!
//! Pure function over the answer store. The base fee covers the venue and
//! shared accommodation; bus and single-room options add their surcharge.

use crate::steps::keys;
use crate::store::AnswerStore;

/// Base conference fee in dinars.
pub const BASE_FEE: u32 = 145;

/// `145 + bus + room`, with unset prices treated as 0.
pub fn total(store: &AnswerStore) -> u32 {
    BASE_FEE + store.price(keys::BUS) + store.price(keys::ROOM)
}

/// Display form of a total, e.g. "275 DT".
pub fn format_total(total: u32) -> String {
    format!("{total} DT")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_store_is_base_fee() {
        let store = AnswerStore::new();
        assert_eq!(total(&store), 145);
    }

    #[test]
    fn full_package_with_single_room() {
        let mut store = AnswerStore::new();
        store.set(keys::BUS, "Full Package");
        store.set_price(keys::BUS, 30);
        store.set(keys::ROOM, "Yes");
        store.set_price(keys::ROOM, 100);
        assert_eq!(total(&store), 275);
        assert_eq!(format_total(total(&store)), "275 DT");
    }

    proptest! {
        #[test]
        fn total_is_base_plus_parts(bus in 0u32..500, room in 0u32..500) {
            let mut store = AnswerStore::new();
            store.set_price(keys::BUS, bus);
            store.set_price(keys::ROOM, room);
            prop_assert_eq!(total(&store), BASE_FEE + bus + room);
            // Idempotent: recomputing changes nothing
            prop_assert_eq!(total(&store), total(&store));
        }
    }
}
