use common::types::Address;

struct CannedAddress {
    address: &'static str,
    city: &'static str,
    state: &'static str,
    zip: &'static str,
}

static ADDRESSES: &[CannedAddress] = &[
    CannedAddress { address: "777 Brockton Avenue", city: "Abington", state: "MA", zip: "02351" },
    CannedAddress { address: "30 Memorial Drive", city: "Avon", state: "MA", zip: "02322" },
    CannedAddress { address: "250 Hartford Avenue", city: "Bellingham", state: "MA", zip: "02019" },
    CannedAddress { address: "700 Oak Street", city: "Brockton", state: "MA", zip: "02301" },
    CannedAddress { address: "66-4 Parkhurst Rd", city: "Chelmsford", state: "MA", zip: "01824" },
    CannedAddress { address: "591 Memorial Dr", city: "Chicopee", state: "MA", zip: "01020" },
    CannedAddress { address: "55 Brooksby Village Way", city: "Danvers", state: "MA", zip: "01923" },
    CannedAddress { address: "137 Teaticket Hwy", city: "East Falmouth", state: "MA", zip: "02536" },
];

/// Address for a coordinate. The same lat/lon always yields the same entry.
pub fn address_for(lat: f64, lon: f64) -> Address {
    let idx = (lat.to_bits() ^ lon.to_bits()) as usize % ADDRESSES.len();
    let canned = &ADDRESSES[idx];
    Address {
        address: canned.address.to_string(),
        city: canned.city.to_string(),
        state: canned.state.to_string(),
        zip: canned.zip.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_coordinate_same_address() {
        let a = address_for(40.73061, -73.935242);
        let b = address_for(40.73061, -73.935242);
        assert_eq!(a, b);
    }

    #[test]
    fn every_pick_is_a_complete_address() {
        for (lat, lon) in [(0.0, 0.0), (40.73061, -73.935242), (-33.86, 151.2), (90.0, -180.0)] {
            let addr = address_for(lat, lon);
            assert!(!addr.address.is_empty());
            assert!(!addr.city.is_empty());
            assert!(!addr.state.is_empty());
            assert!(!addr.zip.is_empty());
        }
    }
}
