//! Static catalogues shipped with the client.
//!
//! The backend has no endpoints for bank-sampah locations or the education
//! feed, so both are bundled here.

use crate::entities::{BankSampahLocation, EducationItem};

const LOCATIONS: [(&str, &str, &str, f32); 6] = [
    ("1", "Bank Sampah A", "Jl. Merdeka No. 1", 4.8),
    ("2", "Bank Sampah B", "Jl. Sudirman No. 2", 4.6),
    ("3", "Bank Sampah C", "Jl. Thamrin No. 3", 4.7),
    ("4", "Bank Sampah D", "Jl. Thamrin No. 44", 4.7),
    ("5", "Bank Sampah E", "Jl. Thamrin No. 334535", 4.7),
    ("6", "Bank Sampah F", "Jl. Thamrin No. 338888", 4.9),
];

/// All known bank-sampah locations, in display order.
#[must_use]
pub fn locations() -> Vec<BankSampahLocation> {
    LOCATIONS
        .iter()
        .map(|(id, name, address, rating)| BankSampahLocation {
            id: (*id).to_string(),
            name: (*name).to_string(),
            address: (*address).to_string(),
            rating: *rating,
        })
        .collect()
}

/// Look up a location by id.
#[must_use]
pub fn location(id: &str) -> Option<BankSampahLocation> {
    locations().into_iter().find(|loc| loc.id == id)
}

/// The education feed, newest first.
#[must_use]
pub fn education_feed() -> Vec<EducationItem> {
    vec![
        EducationItem {
            title: "Cara membuat lubang biopori".into(),
            category: "Edukasi".into(),
            published: "1 hari yang lalu".into(),
            video_id: Some("Dn7AROdyVKo".into()),
        },
        EducationItem {
            title: "Dari Sampah ke Barang Bernilai - Proses Daur Ulang Kertas, Plastik, dan Logam"
                .into(),
            category: "Edukasi".into(),
            published: "4 hari yang lalu".into(),
            video_id: None,
        },
    ]
}
