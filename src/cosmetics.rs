//! Cosmetic store catalog and per-player ownership.
//!
//! Prices are in lamports; the actual payment runs through the wallet
//! collaborator outside this crate. This module only records ownership and
//! answers catalog queries. Gameplay never depends on cosmetics.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CosmeticKind {
    Bird,
    Pipe,
    Background,
    Effect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CosmeticItem {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: CosmeticKind,
    pub price_lamports: u64,
}

/// The full store catalog. `bird_default` is free and owned implicitly.
pub const CATALOG: &[CosmeticItem] = &[
    CosmeticItem {
        id: "bird_default",
        name: "Default Bird",
        kind: CosmeticKind::Bird,
        price_lamports: 0,
    },
    CosmeticItem {
        id: "bird_1",
        name: "Classic Bird",
        kind: CosmeticKind::Bird,
        price_lamports: 10_000_000,
    },
    CosmeticItem {
        id: "bird_3",
        name: "Red Warrior Bird",
        kind: CosmeticKind::Bird,
        price_lamports: 20_000_000,
    },
    CosmeticItem {
        id: "bird_4",
        name: "Green Explorer Bird",
        kind: CosmeticKind::Bird,
        price_lamports: 30_000_000,
    },
    CosmeticItem {
        id: "bird_5",
        name: "Brown Ranger Bird",
        kind: CosmeticKind::Bird,
        price_lamports: 40_000_000,
    },
    CosmeticItem {
        id: "bird_6",
        name: "White Angel Bird",
        kind: CosmeticKind::Bird,
        price_lamports: 50_000_000,
    },
    CosmeticItem {
        id: "bird_7",
        name: "Purple Mystic Bird",
        kind: CosmeticKind::Bird,
        price_lamports: 80_000_000,
    },
    CosmeticItem {
        id: "bird_golden",
        name: "Golden Bird",
        kind: CosmeticKind::Bird,
        price_lamports: 100_000_000,
    },
    CosmeticItem {
        id: "pipe_4",
        name: "Damaged Pipe",
        kind: CosmeticKind::Pipe,
        price_lamports: 20_000_000,
    },
    CosmeticItem {
        id: "pipe_5",
        name: "Mossy Pipe",
        kind: CosmeticKind::Pipe,
        price_lamports: 30_000_000,
    },
    CosmeticItem {
        id: "pipe_6",
        name: "Copper Pipe",
        kind: CosmeticKind::Pipe,
        price_lamports: 40_000_000,
    },
    CosmeticItem {
        id: "pipe_7",
        name: "Neon Pipe",
        kind: CosmeticKind::Pipe,
        price_lamports: 60_000_000,
    },
    CosmeticItem {
        id: "background_sunset",
        name: "Sunset Background",
        kind: CosmeticKind::Background,
        price_lamports: 20_000_000,
    },
    CosmeticItem {
        id: "effect_sparkles",
        name: "Sparkle Effect",
        kind: CosmeticKind::Effect,
        price_lamports: 40_000_000,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    UnknownItem,
    AlreadyOwned,
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseError::UnknownItem => write!(f, "unknown cosmetic id"),
            PurchaseError::AlreadyOwned => write!(f, "cosmetic already owned"),
        }
    }
}

/// Catalog lookup.
pub fn find(id: &str) -> Option<&'static CosmeticItem> {
    CATALOG.iter().find(|item| item.id == id)
}

/// True if the player owns `id`. Free items count as owned.
pub fn is_owned(owned: &[String], id: &str) -> bool {
    owned.iter().any(|o| o == id) || find(id).is_some_and(|item| item.price_lamports == 0)
}

/// Record a purchase into the ownership list. Payment has already happened
/// (or not) outside; the caller emits the cosmetic-purchased quest signal on
/// success.
pub fn purchase(owned: &mut Vec<String>, id: &str) -> Result<&'static CosmeticItem, PurchaseError> {
    let item = find(id).ok_or(PurchaseError::UnknownItem)?;
    if is_owned(owned, id) {
        return Err(PurchaseError::AlreadyOwned);
    }
    owned.push(item.id.to_string());
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_default_bird_owned_implicitly() {
        assert!(is_owned(&[], "bird_default"));
        assert!(!is_owned(&[], "bird_golden"));
    }

    #[test]
    fn test_purchase_records_ownership() {
        let mut owned = Vec::new();
        let item = purchase(&mut owned, "bird_golden").unwrap();
        assert_eq!(item.name, "Golden Bird");
        assert!(is_owned(&owned, "bird_golden"));
    }

    #[test]
    fn test_purchase_rejects_duplicates_and_unknown() {
        let mut owned = vec!["pipe_4".to_string()];
        assert_eq!(
            purchase(&mut owned, "pipe_4"),
            Err(PurchaseError::AlreadyOwned)
        );
        assert_eq!(
            purchase(&mut owned, "hat_9000"),
            Err(PurchaseError::UnknownItem)
        );
        assert_eq!(owned.len(), 1);
    }
}
