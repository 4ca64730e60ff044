//! The menu catalog: which drinks exist and how long each takes to brew.

use rand::seq::SliceRandom;
use rand::Rng;

/// Smallest number of menus in a generated order.
pub const MIN_MENUS_PER_ORDER: usize = 1;
/// Largest number of menus in a generated order.
pub const MAX_MENUS_PER_ORDER: usize = 3;

/// One drink and its brew time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub brew_seconds: u32,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, brew_seconds: u32) -> Self {
        Self {
            name: name.into(),
            brew_seconds,
        }
    }
}

/// Read-only, ordered table of menu items.
///
/// Order matters only for reproducibility: a seeded RNG draws the same menus from the same
/// table every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl MenuCatalog {
    /// The café's house menu.
    pub fn standard() -> Self {
        Self::new([
            ("Americano", 60),
            ("Cafe Latte", 90),
            ("Vanilla Latte", 100),
            ("Cold Brew", 80),
            ("Choco Latte", 120),
        ])
    }

    /// Builds a catalog from `(name, brew_seconds)` pairs. A repeated name keeps its first entry.
    pub fn new<N: Into<String>>(items: impl IntoIterator<Item = (N, u32)>) -> Self {
        let mut out: Vec<MenuItem> = Vec::new();
        for (name, secs) in items {
            let item = MenuItem::new(name, secs);
            if !out.iter().any(|existing| existing.name == item.name) {
                out.push(item);
            }
        }
        Self { items: out }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn brew_seconds(&self, name: &str) -> Option<u32> {
        self.get(name).map(|item| item.brew_seconds)
    }

    /// Draws 1 to 3 menus, uniformly and with replacement.
    ///
    /// Returns an empty list only when the catalog itself is empty.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<MenuItem> {
        if self.items.is_empty() {
            return Vec::new();
        }
        let count = rng.gen_range(MIN_MENUS_PER_ORDER..=MAX_MENUS_PER_ORDER);
        (0..count)
            .filter_map(|_| self.items.choose(rng).cloned())
            .collect()
    }
}
