use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::nutrition::entities::NutritionRecord;

const DISHES: &[(&str, NutritionRecord)] = &[
    ("AlooGobi", NutritionRecord::new(172.0, 4.3, 18.5, 10.2, 150.0)),
    ("AlooMasala", NutritionRecord::new(195.0, 3.8, 25.6, 9.5, 175.0)),
    ("Bhatura", NutritionRecord::new(330.0, 7.5, 52.0, 12.5, 100.0)),
    ("BhindiMasala", NutritionRecord::new(158.0, 3.2, 14.8, 11.0, 150.0)),
    ("Biryani", NutritionRecord::new(350.0, 12.0, 45.0, 12.0, 250.0)),
    ("Chai", NutritionRecord::new(85.0, 2.5, 10.5, 3.8, 150.0)),
    ("Chole", NutritionRecord::new(210.0, 9.0, 30.5, 7.0, 175.0)),
    ("CoconutChutney", NutritionRecord::new(175.0, 2.0, 8.5, 16.0, 50.0)),
    ("Dal", NutritionRecord::new(116.0, 9.0, 20.0, 0.4, 175.0)),
    ("Dosa", NutritionRecord::new(133.0, 2.6, 25.0, 1.9, 90.0)),
    ("DumAloo", NutritionRecord::new(210.0, 4.0, 28.0, 10.0, 180.0)),
    ("FishCurry", NutritionRecord::new(195.0, 20.0, 12.0, 8.5, 200.0)),
    ("Ghevar", NutritionRecord::new(310.0, 5.0, 45.0, 12.0, 100.0)),
    ("GreenChutney", NutritionRecord::new(45.0, 2.0, 6.5, 1.5, 30.0)),
    ("GulabJamun", NutritionRecord::new(320.0, 4.0, 45.0, 14.0, 100.0)),
    ("Idli", NutritionRecord::new(39.0, 2.0, 7.0, 0.2, 40.0)),
    ("Jalebi", NutritionRecord::new(328.0, 3.0, 55.0, 12.0, 100.0)),
    ("Kebab", NutritionRecord::new(285.0, 22.0, 8.0, 18.5, 150.0)),
    ("Kheer", NutritionRecord::new(255.0, 7.0, 40.0, 8.0, 200.0)),
    ("Kulfi", NutritionRecord::new(220.0, 5.0, 25.0, 12.0, 90.0)),
    ("Lassi", NutritionRecord::new(150.0, 6.0, 28.0, 2.0, 250.0)),
    ("MuttonCurry", NutritionRecord::new(240.0, 25.0, 12.0, 12.0, 200.0)),
    ("OnionPakoda", NutritionRecord::new(230.0, 6.0, 22.0, 14.0, 100.0)),
    ("PalakPaneer", NutritionRecord::new(275.0, 16.0, 12.5, 18.0, 175.0)),
    ("Poha", NutritionRecord::new(180.0, 3.5, 35.0, 3.0, 150.0)),
    ("RajmaCurry", NutritionRecord::new(195.0, 10.0, 28.0, 5.0, 175.0)),
    ("RasMalai", NutritionRecord::new(230.0, 8.0, 28.0, 10.0, 120.0)),
    ("Samosa", NutritionRecord::new(262.0, 4.0, 30.0, 13.0, 80.0)),
    ("ShahiPaneer", NutritionRecord::new(310.0, 17.0, 15.0, 22.0, 175.0)),
    ("WhiteRice", NutritionRecord::new(130.0, 2.7, 28.0, 0.3, 150.0)),
];

static CATALOG: LazyLock<NutritionCatalog> =
    LazyLock::new(|| NutritionCatalog::from_entries(DISHES));

/// Process-wide catalog of the dishes the recognition model knows about.
pub fn catalog() -> &'static NutritionCatalog {
    &CATALOG
}

/// Read-only name to nutrition dictionary with case-insensitive, exact-match lookup.
#[derive(Debug)]
pub struct NutritionCatalog {
    entries: &'static [(&'static str, NutritionRecord)],
    index: HashMap<String, usize>,
}

impl NutritionCatalog {
    pub fn from_entries(entries: &'static [(&'static str, NutritionRecord)]) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, (name, _))| (name.to_lowercase(), position))
            .collect();

        Self { entries, index }
    }

    pub fn lookup(&self, name: &str) -> Option<&NutritionRecord> {
        self.lookup_entry(name).map(|(_, record)| record)
    }

    /// Like [`lookup`](Self::lookup), but also returns the canonical spelling of the name.
    pub fn lookup_entry(&self, name: &str) -> Option<(&'static str, &NutritionRecord)> {
        self.index
            .get(&name.to_lowercase())
            .map(|&position| {
                let (canonical, record) = &self.entries[position];
                (*canonical, record)
            })
    }

    /// Canonical names in dictionary order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
