//! Chain Registry.
//!
//! Ordered mapping from lowercase name substrings to known restaurant chains.
//! Detection is first-match-wins, so the table order is part of the contract.

use std::collections::HashSet;

use validator::Validate;

use crate::error::AppError;
use crate::models::ChainEntry;

/// (match key, display name, menu key, sample nutrition queries), in precedence order.
const BUILTIN_CHAINS: &[(&str, &str, &str, &[&str])] = &[
    ("chipotle", "Chipotle", "chipotle", &[
        "chipotle carnitas salad bowl no rice no beans",
        "chipotle steak bowl lettuce cheese guacamole",
        "chipotle chicken salad no rice",
    ]),
    ("five guys", "Five Guys", "fiveguys", &[
        "five guys bunless burger",
        "five guys lettuce wrap bacon cheeseburger",
        "five guys bunless little cheeseburger",
    ]),
    ("panera", "Panera Bread", "panera", &[
        "panera caesar salad chicken no croutons",
        "panera greek salad",
        "panera avocado egg white",
    ]),
    ("subway", "Subway", "subway", &[
        "subway salad bowl turkey",
        "subway chicken bacon ranch salad",
        "subway tuna salad bowl",
    ]),
    ("chick-fil-a", "Chick-fil-A", "chickfila", &[
        "chick fil a grilled chicken nuggets",
        "chick fil a cobb salad no corn",
        "chick fil a grilled chicken",
    ]),
    ("mcdonald", "McDonald's", "mcdonalds", &[
        "mcdonalds quarter pounder no bun",
        "mcdonalds bacon egg cheese no muffin",
        "mcdonalds sausage burrito no tortilla",
        "quarter pounder patty",
        "double cheeseburger no bun",
        "bacon egg and cheese no biscuit",
        "mcdonald grilled chicken",
        "side salad",
    ]),
    ("wendy", "Wendy's", "wendys", &[
        "wendys baconator no bun",
        "wendys dave single no bun",
        "wendys caesar salad grilled chicken",
    ]),
    ("burger king", "Burger King", "burgerking", &[
        "whopper patty no bun",
        "double whopper no bun",
        "bacon king no bun",
        "grilled chicken sandwich no bun",
    ]),
    ("taco bell", "Taco Bell", "tacobell", &[
        "power bowl no rice no beans",
        "taco bell steak",
        "cheese quesadilla",
        "black beans",
    ]),
    ("dunkin", "Dunkin'", "dunkin", &[
        "dunkin egg and cheese",
        "bacon egg and cheese wake up wrap",
        "sausage egg and cheese",
        "coffee black",
    ]),
    ("starbucks", "Starbucks", "starbucks", &[
        "starbucks egg bites",
        "bacon gruyere egg bites",
        "chicken sausage egg bites",
        "unsweetened iced coffee",
    ]),
    ("olive garden", "Olive Garden", "olivegarden", &[
        "olive garden grilled chicken",
        "olive garden shrimp scampi no pasta",
        "olive garden salmon",
    ]),
    ("red lobster", "Red Lobster", "redlobster", &[
        "red lobster live maine lobster",
        "red lobster wood-grilled lobster tail",
        "red lobster grilled salmon",
    ]),
    ("buffalo wild wings", "Buffalo Wild Wings", "buffalowildwings", &[
        "buffalo wild wings traditional wings",
        "buffalo wild wings naked tenders",
        "buffalo wild wings caesar salad",
    ]),
    ("outback", "Outback Steakhouse", "outback", &[
        "outback ribeye steak",
        "outback victoria filet",
        "outback grilled chicken",
    ]),
    ("texas roadhouse", "Texas Roadhouse", "texasroadhouse", &[
        "texas roadhouse ribeye",
        "texas roadhouse sirloin",
        "texas roadhouse grilled chicken salad",
    ]),
    ("longhorn", "LongHorn Steakhouse", "longhorn", &[
        "longhorn outlaw ribeye",
        "longhorn flo filet",
        "longhorn grilled salmon",
    ]),
    ("applebee", "Applebee's", "applebees", &[
        "applebees bourbon street steak",
        "applebees grilled chicken caesar salad",
        "applebees shrimp",
    ]),
    ("chili", "Chili's", "chilis", &[
        "chilis ancho salmon",
        "chilis grilled chicken salad",
        "chilis chicken fajitas no tortilla",
    ]),
    ("tgi friday", "TGI Friday's", "tgifridays", &[
        "tgi fridays grilled salmon",
        "tgi fridays steak",
        "tgi fridays caesar salad",
    ]),
    ("in-n-out", "In-N-Out Burger", "innout", &[
        "in n out protein style burger",
        "in n out double double protein style",
        "in n out cheeseburger lettuce wrap",
    ]),
    ("shake shack", "Shake Shack", "shakeshack", &[
        "shake shack lettuce wrap burger",
        "shake shack shackburger no bun",
        "shake shack cheese fries no fries",
    ]),
    ("jimmy john", "Jimmy John's", "jimmyjohns", &[
        "jimmy johns unwich turkey",
        "jimmy johns lettuce wrap italian",
        "jimmy johns unwich club",
    ]),
    ("jersey mike", "Jersey Mike's", "jerseymikes", &[
        "jersey mikes sub in a tub",
        "jersey mikes chipotle cheesesteak bowl",
        "jersey mikes club bowl",
    ]),
    ("qdoba", "Qdoba", "qdoba", &[
        "qdoba steak bowl no rice",
        "qdoba chicken salad",
        "qdoba fajita bowl no beans",
    ]),
    ("moe", "Moe's Southwest Grill", "moes", &[
        "moes chicken bowl no rice",
        "moes steak salad",
        "moes carnitas bowl",
    ]),
    ("wingstop", "Wingstop", "wingstop", &[
        "wingstop classic wings",
        "wingstop original hot wings",
        "wingstop lemon pepper wings",
    ]),
    ("popeyes", "Popeyes", "popeyes", &[
        "popeyes blackened chicken tenders",
        "popeyes naked chicken",
        "popeyes green beans",
    ]),
    ("kfc", "KFC", "kfc", &[
        "kfc grilled chicken breast",
        "kfc original chicken no breading",
        "kfc green beans",
    ]),
    ("panda express", "Panda Express", "pandaexpress", &[
        "panda express grilled teriyaki chicken",
        "panda express string bean chicken breast",
        "panda express mushroom chicken",
    ]),
    ("cheesecake factory", "The Cheesecake Factory", "cheesecakefactory", &[
        "cheesecake factory grilled salmon",
        "cheesecake factory steak",
        "cheesecake factory chicken salad",
    ]),
    ("red robin", "Red Robin", "redrobin", &[
        "red robin lettuce wrap burger",
        "red robin tavern burger no bun",
        "red robin wedgie burger",
    ]),
    ("carrabba", "Carrabba's Italian Grill", "carrabbas", &[
        "carrabbas chicken bryan",
        "carrabbas grilled salmon",
        "carrabbas sirloin marsala",
    ]),
    ("poke bros", "Poke Bros", "pokebros", &[
        "poke bros salad base bowl",
        "poke bros salmon avocado bowl",
        "poke bros tuna cucumber bowl",
    ]),
    ("baja", "Baja's", "bajas", &[
        "bajas salad bowl chicken no rice",
        "bajas chicken wings plain",
        "bajas birria meat no tortilla",
        "bajas steak salad bowl",
    ]),
    ("legal sea", "Legal Sea Foods", "legalseafoods", &[
        "legal sea foods grilled salmon broccoli",
        "legal sea foods steamed lobster",
        "legal sea foods caesar salad grilled chicken",
        "legal sea foods ribeye steak",
        "legal sea foods sashimi",
    ]),
];

/// Immutable, ordered set of known chains.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    entries: Vec<ChainEntry>,
}

impl ChainRegistry {
    /// Build a registry from entries in precedence order.
    ///
    /// Match keys must be non-empty, lowercase and unique. Display names may repeat.
    pub fn new(entries: Vec<ChainEntry>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            entry.validate()?;
            if entry.match_key != entry.match_key.to_lowercase() {
                return Err(AppError::Validation(format!(
                    "chain match key '{}' must be lowercase",
                    entry.match_key
                )));
            }
            if !seen.insert(entry.match_key.as_str()) {
                return Err(AppError::Validation(format!(
                    "duplicate chain match key '{}'",
                    entry.match_key
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The registry of chains the service knows about out of the box.
    pub fn builtin() -> Self {
        let entries = BUILTIN_CHAINS
            .iter()
            .map(|(key, name, menu_key, queries)| ChainEntry::new(key, name, menu_key, queries))
            .collect();
        Self { entries }
    }

    /// Case-insensitive substring match against the registry; the first entry wins.
    pub fn detect_chain(&self, name: &str) -> Option<&ChainEntry> {
        let lowered = name.to_lowercase();
        self.entries
            .iter()
            .find(|entry| lowered.contains(entry.match_key.as_str()))
    }

    pub fn entries(&self) -> &[ChainEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
