//! Built-in word catalog.
//!
//! Six themed categories with Russian words and emoji icons. The two
//! slices inside each tuple are index-aligned: `WORDS[i]` displays as
//! `ICONS[i]`.

use once_cell::sync::Lazy;

use super::{Category, WordBank};

const ANIMALS_WORDS: &[&str] = &[
    "собака", "кот", "лев", "орел", "дельфин", "панда", "тигр", "волк",
    "медведь", "лиса", "заяц", "слон", "жираф", "лошадь", "корова",
    "свинья", "овца", "коза", "курица", "утка",
];
const ANIMALS_ICONS: &[&str] = &[
    "🐕", "🐱", "🦁", "🦅", "🐬", "🐼", "🐅", "🐺", "🐻", "🦊", "🐰", "🐘",
    "🦒", "🐴", "🐄", "🐷", "🐑", "🐐", "🐔", "🦆",
];

const NATURE_WORDS: &[&str] = &[
    "солнце", "луна", "звезда", "океан", "гора", "лес", "река", "цветок",
    "дерево", "трава", "облако", "дождь", "снег", "ветер", "земля",
    "камень", "песок", "лед", "огонь", "вода",
];
const NATURE_ICONS: &[&str] = &[
    "☀️", "🌙", "⭐", "🌊", "🏔️", "🌲", "🏞️", "🌸", "🌳", "🌿", "☁️", "🌧️",
    "❄️", "💨", "🌍", "🪨", "🏖️", "🧊", "🔥", "💧",
];

const OBJECTS_WORDS: &[&str] = &[
    "ключ", "замок", "дом", "мост", "корабль", "самолет", "машина",
    "велосипед", "телефон", "компьютер", "книга", "ручка", "стол", "стул",
    "окно", "дверь", "часы", "зеркало", "лампа", "сумка",
];
const OBJECTS_ICONS: &[&str] = &[
    "🔑", "🔒", "🏠", "🌉", "🚢", "✈️", "🚗", "🚲", "📱", "💻", "📚", "✏️",
    "🪑", "🪑", "🪟", "🚪", "⏰", "🪞", "💡", "👜",
];

const FOOD_WORDS: &[&str] = &[
    "яблоко", "хлеб", "мед", "молоко", "рыба", "мясо", "овощи", "фрукты",
    "сыр", "масло", "сахар", "соль", "перец", "чай", "кофе", "вода", "сок",
    "торт", "печенье", "конфеты",
];
const FOOD_ICONS: &[&str] = &[
    "🍎", "🍞", "🍯", "🥛", "🐟", "🥩", "🥬", "🍇", "🧀", "🧈", "🍬", "🧂",
    "🌶️", "🍵", "☕", "💧", "🧃", "🍰", "🍪", "🍭",
];

const COLORS_WORDS: &[&str] = &[
    "красный", "синий", "зеленый", "желтый", "белый", "черный", "серый",
    "розовый", "фиолетовый", "оранжевый", "коричневый", "золотой",
    "серебряный", "бирюзовый", "малиновый",
];
const COLORS_ICONS: &[&str] = &[
    "🔴", "🔵", "🟢", "🟡", "⚪", "⚫", "🔘", "🩷", "🟣", "🟠", "🤎", "🟨",
    "⚫", "🩵", "🌺",
];

const EMOTIONS_WORDS: &[&str] = &[
    "радость", "грусть", "смех", "улыбка", "любовь", "дружба", "мир",
    "счастье", "удача", "мечта", "надежда", "вера", "сила", "мудрость",
    "терпение",
];
const EMOTIONS_ICONS: &[&str] = &[
    "😊", "😢", "😂", "😄", "❤️", "🤝", "☮️", "😍", "🍀", "💭", "🙏", "✨",
    "💪", "🧠", "⏳",
];

const CATEGORIES: &[(&str, &[&str], &[&str])] = &[
    ("animals", ANIMALS_WORDS, ANIMALS_ICONS),
    ("nature", NATURE_WORDS, NATURE_ICONS),
    ("objects", OBJECTS_WORDS, OBJECTS_ICONS),
    ("food", FOOD_WORDS, FOOD_ICONS),
    ("colors", COLORS_WORDS, COLORS_ICONS),
    ("emotions", EMOTIONS_WORDS, EMOTIONS_ICONS),
];

static BUILTIN: Lazy<WordBank> = Lazy::new(|| {
    let categories = CATEGORIES
        .iter()
        .map(|(name, words, icons)| {
            Category::new(
                *name,
                words.iter().map(|w| w.to_string()).collect(),
                icons.iter().map(|i| i.to_string()).collect(),
            )
            .expect("built-in category tables are index-aligned")
        })
        .collect();
    WordBank::new(categories).expect("built-in bank is non-empty")
});

pub(super) fn bank() -> &'static WordBank {
    &BUILTIN
}
