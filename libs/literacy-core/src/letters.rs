//! Static Spanish alphabet catalog.

use serde::Serialize;

/// Level holding the five vowels.
pub const LEVEL_VOWELS: u8 = 1;
/// Level holding the consonants.
pub const LEVEL_CONSONANTS: u8 = 2;

/// A letter with its example words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Letter {
    pub letter: &'static str,
    pub words: &'static [&'static str],
    pub emoji: &'static str,
    pub level: u8,
}

impl Letter {
    const fn new(
        letter: &'static str,
        words: &'static [&'static str],
        emoji: &'static str,
        level: u8,
    ) -> Self {
        Self {
            letter,
            words,
            emoji,
            level,
        }
    }

    pub fn is_vowel(&self) -> bool {
        self.level == LEVEL_VOWELS
    }
}

pub static LETTERS: [Letter; 27] = [
    Letter::new("A", &["AVIÓN", "ÁRBOL", "AGUA"], "✈️", LEVEL_VOWELS),
    Letter::new("E", &["ELEFANTE", "ESTRELLA", "ESCUELA"], "🐘", LEVEL_VOWELS),
    Letter::new("I", &["IGLÚ", "ISLA", "IMÁN"], "🏠", LEVEL_VOWELS),
    Letter::new("O", &["OSO", "OJO", "OVEJA"], "🐻", LEVEL_VOWELS),
    Letter::new("U", &["UVA", "UÑA", "UNICORNIO"], "🍇", LEVEL_VOWELS),
    Letter::new("B", &["BARCO", "BOLA", "BEBÉ"], "⛵", LEVEL_CONSONANTS),
    Letter::new("C", &["COCHE", "CASA", "CAMA"], "🚗", LEVEL_CONSONANTS),
    Letter::new("D", &["DELFÍN", "DADO", "DEDO"], "🐬", LEVEL_CONSONANTS),
    Letter::new("F", &["FLOR", "FUEGO", "FOCA"], "🌸", LEVEL_CONSONANTS),
    Letter::new("G", &["GATO", "GLOBO", "GUITARRA"], "🐱", LEVEL_CONSONANTS),
    Letter::new("H", &["HELADO", "HOJA", "HUEVO"], "🍦", LEVEL_CONSONANTS),
    Letter::new("J", &["JIRAFA", "JUGO", "JARDÍN"], "🦒", LEVEL_CONSONANTS),
    Letter::new("K", &["KIWI", "KARATE", "KOALA"], "🥝", LEVEL_CONSONANTS),
    Letter::new("L", &["LEÓN", "LUNA", "LIBRO"], "🦁", LEVEL_CONSONANTS),
    Letter::new("M", &["MAMÁ", "MANO", "MESA"], "👩", LEVEL_CONSONANTS),
    Letter::new("N", &["NUBE", "NARIZ", "NIDO"], "☁️", LEVEL_CONSONANTS),
    Letter::new("Ñ", &["NIÑO", "ÑANDÚ", "CAÑA"], "👶", LEVEL_CONSONANTS),
    Letter::new("P", &["PAPÁ", "PELOTA", "PEZ"], "👨", LEVEL_CONSONANTS),
    Letter::new("Q", &["QUESO", "QUETZAL", "QUINOA"], "🧀", LEVEL_CONSONANTS),
    Letter::new("R", &["RATÓN", "ROSA", "RELOJ"], "🐭", LEVEL_CONSONANTS),
    Letter::new("S", &["SOL", "SAPO", "SILLA"], "☀️", LEVEL_CONSONANTS),
    Letter::new("T", &["TIGRE", "TREN", "TORTUGA"], "🐅", LEVEL_CONSONANTS),
    Letter::new("V", &["VACA", "VIENTO", "VIOLÍN"], "🐄", LEVEL_CONSONANTS),
    Letter::new("W", &["WIFI", "WAFFLE", "WHISKY"], "📶", LEVEL_CONSONANTS),
    Letter::new("X", &["XILÓFONO", "TAXI", "BOXEO"], "🎵", LEVEL_CONSONANTS),
    Letter::new("Y", &["YOYO", "YATE", "YOGUR"], "🪀", LEVEL_CONSONANTS),
    Letter::new("Z", &["ZAPATO", "ZORRO", "ZONA"], "👟", LEVEL_CONSONANTS),
];

/// Look up a letter, ignoring case and surrounding whitespace.
pub fn letter(name: &str) -> Option<&'static Letter> {
    let name = name.trim().to_uppercase();
    LETTERS.iter().find(|l| l.letter == name)
}

/// All letters unlocked at `level`.
pub fn letters_for_level(level: u8) -> impl Iterator<Item = &'static Letter> {
    LETTERS.iter().filter(move |l| l.level <= level)
}

pub fn vowels() -> impl Iterator<Item = &'static Letter> {
    LETTERS.iter().filter(|l| l.is_vowel())
}

pub fn consonants() -> impl Iterator<Item = &'static Letter> {
    LETTERS.iter().filter(|l| l.level == LEVEL_CONSONANTS)
}
